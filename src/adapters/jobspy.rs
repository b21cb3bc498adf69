//! HTTP client for a JobSpy API service, which does the actual scraping.

use crate::config::toml_config::ScraperConfig;
use crate::domain::model::{Record, ResultSet, ScrapeRequest};
use crate::domain::ports::JobScraper;
use crate::utils::error::{RaptorError, Result};
use reqwest::blocking::Client;
use serde_json::Value;
use std::time::Duration;

pub const SEARCH_PATH: &str = "/api/v1/search_jobs";
pub const API_KEY_HEADER: &str = "x-api-key";

pub struct JobSpyApiScraper {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl JobSpyApiScraper {
    /// Scrapes can take minutes, so there is no timeout unless one is given.
    pub fn new(endpoint: &str, timeout: Option<Duration>) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key: None,
        })
    }

    pub fn from_config(config: &ScraperConfig) -> Result<Self> {
        let scraper = Self::new(
            &config.endpoint,
            config.timeout_seconds.map(Duration::from_secs),
        )?;
        Ok(match config.api_key() {
            Some(key) => scraper.with_api_key(key),
            None => scraper,
        })
    }

    pub fn with_api_key(mut self, api_key: &str) -> Self {
        self.api_key = Some(api_key.to_string());
        self
    }

    pub fn search_url(&self) -> String {
        format!("{}{}", self.endpoint, SEARCH_PATH)
    }

    pub fn query_pairs(request: &ScrapeRequest) -> Vec<(&'static str, String)> {
        let mut pairs: Vec<(&'static str, String)> = request
            .site_name
            .iter()
            .map(|site| ("site_name", site.clone()))
            .collect();

        pairs.extend([
            ("search_term", request.search_term.clone()),
            ("location", request.location.clone()),
            ("is_remote", request.is_remote.to_string()),
            ("results_wanted", request.results_wanted.to_string()),
            ("hours_old", request.hours_old.to_string()),
            (
                "linkedin_fetch_description",
                request.linkedin_fetch_description.to_string(),
            ),
        ]);
        pairs
    }

    /// Accepts either `{"jobs": [...]}` or a bare array of job objects.
    pub fn parse_response(body: Value) -> Result<ResultSet> {
        let items = match body {
            Value::Array(items) => items,
            Value::Object(mut obj) => match obj.remove("jobs") {
                Some(Value::Array(items)) => items,
                Some(Value::Null) => Vec::new(),
                _ => {
                    return Err(RaptorError::ScraperError {
                        message: "response has no 'jobs' array".to_string(),
                    })
                }
            },
            other => {
                return Err(RaptorError::ScraperError {
                    message: format!("unexpected response: {}", other),
                })
            }
        };

        let mut records = Vec::with_capacity(items.len());
        for item in items {
            match item {
                Value::Object(data) => records.push(Record::new(data)),
                other => tracing::warn!("Skipping non-object job entry: {}", other),
            }
        }

        Ok(ResultSet::new(records))
    }
}

impl JobScraper for JobSpyApiScraper {
    fn name(&self) -> &str {
        "jobspy-api"
    }

    fn scrape(&self, request: &ScrapeRequest) -> Result<ResultSet> {
        let url = self.search_url();
        tracing::debug!("Making API request to: {}", url);

        let mut builder = self.client.get(&url).query(&Self::query_pairs(request));
        if let Some(key) = &self.api_key {
            builder = builder.header(API_KEY_HEADER, key);
        }

        let response = builder.send()?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(RaptorError::ScraperError {
                message: format!("scraper returned HTTP {}: {}", status, body.trim()),
            });
        }

        let body: Value = response.json()?;
        Self::parse_response(body)
    }
}
