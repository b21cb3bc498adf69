use crate::utils::error::{RaptorError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const DEFAULT_SEARCH_TERM: &str = "ai engineer";
pub const DEFAULT_LOCATION: &str = "UK";
pub const DEFAULT_REMOTE_ONLY: bool = true;
pub const DEFAULT_RESULTS_WANTED: u32 = 100;
pub const DEFAULT_HOURS_OLD: u32 = 24;

/// The only job board searched.
pub const LINKEDIN: &str = "linkedin";

/// Row-index column some scrapers emit. Never shown or exported.
pub const ROW_INDEX_FIELD: &str = "index";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParameters {
    pub search_term: String,
    pub location: String,
    pub is_remote: bool,
    pub results_wanted: u32,
    pub hours_old: u32,
}

impl Default for SearchParameters {
    fn default() -> Self {
        Self {
            search_term: DEFAULT_SEARCH_TERM.to_string(),
            location: DEFAULT_LOCATION.to_string(),
            is_remote: DEFAULT_REMOTE_ONLY,
            results_wanted: DEFAULT_RESULTS_WANTED,
            hours_old: DEFAULT_HOURS_OLD,
        }
    }
}

/// What gets handed to the scraper for one search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScrapeRequest {
    pub site_name: Vec<String>,
    pub search_term: String,
    pub location: String,
    pub is_remote: bool,
    pub results_wanted: u32,
    pub hours_old: u32,
    pub linkedin_fetch_description: bool,
}

impl ScrapeRequest {
    pub fn linkedin(params: &SearchParameters) -> Self {
        Self {
            site_name: vec![LINKEDIN.to_string()],
            search_term: params.search_term.clone(),
            location: params.location.clone(),
            is_remote: params.is_remote,
            results_wanted: params.results_wanted,
            hours_old: params.hours_old,
            linkedin_fetch_description: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    pub data: Map<String, Value>,
}

impl Record {
    pub fn new(data: Map<String, Value>) -> Self {
        Self { data }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.data.get(field)
    }

    /// Text form of a field; `None` when the field is missing or null.
    pub fn text(&self, field: &str) -> Option<String> {
        self.data.get(field).and_then(value_text)
    }
}

pub fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Ordered records from one search, with the union of their field names.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultSet {
    columns: Vec<String>,
    records: Vec<Record>,
}

impl ResultSet {
    pub fn new(records: Vec<Record>) -> Self {
        let mut columns: Vec<String> = Vec::new();
        for record in &records {
            for key in record.data.keys() {
                if !columns.iter().any(|c| c == key) {
                    columns.push(key.clone());
                }
            }
        }
        Self { columns, records }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Records the user chose to keep, stored as indices into the source set.
///
/// Indices only ever grow, so the kept records always form an
/// order-preserving subsequence of the result set.
#[derive(Debug, Clone)]
pub struct KeptSet<'a> {
    source: &'a ResultSet,
    indices: Vec<usize>,
}

impl<'a> KeptSet<'a> {
    pub fn new(source: &'a ResultSet) -> Self {
        Self {
            source,
            indices: Vec::new(),
        }
    }

    pub fn keep(&mut self, index: usize) -> Result<()> {
        if index >= self.source.len() {
            return Err(RaptorError::ProcessingError {
                message: format!(
                    "record {} is outside the result set of {}",
                    index,
                    self.source.len()
                ),
            });
        }
        if self.indices.last().is_some_and(|&last| index <= last) {
            return Err(RaptorError::ProcessingError {
                message: format!("record {} was already reviewed", index),
            });
        }
        self.indices.push(index);
        Ok(())
    }

    pub fn columns(&self) -> &'a [String] {
        self.source.columns()
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn records(&self) -> impl Iterator<Item = &'a Record> + '_ {
        let records = self.source.records();
        self.indices.iter().map(move |&i| &records[i])
    }

    pub fn to_records(&self) -> Vec<Record> {
        self.records().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}
