//! Search orchestrator: collect parameters, call the scraper, hand the
//! results to review and export.

use crate::core::console::Console;
use crate::core::export::offer_export;
use crate::core::review::run_review;
use crate::domain::model::{
    Record, ScrapeRequest, SearchParameters, DEFAULT_HOURS_OLD, DEFAULT_LOCATION,
    DEFAULT_REMOTE_ONLY, DEFAULT_RESULTS_WANTED, DEFAULT_SEARCH_TERM,
};
use crate::domain::ports::{JobScraper, Storage};
use crate::utils::error::Result;
use chrono::NaiveDate;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Cancelled,
    Failed { message: String },
    NoResults,
    Found {
        total: usize,
        review: Option<ReviewSummary>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReviewSummary {
    pub kept: Vec<Record>,
    pub saved_to: Option<String>,
}

pub fn collect_parameters<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<SearchParameters> {
    let search_term = console.get_text("> Search term?", Some(DEFAULT_SEARCH_TERM))?;
    let location = console.get_text("> Location?", Some(DEFAULT_LOCATION))?;
    let is_remote = console.get_boolean("> Remote only?", DEFAULT_REMOTE_ONLY)?;
    let results_wanted =
        console.get_number("> Number of results?", "number of results", DEFAULT_RESULTS_WANTED)?;
    let hours_old =
        console.get_number("> How many hours old (max)?", "hours old", DEFAULT_HOURS_OLD)?;

    Ok(SearchParameters {
        search_term,
        location,
        is_remote,
        results_wanted,
        hours_old,
    })
}

fn echo_parameters<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    params: &SearchParameters,
) -> Result<()> {
    console.print_header("Search Parameters")?;
    console.print_item(&format!("Search term: {}", params.search_term))?;
    console.print_item("Site:        LinkedIn")?;
    console.print_item(&format!("Location:    {}", params.location))?;
    console.print_item(&format!(
        "Remote only: {}",
        if params.is_remote { "Yes" } else { "No" }
    ))?;
    console.print_item(&format!("Num results: {}", params.results_wanted))?;
    console.print_item(&format!("Hours old:   {}", params.hours_old))?;
    Ok(())
}

/// Runs one search from the form to the optional CSV export.
///
/// Scraper failures end the search with a warning. Console and export
/// errors are returned to the caller.
pub fn run_search<R, W, S, St>(
    console: &mut Console<R, W>,
    scraper: &S,
    storage: &St,
    today: NaiveDate,
) -> Result<SearchOutcome>
where
    R: BufRead,
    W: Write,
    S: JobScraper + ?Sized,
    St: Storage + ?Sized,
{
    console.print_header("JobRaptor LinkedIn Search Form")?;
    let params = collect_parameters(console)?;

    echo_parameters(console, &params)?;
    if !console.get_boolean("\nProceed with search?", true)? {
        console.print_warning("Search canceled")?;
        return Ok(SearchOutcome::Cancelled);
    }

    console.println(&format!(
        "\nSearching for jobs on LinkedIn with parameters: {}, {}, {}, {}, {}... (this may take a moment)",
        params.search_term, params.location, params.is_remote, params.results_wanted, params.hours_old
    ))?;

    let request = ScrapeRequest::linkedin(&params);
    tracing::info!("Searching via {}: {:?}", scraper.name(), request);

    let results = match scraper.scrape(&request) {
        Ok(results) => results,
        Err(e) => {
            tracing::warn!("Search failed: {}", e);
            console.print_warning(&format!("Search failed: {}", e))?;
            return Ok(SearchOutcome::Failed {
                message: e.to_string(),
            });
        }
    };

    if results.is_empty() {
        console.print_warning("No jobs found")?;
        return Ok(SearchOutcome::NoResults);
    }

    let total = results.len();
    tracing::info!("Scraper returned {} jobs", total);
    console.print_item(&format!("Found {} jobs", total))?;

    let Some(kept) = run_review(console, &results)? else {
        return Ok(SearchOutcome::Found {
            total,
            review: None,
        });
    };

    let saved_to = offer_export(console, storage, &kept, &params.search_term, today)?;

    Ok(SearchOutcome::Found {
        total,
        review: Some(ReviewSummary {
            kept: kept.to_records(),
            saved_to,
        }),
    })
}
