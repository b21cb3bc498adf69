use crate::domain::model::{ResultSet, ScrapeRequest};
use crate::utils::error::Result;

/// Fetches job listings for one search. An empty result is an empty
/// `ResultSet`, never an error.
pub trait JobScraper {
    fn name(&self) -> &str;
    fn scrape(&self, request: &ScrapeRequest) -> Result<ResultSet>;
}

pub trait Storage {
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}
