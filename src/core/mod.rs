pub mod app;
pub mod console;
pub mod display;
pub mod export;
pub mod menu;
pub mod review;
pub mod search;

pub use crate::domain::model::{KeptSet, Record, ResultSet, ScrapeRequest, SearchParameters};
pub use crate::domain::ports::{JobScraper, Storage};
pub use crate::utils::error::Result;
