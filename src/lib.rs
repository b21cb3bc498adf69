pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{jobspy::JobSpyApiScraper, storage::LocalStorage};
pub use config::toml_config::AppConfig;
pub use core::{app::JobRaptor, console::Console, search::SearchOutcome};
pub use utils::error::{RaptorError, Result};
