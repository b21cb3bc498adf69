// Adapters layer: concrete implementations for external systems (http scraper, storage).

pub mod jobspy;
pub mod storage;
