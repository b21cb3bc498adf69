use crate::core::console::Console;
use crate::domain::model::{value_text, KeptSet, ROW_INDEX_FIELD};
use crate::domain::ports::Storage;
use crate::utils::error::{RaptorError, Result};
use chrono::NaiveDate;
use std::io::{BufRead, Write};

/// `{YYYYMMDD}-{search term, lowercased, spaces as underscores}.csv`
pub fn default_filename(search_term: &str, today: NaiveDate) -> String {
    format!(
        "{}-{}.csv",
        today.format("%Y%m%d"),
        search_term.to_lowercase().replace(' ', "_")
    )
}

/// Serializes the kept records: header row of field names, then one row
/// per record. Missing and null values become empty cells.
pub fn kept_to_csv(kept: &KeptSet<'_>) -> Result<Vec<u8>> {
    let columns: Vec<&String> = kept
        .columns()
        .iter()
        .filter(|c| !c.eq_ignore_ascii_case(ROW_INDEX_FIELD))
        .collect();

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&columns)?;

    for record in kept.records() {
        let row: Vec<String> = columns
            .iter()
            .map(|c| record.get(c).and_then(value_text).unwrap_or_default())
            .collect();
        writer.write_record(&row)?;
    }

    writer
        .into_inner()
        .map_err(|e| RaptorError::IoError(e.into_error()))
}

/// Asks whether to save and where, then writes the file through `storage`.
/// Returns the filename used, or `None` when nothing was written.
pub fn offer_export<R: BufRead, W: Write, S: Storage + ?Sized>(
    console: &mut Console<R, W>,
    storage: &S,
    kept: &KeptSet<'_>,
    search_term: &str,
    today: NaiveDate,
) -> Result<Option<String>> {
    if kept.is_empty() || !console.get_boolean("\nSave kept jobs to CSV?", true)? {
        return Ok(None);
    }

    let default = default_filename(search_term, today);
    let filename = console.get_text("Filename", Some(&default))?;

    let data = kept_to_csv(kept)?;
    tracing::debug!("Writing {} kept jobs ({} bytes) to {}", kept.len(), data.len(), filename);
    storage.write_file(&filename, &data)?;

    console.println(&format!("Kept jobs saved to {}", filename))?;
    Ok(Some(filename))
}
