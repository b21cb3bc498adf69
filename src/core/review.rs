use crate::core::console::Console;
use crate::domain::model::{KeptSet, ResultSet};
use crate::utils::error::Result;
use std::io::{BufRead, Write};

/// Offers the review and, if accepted, walks every record once.
/// Returns `None` when the user skips reviewing.
pub fn run_review<'a, R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    results: &'a ResultSet,
) -> Result<Option<KeptSet<'a>>> {
    if !console.get_boolean("\nWould you like to review the jobs?", true)? {
        tracing::debug!("Review skipped");
        return Ok(None);
    }

    review_records(console, results).map(Some)
}

pub fn review_records<'a, R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    results: &'a ResultSet,
) -> Result<KeptSet<'a>> {
    let total = results.len();
    let mut kept = KeptSet::new(results);

    for (index, record) in results.records().iter().enumerate() {
        console.println(&format!("\nReviewing Job {} of {}:", index + 1, total))?;
        console.display_record(record)?;

        if console.get_boolean("Keep this job?", true)? {
            kept.keep(index)?;
            console.println("Job saved.")?;
        } else {
            console.println("Job discarded.")?;
        }
    }

    tracing::info!("Review finished: kept {} of {}", kept.len(), total);
    console.println(&format!("\nYou kept {} out of {} jobs.", kept.len(), total))?;

    Ok(kept)
}
