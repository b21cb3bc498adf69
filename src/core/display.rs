//! Formatting of job records for on-screen review.

use crate::domain::model::{Record, ROW_INDEX_FIELD};
use regex::Regex;
use std::sync::LazyLock;

pub const DESCRIPTION_FIELD: &str = "description";
pub const DESCRIPTION_PREVIEW_CHARS: usize = 200;
pub const FRAME_WIDTH: usize = 50;

static NEWLINE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n+").expect("newline pattern is valid"));
static WHITESPACE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Collapses line breaks and whitespace runs into single spaces, then trims.
pub fn clean_description(description: &str) -> String {
    if description.is_empty() {
        return String::new();
    }

    let cleaned = NEWLINE_RUNS.replace_all(description, "\n");
    let cleaned = WHITESPACE_RUNS.replace_all(&cleaned, " ");
    cleaned.trim().to_string()
}

/// Upper-cases the first character and lower-cases the rest.
pub fn capitalize(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Missing, whitespace-only and the literal "None" all count as blank.
pub fn is_blank(value: Option<&str>) -> bool {
    match value {
        None => true,
        Some(v) => v.trim().is_empty() || v == "None",
    }
}

pub fn description_preview(description: &str) -> String {
    let cleaned = clean_description(description);
    if cleaned.chars().count() > DESCRIPTION_PREVIEW_CHARS {
        let head: String = cleaned.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
        format!("{}...", head)
    } else {
        cleaned
    }
}

/// Lines printed for one record, without the surrounding frame.
pub fn record_lines(record: &Record) -> Vec<String> {
    let mut lines = Vec::new();

    for field in record.data.keys() {
        if field.eq_ignore_ascii_case(ROW_INDEX_FIELD) {
            continue;
        }

        let value = record.text(field);
        if is_blank(value.as_deref()) {
            continue;
        }
        let value = value.unwrap_or_default();

        if field == DESCRIPTION_FIELD {
            lines.push(format!("\n{}: {}", capitalize(field), description_preview(&value)));
        } else {
            lines.push(format!("{}: {}", capitalize(field), value));
        }
    }

    lines
}
