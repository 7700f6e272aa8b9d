use std::sync::OnceLock;

use chrono::NaiveDate;
use models::{ExpenseRecord, NormalizedRecord};
use regex::Regex;

/// Parses a raw amount field into a non-negative value.
///
/// Anything that is not a finite, non-negative decimal collapses to 0.0 so
/// that a malformed entry degrades to "present but worthless" instead of
/// poisoning every downstream total.
pub fn parse_amount(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
        .unwrap_or(0.0)
}

fn date_segment_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d{2})/(\d{2})/(\d{4})").unwrap())
}

/// Extracts the `DD/MM/YYYY` segment from a display date such as
/// `"Mon, 01/01/2024"` and builds a calendar date from it.
///
/// Returns `None` when the segment is missing or names an invalid calendar
/// date (e.g. `31/02/2024`). All raw date text handling lives here; the
/// rest of the engine only ever sees `Option<NaiveDate>`.
pub fn parse_display_date(raw: &str) -> Option<NaiveDate> {
    let caps = date_segment_re().captures(raw)?;
    let day: u32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let year: i32 = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Normalizes one record. Never fails: unparsable amounts become 0.0 and
/// unparsable dates become `None`, which keeps the record out of date- and
/// month-keyed groupings while leaving it countable by category.
pub fn normalize(record: &ExpenseRecord) -> NormalizedRecord {
    NormalizedRecord {
        id: record.id.clone(),
        tag: record.tag.clone(),
        description: record.description.clone(),
        raw_date: record.date.clone(),
        amount_value: parse_amount(&record.amount),
        parsed_date: parse_display_date(&record.date),
    }
}

/// Normalizes a full snapshot, preserving input order.
pub fn normalize_all(records: &[ExpenseRecord]) -> Vec<NormalizedRecord> {
    records.iter().map(normalize).collect()
}
