use chrono::Datelike;
use models::{AggregatedBucket, ComparisonSelection, NormalizedRecord};

use crate::grouping;

/// Aggregates the user-chosen comparison subset over the normalized,
/// UNfiltered snapshot; the primary filter never applies here.
///
/// Tag selections match the record tag exactly (case-insensitive) and
/// aggregate by category; period selections match `(month, year)` of the
/// parsed date and aggregate by `YYYY-MM`. An empty selection yields an
/// empty result rather than falling back to "compare everything".
pub fn compare(
    selection: &ComparisonSelection,
    records: &[NormalizedRecord],
) -> Vec<AggregatedBucket> {
    match selection {
        ComparisonSelection::Tags { tags } => {
            if tags.is_empty() {
                return Vec::new();
            }
            let wanted: Vec<String> = tags.iter().map(|tag| tag.to_lowercase()).collect();
            let selected: Vec<NormalizedRecord> = records
                .iter()
                .filter(|record| wanted.contains(&record.tag.to_lowercase()))
                .cloned()
                .collect();
            grouping::totals_by_tag(&selected)
        }
        ComparisonSelection::Periods { periods } => {
            if periods.is_empty() {
                return Vec::new();
            }
            let selected: Vec<NormalizedRecord> = records
                .iter()
                .filter(|record| match record.parsed_date {
                    Some(date) => periods.iter().any(|p| {
                        p.month == format!("{:02}", date.month())
                            && p.year == date.year().to_string()
                    }),
                    None => false,
                })
                .cloned()
                .collect();
            grouping::totals_by_month(&selected)
        }
    }
}
