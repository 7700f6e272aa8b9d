use std::cmp::Ordering;

use models::NormalizedRecord;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Amount,
    Date,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Orders a displayed record list by key and direction.
///
/// The sort is stable: records comparing equal keep their original relative
/// order, so flipping direction reverses the key ordering without shuffling
/// ties. Records without a parsed date sort last under the date key in both
/// directions.
pub fn sort_records(
    mut records: Vec<NormalizedRecord>,
    key: SortKey,
    direction: SortDirection,
) -> Vec<NormalizedRecord> {
    records.sort_by(|a, b| match key {
        SortKey::Amount => directed(a.amount_value.total_cmp(&b.amount_value), direction),
        SortKey::Date => date_ordering(a, b, direction),
    });
    records
}

fn directed(ordering: Ordering, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

fn date_ordering(a: &NormalizedRecord, b: &NormalizedRecord, direction: SortDirection) -> Ordering {
    match (a.parsed_date, b.parsed_date) {
        (Some(da), Some(db)) => directed(da.cmp(&db), direction),
        // Absent dates sink to the end regardless of direction
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
