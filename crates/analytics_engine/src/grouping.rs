use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use models::{AggregatedBucket, DateBucket, FilterState, NormalizedRecord};

use crate::filter;

/// Accumulates totals per key while keeping first-seen key order, which is
/// part of the aggregation contract (callers sort later if they need to).
struct BucketAccumulator {
    index: HashMap<String, usize>,
    buckets: Vec<AggregatedBucket>,
}

impl BucketAccumulator {
    fn new() -> Self {
        Self {
            index: HashMap::new(),
            buckets: Vec::new(),
        }
    }

    fn add(&mut self, key: &str, amount: f64) {
        match self.index.get(key) {
            Some(&position) => self.buckets[position].total += amount,
            None => {
                self.index.insert(key.to_string(), self.buckets.len());
                self.buckets.push(AggregatedBucket {
                    key: key.to_string(),
                    total: amount,
                });
            }
        }
    }

    fn into_buckets(self) -> Vec<AggregatedBucket> {
        self.buckets
    }
}

/// Sums amounts per category tag. Every record counts here, including the
/// ones without a parseable date.
pub fn totals_by_tag(records: &[NormalizedRecord]) -> Vec<AggregatedBucket> {
    let mut acc = BucketAccumulator::new();
    for record in records {
        acc.add(&record.tag, record.amount_value);
    }
    acc.into_buckets()
}

/// Sums amounts per `YYYY-MM` period. Records without a parseable date are
/// skipped.
pub fn totals_by_month(records: &[NormalizedRecord]) -> Vec<AggregatedBucket> {
    let mut acc = BucketAccumulator::new();
    for record in records {
        if let Some(date) = record.parsed_date {
            acc.add(&period_key(date), record.amount_value);
        }
    }
    acc.into_buckets()
}

/// Sums amounts per calendar date, retaining the date itself so the rollup
/// can sort chronologically. Records without a parseable date are skipped.
pub fn totals_by_date(records: &[NormalizedRecord]) -> Vec<DateBucket> {
    let mut index: HashMap<NaiveDate, usize> = HashMap::new();
    let mut buckets: Vec<DateBucket> = Vec::new();
    for record in records {
        let Some(date) = record.parsed_date else {
            continue;
        };
        match index.get(&date) {
            Some(&position) => buckets[position].total += record.amount_value,
            None => {
                index.insert(date, buckets.len());
                buckets.push(DateBucket {
                    date,
                    total: record.amount_value,
                });
            }
        }
    }
    buckets
}

/// Category totals respect an active year selection but deliberately ignore
/// the month/tag/date-range/amount axes: the category view answers "how
/// does spend split across categories in this year".
pub fn category_totals(
    filter_state: &FilterState,
    records: &[NormalizedRecord],
) -> Vec<AggregatedBucket> {
    totals_by_tag(&filter::apply_year_only(filter_state, records))
}

/// Canonical `YYYY-MM` period key for a calendar date.
pub fn period_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}
