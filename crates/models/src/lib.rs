use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// Raw input records (wire format of the external expense CRUD service)

/// One expense entry as stored by the external record service.
///
/// The `amount` and `date` fields are raw text exactly as entered or
/// extracted; parsing them into typed values is the normalizer's job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseRecord {
    #[serde(rename = "expense_id")]
    pub id: String,
    pub tag: String,
    #[serde(default)]
    pub description: String,
    pub amount: String,
    /// Display form `"<Weekday>, DD/MM/YYYY"`, e.g. `"Mon, 01/01/2024"`.
    pub date: String,
    #[serde(rename = "email")]
    pub owner_email: String,
    /// Creation instant in epoch milliseconds. Informative, not unique.
    #[serde(default)]
    pub timestamp: i64,
}

/// An expense record after textual amount/date parsing.
///
/// Ephemeral, one-to-one with `ExpenseRecord`. `amount_value` is always
/// non-negative (0.0 when the raw amount does not parse); `parsed_date` is
/// `None` when the raw date has no valid `DD/MM/YYYY` segment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedRecord {
    pub id: String,
    pub tag: String,
    pub description: String,
    /// Original display date string, kept for presentation.
    pub raw_date: String,
    pub amount_value: f64,
    pub parsed_date: Option<NaiveDate>,
}

// Filter and comparison state held by the caller between recomputes

/// Inclusive amount interval. `min <= max` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmountRange {
    min: f64,
    max: f64,
}

impl AmountRange {
    /// Builds a range, swapping the endpoints when given out of order.
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamps both endpoints into the global bounds, used when the record
    /// set changes and the previously chosen range may have gone stale.
    pub fn clamp_to(&self, bounds: &AmountBounds) -> Self {
        Self::new(
            self.min.clamp(bounds.min, bounds.max),
            self.max.clamp(bounds.min, bounds.max),
        )
    }
}

/// Valid amount interval derived from the full unfiltered record set.
/// Initializes and clamps the amount filter control.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmountBounds {
    pub min: f64,
    pub max: f64,
}

/// The five independently optional filter axes. `None` means no constraint
/// on that axis; active axes combine with logical AND.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    /// Two-digit month code, "01".."12".
    pub month: Option<String>,
    /// Four-digit year, e.g. "2024".
    pub year: Option<String>,
    /// Matched case-insensitively as a substring of the record tag.
    pub tag: Option<String>,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
    pub amount_range: Option<AmountRange>,
}

impl FilterState {
    /// Keeps the amount filter consistent with freshly computed bounds.
    pub fn clamp_amount_range(&mut self, bounds: &AmountBounds) {
        if let Some(range) = self.amount_range {
            self.amount_range = Some(range.clamp_to(bounds));
        }
    }
}

/// A `(month, year)` pair in the same two-digit/four-digit codes used by
/// `FilterState`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthYear {
    pub month: String,
    pub year: String,
}

/// User-chosen subset for side-by-side comparison, independent of the
/// primary filter. A session compares either tags or periods, never both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ComparisonSelection {
    Tags { tags: Vec<String> },
    Periods { periods: Vec<MonthYear> },
}

// Derived views handed to the presentation layer

/// One aggregation group: a category label, a `YYYY-MM` period, or a
/// display date, with the summed amount of its records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedBucket {
    pub key: String,
    pub total: f64,
}

/// Date-keyed bucket that keeps the calendar date so rollups can sort
/// chronologically before deriving order-dependent values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DateBucket {
    pub date: NaiveDate,
    pub total: f64,
}

/// One point of the running-total time series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeriesPoint {
    /// Display date `DD/MM/YYYY`.
    pub date: String,
    pub amount: f64,
    pub cumulative: f64,
    /// `cumulative / grand_total * 100`; 0.0 when the grand total is 0.
    pub cumulative_percent: f64,
}

/// One point of the month-over-month change series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyChangePoint {
    /// Period key `YYYY-MM`.
    pub period: String,
    pub amount: f64,
    /// Percentage change vs. the preceding period; 0.0 for the first
    /// period and whenever the preceding total is 0.
    pub pct_change: f64,
}

/// The complete derived-view set produced by one recompute pass.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsOutput {
    pub bounds: AmountBounds,
    pub category_totals: Vec<AggregatedBucket>,
    pub time_series: Vec<TimeSeriesPoint>,
    pub monthly_change: Vec<MonthlyChangePoint>,
    /// Size of the normalized input snapshot.
    pub record_count: usize,
    /// Records passing the full filter.
    pub filtered_count: usize,
}
