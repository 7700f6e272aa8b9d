use chrono::Datelike;
use models::{AmountRange, FilterState, NormalizedRecord};

/// One independent filter predicate.
///
/// `FilterState` is the caller-facing bag of optional axes; this enum is
/// the evaluated form. Keeping each axis a standalone predicate means axes
/// can be added, removed, and unit-tested in isolation, and inclusion is
/// always the AND-reduce over whatever axes are active.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterAxis {
    /// Two-digit month code of `parsed_date`.
    Month(String),
    /// Four-digit year of `parsed_date`.
    Year(String),
    /// Case-insensitive substring containment in the record tag.
    Tag(String),
    /// Inclusive calendar bounds on `parsed_date`.
    DateRange {
        from: Option<chrono::NaiveDate>,
        to: Option<chrono::NaiveDate>,
    },
    /// Inclusive bounds on `amount_value`.
    Amount(AmountRange),
}

impl FilterAxis {
    /// Evaluates this axis against a single record.
    ///
    /// Records without a parsed date fail every active date-shaped axis
    /// (month, year, date range); they only pass when those axes are unset.
    pub fn accepts(&self, record: &NormalizedRecord) -> bool {
        match self {
            FilterAxis::Month(month) => match record.parsed_date {
                Some(date) => format!("{:02}", date.month()) == *month,
                None => false,
            },
            FilterAxis::Year(year) => match record.parsed_date {
                Some(date) => date.year().to_string() == *year,
                None => false,
            },
            FilterAxis::Tag(tag) => record
                .tag
                .to_lowercase()
                .contains(&tag.to_lowercase()),
            FilterAxis::DateRange { from, to } => match record.parsed_date {
                Some(date) => {
                    from.map_or(true, |f| date >= f) && to.map_or(true, |t| date <= t)
                }
                None => false,
            },
            FilterAxis::Amount(range) => range.contains(record.amount_value),
        }
    }
}

/// Collects the axes that are actually set. An empty result means every
/// record passes.
pub fn active_axes(filter: &FilterState) -> Vec<FilterAxis> {
    let mut axes = Vec::new();
    if let Some(month) = &filter.month {
        axes.push(FilterAxis::Month(month.clone()));
    }
    if let Some(year) = &filter.year {
        axes.push(FilterAxis::Year(year.clone()));
    }
    if let Some(tag) = &filter.tag {
        axes.push(FilterAxis::Tag(tag.clone()));
    }
    if filter.from_date.is_some() || filter.to_date.is_some() {
        axes.push(FilterAxis::DateRange {
            from: filter.from_date,
            to: filter.to_date,
        });
    }
    if let Some(range) = filter.amount_range {
        axes.push(FilterAxis::Amount(range));
    }
    axes
}

/// Single-record inclusion test over all active axes.
pub fn matches(filter: &FilterState, record: &NormalizedRecord) -> bool {
    active_axes(filter).iter().all(|axis| axis.accepts(record))
}

/// Applies the full conjunctive filter to a snapshot, preserving order.
pub fn apply(filter: &FilterState, records: &[NormalizedRecord]) -> Vec<NormalizedRecord> {
    let axes = active_axes(filter);
    records
        .iter()
        .filter(|record| axes.iter().all(|axis| axis.accepts(record)))
        .cloned()
        .collect()
}

/// Projection that honors only an active year axis, ignoring month, tag,
/// date range, and amount. Category totals are computed over this view so
/// the category split answers "spend per category in this year".
pub fn apply_year_only(filter: &FilterState, records: &[NormalizedRecord]) -> Vec<NormalizedRecord> {
    match &filter.year {
        Some(year) => {
            let axis = FilterAxis::Year(year.clone());
            records
                .iter()
                .filter(|record| axis.accepts(record))
                .cloned()
                .collect()
        }
        None => records.to_vec(),
    }
}
