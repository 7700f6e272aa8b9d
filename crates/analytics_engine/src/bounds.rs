use models::{AmountBounds, NormalizedRecord};

/// Ceiling used when the record set is empty or every amount falls below
/// it, so the amount filter control has a usable range on first load.
pub const DEFAULT_CEILING: f64 = 10_000.0;

/// Derives the valid amount range from the FULL unfiltered set.
///
/// The floor is 0.0 and the ceiling never drops below `DEFAULT_CEILING`.
/// Callers recompute this when the underlying snapshot changes, not on
/// every filter change.
pub fn amount_bounds(records: &[NormalizedRecord]) -> AmountBounds {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for record in records {
        min = min.min(record.amount_value);
        max = max.max(record.amount_value);
    }

    if records.is_empty() {
        return AmountBounds {
            min: 0.0,
            max: DEFAULT_CEILING,
        };
    }

    AmountBounds {
        min: min.max(0.0),
        max: max.max(DEFAULT_CEILING),
    }
}
