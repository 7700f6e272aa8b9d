use models::{AnalyticsOutput, ExpenseRecord, FilterState, NormalizedRecord};
use record_normalization::normalize_all;

use crate::{bounds, filter, grouping, rollup};

/// Recomputes the complete derived-view set from one raw snapshot.
///
/// One pure pass per snapshot or filter change: normalize, bounds over the
/// full set, category totals over the year-only view, then date and month
/// rollups over the fully filtered view. There is no incremental model;
/// callers simply discard a stale output when a newer snapshot lands.
pub fn derive_views(records: &[ExpenseRecord], filter_state: &FilterState) -> AnalyticsOutput {
    derive_views_normalized(&normalize_all(records), filter_state)
}

/// Same pass over records that are already normalized, for callers that
/// keep the normalized snapshot around between filter changes.
pub fn derive_views_normalized(
    normalized: &[NormalizedRecord],
    filter_state: &FilterState,
) -> AnalyticsOutput {
    let bounds = bounds::amount_bounds(normalized);
    let category_totals = grouping::category_totals(filter_state, normalized);

    let filtered = filter::apply(filter_state, normalized);
    let time_series = rollup::cumulative_series(grouping::totals_by_date(&filtered));
    let monthly_change = rollup::monthly_change(grouping::totals_by_month(&filtered));

    AnalyticsOutput {
        bounds,
        category_totals,
        time_series,
        monthly_change,
        record_count: normalized.len(),
        filtered_count: filtered.len(),
    }
}
