pub mod bounds;
pub mod comparison;
pub mod filter;
pub mod grouping;
pub mod rollup;
pub mod sort;
pub mod views;

pub use bounds::amount_bounds;
pub use comparison::compare;
pub use filter::{active_axes, apply, matches, FilterAxis};
pub use grouping::{category_totals, totals_by_date, totals_by_month, totals_by_tag};
pub use rollup::{cumulative_series, monthly_change};
pub use sort::{sort_records, SortDirection, SortKey};
pub use views::{derive_views, derive_views_normalized};
