//! Aggregation engine
//!
//! Pure read functions over a (usually filtered) record snapshot: summary
//! totals, the monthly trend series, and per-category expense totals. The
//! rendering layer consumes these after every store mutation or filter
//! change and must not mutate the returned data.

pub mod categories;
pub mod monthly;
pub mod summary;

pub use categories::{category_names, category_totals, CategoryTotal};
pub use monthly::{monthly_series, MonthlyBucket};
pub use summary::{summary, Summary};
