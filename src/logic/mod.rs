//! Stats logic: derived fields, filtering, chart series.

mod derived;
mod selection;
mod trend;

pub use derived::DerivedStats;
pub use selection::{filter, options_with_all, Selection, ALL};
pub use trend::{trend_series, Stat, TrendPoint, TrendSeries};
