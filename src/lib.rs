//! Ultimate Frisbee stats tracker: library with models, stats logic, CSV storage and the HTTP API.

pub mod config;
pub mod logic;
pub mod models;
pub mod store;
pub mod web;

pub use config::Config;
pub use logic::{
    filter, options_with_all, trend_series, DerivedStats, Selection, Stat, TrendPoint, TrendSeries,
    ALL,
};
pub use models::{StatCollection, StatInput, StatRecord, StatsError, STAT_COLUMNS};
pub use store::{to_csv, StatsStore, DEFAULT_DATA_FILE};
