//! Data structures for the stats tracker: records, collections, errors.

mod collection;
mod error;
mod record;

pub use collection::{StatCollection, STAT_COLUMNS};
pub use error::StatsError;
pub use record::{StatInput, StatRecord};
