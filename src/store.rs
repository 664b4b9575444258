//! StatsStore: the handle on the persisted CSV file.
//!
//! Every mutation rewrites the whole file. There is no file locking: two
//! processes writing the same file race and the later write wins.
//! Writes are plain blocking `fs::write` calls, made while the caller holds
//! its lock on the collection; fine for a single user.

use crate::models::{StatCollection, StatInput, StatRecord, StatsError, STAT_COLUMNS};
use std::fs;
use std::path::{Path, PathBuf};

/// Default data file name, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "ultimate_stats.csv";

/// Explicit handle passed to every stats operation that touches storage.
#[derive(Clone, Debug)]
pub struct StatsStore {
    path: PathBuf,
}

impl StatsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted records. A missing, unreadable or malformed file
    /// yields an empty collection (logged as a warning), never an error.
    pub fn load(&self) -> StatCollection {
        match self.try_load() {
            Ok(collection) => collection,
            Err(e) => {
                log::warn!("{}; starting with no stats", e);
                StatCollection::new()
            }
        }
    }

    /// Like [`load`](Self::load) but reports why the file could not be read.
    /// A missing file is not an error.
    pub fn try_load(&self) -> Result<StatCollection, StatsError> {
        if !self.path.exists() {
            return Ok(StatCollection::new());
        }
        let mut reader = csv::ReaderBuilder::new()
            .from_path(&self.path)
            .map_err(|e| StatsError::storage(&self.path, e))?;
        let records = reader
            .deserialize::<StatRecord>()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| StatsError::storage(&self.path, e))?;
        Ok(StatCollection::from_records(records))
    }

    /// Validate `candidate`, append it as a new record and persist.
    /// On any error nothing is written and `collection` is unchanged.
    pub fn append(
        &self,
        collection: &StatCollection,
        candidate: &StatInput,
    ) -> Result<StatCollection, StatsError> {
        let record = StatRecord::from_input(candidate)?;
        let next = collection.with_record(record);
        self.save(&next)?;
        log::info!(
            "Logged stats for {} in {} ({} records)",
            candidate.player,
            candidate.game,
            next.len()
        );
        Ok(next)
    }

    /// Delete every record and persist the empty collection. No undo.
    pub fn clear_all(&self, collection: &StatCollection) -> Result<StatCollection, StatsError> {
        let empty = StatCollection::new();
        self.save(&empty)?;
        log::info!("Deleted all stats ({} records)", collection.len());
        Ok(empty)
    }

    fn save(&self, collection: &StatCollection) -> Result<(), StatsError> {
        let bytes = to_csv(collection)?;
        fs::write(&self.path, bytes).map_err(|e| {
            log::error!("Failed to write {}: {}", self.path.display(), e);
            StatsError::storage(&self.path, e)
        })
    }
}

/// Encode records as UTF-8 CSV: the header row (always present), then one
/// row per record. Same format as the data file.
pub fn to_csv(collection: &StatCollection) -> Result<Vec<u8>, StatsError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer
        .write_record(STAT_COLUMNS)
        .map_err(|e| StatsError::Serialization(e.to_string()))?;
    for record in collection {
        writer
            .serialize(record)
            .map_err(|e| StatsError::Serialization(e.to_string()))?;
    }
    writer
        .into_inner()
        .map_err(|e| StatsError::Serialization(e.to_string()))
}
