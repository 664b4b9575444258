//! StatsError: failures surfaced by the store.

use std::path::{Path, PathBuf};

/// Errors that can occur during stats operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StatsError {
    /// A required text field (Player or Game) was empty. Nothing was written.
    Validation(&'static str),
    /// The data file could not be read, parsed or written.
    StorageUnavailable { path: PathBuf, reason: String },
    /// Records could not be encoded as CSV.
    Serialization(String),
}

impl StatsError {
    pub(crate) fn storage(path: &Path, reason: impl ToString) -> Self {
        StatsError::StorageUnavailable {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    /// True for errors caused by the submitted data rather than the server.
    pub fn is_validation(&self) -> bool {
        matches!(self, StatsError::Validation(_))
    }
}

impl std::fmt::Display for StatsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatsError::Validation(field) => write!(f, "{} is required", field),
            StatsError::StorageUnavailable { path, reason } => {
                write!(f, "Stats file {} unavailable: {}", path.display(), reason)
            }
            StatsError::Serialization(reason) => write!(f, "Could not write CSV: {}", reason),
        }
    }
}

impl std::error::Error for StatsError {}
