//! Vocabulary loading error types.
//!
//! Every failure to produce a usable table for a level is a `DataLoadError`.
//! Callers surface it as a warning and halt the quiz for that level; it is
//! never fatal to the process.

use std::path::PathBuf;

use thiserror::Error;

use crate::model::Level;

/// Errors that can occur when loading a level's vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataLoadError {
    /// The vocabulary file does not exist.
    #[error("vocabulary file not found: {}", path.display())]
    SourceMissing { path: PathBuf },

    /// The vocabulary file exists but could not be opened or decoded.
    #[error("failed to read {}: {message}", path.display())]
    Unreadable { path: PathBuf, message: String },

    /// The source has no sheet for the requested level.
    #[error("no sheet named '{level}' in vocabulary source")]
    SheetMissing { level: Level },

    /// The sheet exists but its contents could not be interpreted.
    #[error("malformed sheet '{level}': {message}")]
    Malformed { level: Level, message: String },

    /// Every row of the sheet lacked a headword.
    #[error("sheet '{level}' contains no words")]
    EmptyTable { level: Level },
}

impl DataLoadError {
    /// The level this error concerns, if it is level-specific.
    pub fn level(&self) -> Option<Level> {
        match self {
            DataLoadError::SheetMissing { level }
            | DataLoadError::Malformed { level, .. }
            | DataLoadError::EmptyTable { level } => Some(*level),
            DataLoadError::SourceMissing { .. } | DataLoadError::Unreadable { .. } => None,
        }
    }
}
