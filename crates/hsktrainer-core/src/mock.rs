//! Mock vocabulary source for testing.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};

use crate::error::DataLoadError;
use crate::model::{Level, RawRow};
use crate::traits::VocabularySource;

/// An in-memory vocabulary source for testing the store and engine without
/// touching the filesystem.
///
/// Levels that were neither given rows nor a failure report
/// [`DataLoadError::SheetMissing`].
#[derive(Default)]
pub struct MockSource {
    /// Rows returned per level.
    sheets: HashMap<Level, Vec<RawRow>>,
    /// Errors returned per level.
    failures: HashMap<Level, DataLoadError>,
    /// Number of reads performed.
    read_count: AtomicU32,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `rows` for `level`.
    pub fn with_level(mut self, level: Level, rows: Vec<RawRow>) -> Self {
        self.sheets.insert(level, rows);
        self
    }

    /// Fail every read of `level` with `error`.
    pub fn with_failure(mut self, level: Level, error: DataLoadError) -> Self {
        self.failures.insert(level, error);
        self
    }

    /// Get the number of reads made against this source.
    pub fn read_count(&self) -> u32 {
        self.read_count.load(Ordering::Relaxed)
    }
}

impl VocabularySource for MockSource {
    fn name(&self) -> &str {
        "mock"
    }

    fn read_level(&self, level: Level) -> Result<Vec<RawRow>, DataLoadError> {
        self.read_count.fetch_add(1, Ordering::Relaxed);

        if let Some(err) = self.failures.get(&level) {
            return Err(err.clone());
        }

        self.sheets
            .get(&level)
            .cloned()
            .ok_or(DataLoadError::SheetMissing { level })
    }
}
