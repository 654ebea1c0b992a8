//! Vocabulary store: loads, cleans, and memoizes one table per level.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use crate::error::DataLoadError;
use crate::model::{Level, RawRow, VocabularyTable, WordEntry};
use crate::traits::VocabularySource;

/// Per-level vocabulary cache in front of a [`VocabularySource`].
///
/// Successful loads are kept for the lifetime of the store and never
/// invalidated. Failed loads are not cached, so a level can be retried once
/// its sheet is fixed.
pub struct VocabularyStore {
    source: Box<dyn VocabularySource>,
    cache: Mutex<HashMap<Level, Arc<VocabularyTable>>>,
    reads: AtomicU32,
}

impl VocabularyStore {
    pub fn new(source: Box<dyn VocabularySource>) -> Self {
        Self {
            source,
            cache: Mutex::new(HashMap::new()),
            reads: AtomicU32::new(0),
        }
    }

    /// Name of the underlying source.
    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    /// Load the table for `level`, reading the source at most once per level.
    pub fn load(&self, level: Level) -> Result<Arc<VocabularyTable>, DataLoadError> {
        // The lock is held across the read so concurrent callers cannot
        // populate the same level twice.
        let mut cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(table) = cache.get(&level) {
            tracing::debug!(%level, "vocabulary cache hit");
            return Ok(Arc::clone(table));
        }

        self.reads.fetch_add(1, Ordering::Relaxed);
        let table = match self.read_table(level) {
            Ok(table) => table,
            Err(e) => {
                tracing::warn!(
                    source = %self.source.name(),
                    %level,
                    "failed to load vocabulary: {e}"
                );
                return Err(e);
            }
        };

        tracing::info!(
            source = %self.source.name(),
            %level,
            words = table.len(),
            dropped = table.dropped_rows,
            "loaded vocabulary"
        );

        let table = Arc::new(table);
        cache.insert(level, Arc::clone(&table));
        Ok(table)
    }

    fn read_table(&self, level: Level) -> Result<VocabularyTable, DataLoadError> {
        let table = clean_rows(level, self.source.read_level(level)?);
        if table.is_empty() {
            return Err(DataLoadError::EmptyTable { level });
        }
        Ok(table)
    }

    /// Number of times the source has been read.
    pub fn reads(&self) -> u32 {
        self.reads.load(Ordering::Relaxed)
    }
}

/// Trim every cell, treat blank cells as missing, and drop rows without a
/// headword.
pub fn clean_rows(level: Level, rows: Vec<RawRow>) -> VocabularyTable {
    let total = rows.len();
    let entries: Vec<WordEntry> = rows
        .into_iter()
        .filter_map(|row| {
            let headword = non_blank(row.headword)?;
            Some(WordEntry {
                headword,
                meaning: non_blank(row.meaning).unwrap_or_default(),
                example_sentence: non_blank(row.example_sentence),
                example_meaning: non_blank(row.example_meaning),
            })
        })
        .collect();

    VocabularyTable {
        level,
        dropped_rows: total - entries.len(),
        entries,
    }
}

fn non_blank(cell: Option<String>) -> Option<String> {
    let cell = cell?;
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
