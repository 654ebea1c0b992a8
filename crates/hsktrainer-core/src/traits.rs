//! Core trait definitions for vocabulary sources and asset fetchers.
//!
//! Sources are implemented in this crate (`workbook`, `parser`); the HTTP
//! asset fetcher lives in `hsktrainer-assets`.

use std::path::Path;

use async_trait::async_trait;

use crate::error::DataLoadError;
use crate::model::{Level, RawRow};
use crate::parser::TomlSource;
use crate::workbook::WorkbookSource;

// ---------------------------------------------------------------------------
// Vocabulary source trait
// ---------------------------------------------------------------------------

/// A document holding one sheet of vocabulary rows per level.
pub trait VocabularySource: Send + Sync {
    /// Human-readable source name (e.g. the file path).
    fn name(&self) -> &str;

    /// Read the raw data rows (header excluded) of the sheet for `level`.
    fn read_level(&self, level: Level) -> Result<Vec<RawRow>, DataLoadError>;
}

/// Open a vocabulary source, choosing the reader by file extension.
///
/// `.toml` files are read as plain-text decks; anything else is handed to
/// the spreadsheet reader.
pub fn open_source(path: &Path) -> Box<dyn VocabularySource> {
    if path.extension().is_some_and(|ext| ext == "toml") {
        Box::new(TomlSource::new(path))
    } else {
        Box::new(WorkbookSource::new(path))
    }
}

// ---------------------------------------------------------------------------
// Asset fetcher trait
// ---------------------------------------------------------------------------

/// Fetches decorative JSON payloads (the success animation).
///
/// Implementations never fail the caller: any error yields `None`.
#[async_trait]
pub trait AssetFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Option<serde_json::Value>;
}
