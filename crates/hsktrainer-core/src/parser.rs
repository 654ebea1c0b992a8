//! TOML vocabulary deck parser.
//!
//! A plain-text stand-in for the workbook: one array of tables per level,
//! each table holding the same four columns the spreadsheet provides.
//!
//! ```toml
//! [[HSK1]]
//! headword = "你好"
//! meaning = "hello"
//! example = "你好吗？"
//! example_meaning = "How are you?"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::DataLoadError;
use crate::model::{Level, RawRow};
use crate::traits::VocabularySource;

/// One row of a TOML deck. Every column is optional so that incomplete rows
/// reach the store's cleaning step instead of failing the whole sheet.
#[derive(Debug, Deserialize)]
struct TomlRow {
    #[serde(default)]
    headword: Option<String>,
    #[serde(default)]
    meaning: Option<String>,
    #[serde(default)]
    example: Option<String>,
    #[serde(default)]
    example_meaning: Option<String>,
}

impl From<TomlRow> for RawRow {
    fn from(row: TomlRow) -> Self {
        RawRow {
            headword: row.headword,
            meaning: row.meaning,
            example_sentence: row.example,
            example_meaning: row.example_meaning,
        }
    }
}

/// Vocabulary source backed by a TOML deck file.
pub struct TomlSource {
    path: PathBuf,
    name: String,
}

impl TomlSource {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            name: path.display().to_string(),
        }
    }
}

impl VocabularySource for TomlSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn read_level(&self, level: Level) -> Result<Vec<RawRow>, DataLoadError> {
        if !self.path.exists() {
            return Err(DataLoadError::SourceMissing {
                path: self.path.clone(),
            });
        }

        let content =
            std::fs::read_to_string(&self.path).map_err(|e| DataLoadError::Unreadable {
                path: self.path.clone(),
                message: e.to_string(),
            })?;

        parse_sheet_str(&content, level, &self.path)
    }
}

/// Parse one level's rows out of a TOML deck (useful for testing).
pub fn parse_sheet_str(
    content: &str,
    level: Level,
    source_path: &Path,
) -> Result<Vec<RawRow>, DataLoadError> {
    let document: toml::Table = toml::from_str(content).map_err(|e| DataLoadError::Unreadable {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })?;

    let Some(sheet) = document.get(level.sheet_name()) else {
        return Err(DataLoadError::SheetMissing { level });
    };

    let rows: Vec<TomlRow> = sheet
        .clone()
        .try_into()
        .map_err(|e: toml::de::Error| DataLoadError::Malformed {
            level,
            message: e.to_string(),
        })?;

    Ok(rows.into_iter().map(RawRow::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const DECK: &str = r#"
[[HSK1]]
headword = "你好"
meaning = "hello"
example = "你好吗？"
example_meaning = "How are you?"

[[HSK1]]
headword = "谢谢"
meaning = "thank you"

[[HSK1]]
meaning = "orphan meaning"

[[HSK2]]
headword = "旅游"
meaning = "to travel"
"#;

    #[test]
    fn parse_level_rows() {
        let rows = parse_sheet_str(DECK, Level::Hsk1, Path::new("deck.toml")).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(
            rows[0],
            RawRow::new("你好", "hello", "你好吗？", "How are you?")
        );
        assert_eq!(rows[1].example_sentence, None);
        assert_eq!(rows[2].headword, None);
    }

    #[test]
    fn missing_sheet() {
        let err = parse_sheet_str(DECK, Level::Hsk6, Path::new("deck.toml")).unwrap_err();
        assert_eq!(err, DataLoadError::SheetMissing { level: Level::Hsk6 });
    }

    #[test]
    fn invalid_toml_is_unreadable() {
        let err = parse_sheet_str("[[HSK1]\nheadword =", Level::Hsk1, Path::new("bad.toml"))
            .unwrap_err();
        assert!(matches!(err, DataLoadError::Unreadable { .. }));
    }

    #[test]
    fn wrong_shape_is_malformed() {
        let content = "HSK3 = \"not a table\"\n";
        let err = parse_sheet_str(content, Level::Hsk3, Path::new("deck.toml")).unwrap_err();
        assert!(matches!(err, DataLoadError::Malformed { level: Level::Hsk3, .. }));

        let content = "[[HSK3]]\nheadword = 42\n";
        let err = parse_sheet_str(content, Level::Hsk3, Path::new("deck.toml")).unwrap_err();
        assert!(matches!(err, DataLoadError::Malformed { .. }));
    }

    #[test]
    fn source_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vocabulary.toml");
        std::fs::write(&path, DECK).unwrap();

        let source = TomlSource::new(&path);
        let rows = source.read_level(Level::Hsk2).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].headword.as_deref(), Some("旅游"));
    }
}
