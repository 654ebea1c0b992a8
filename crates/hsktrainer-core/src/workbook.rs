//! Spreadsheet vocabulary reader.
//!
//! Reads `.xlsx`, `.xlsm`, `.xls` and `.ods` workbooks through `calamine`.
//! Each level is a sheet named `HSK1` .. `HSK6`; the first row is a header
//! and the four relevant columns sit at fixed positions.

use std::path::{Path, PathBuf};

use calamine::{open_workbook_auto, Data, Range, Reader};

use crate::error::DataLoadError;
use crate::model::{Level, RawRow};
use crate::traits::VocabularySource;

/// Zero-based column indices: B, D, E, G.
const HEADWORD_COL: u32 = 1;
const MEANING_COL: u32 = 3;
const EXAMPLE_COL: u32 = 4;
const EXAMPLE_MEANING_COL: u32 = 6;

/// Vocabulary source backed by a spreadsheet file.
///
/// The file is reopened on every read; caching is the store's job.
pub struct WorkbookSource {
    path: PathBuf,
    name: String,
}

impl WorkbookSource {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            name: path.display().to_string(),
        }
    }
}

impl VocabularySource for WorkbookSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn read_level(&self, level: Level) -> Result<Vec<RawRow>, DataLoadError> {
        if !self.path.exists() {
            return Err(DataLoadError::SourceMissing {
                path: self.path.clone(),
            });
        }

        let mut workbook =
            open_workbook_auto(&self.path).map_err(|e| DataLoadError::Unreadable {
                path: self.path.clone(),
                message: e.to_string(),
            })?;

        let sheet = level.sheet_name();
        if !workbook.sheet_names().iter().any(|name| name == sheet) {
            return Err(DataLoadError::SheetMissing { level });
        }

        let range = workbook
            .worksheet_range(sheet)
            .map_err(|e| DataLoadError::Malformed {
                level,
                message: e.to_string(),
            })?;

        tracing::debug!(
            source = %self.name,
            %level,
            "read sheet with {} used rows",
            range.height()
        );

        rows_from_range(&range, level)
    }
}

/// Extract the data rows of a sheet, skipping the header row.
///
/// The header is the first used row, wherever the sheet starts.
fn rows_from_range(range: &Range<Data>, level: Level) -> Result<Vec<RawRow>, DataLoadError> {
    let (Some((header_row, _)), Some((last_row, last_col))) = (range.start(), range.end()) else {
        return Err(DataLoadError::Malformed {
            level,
            message: "sheet is empty".into(),
        });
    };

    if last_col < EXAMPLE_MEANING_COL {
        return Err(DataLoadError::Malformed {
            level,
            message: "expected columns B, D, E and G".into(),
        });
    }

    Ok((header_row + 1..=last_row)
        .map(|row| RawRow {
            headword: cell_text(range, row, HEADWORD_COL),
            meaning: cell_text(range, row, MEANING_COL),
            example_sentence: cell_text(range, row, EXAMPLE_COL),
            example_meaning: cell_text(range, row, EXAMPLE_MEANING_COL),
        })
        .collect())
}

fn cell_text(range: &Range<Data>, row: u32, col: u32) -> Option<String> {
    match range.get_value((row, col))? {
        Data::Empty => None,
        Data::Error(e) => {
            tracing::debug!("ignoring error cell at ({row}, {col}): {e:?}");
            None
        }
        Data::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file() {
        let source = WorkbookSource::new(Path::new("/nonexistent/Tuvung.xlsx"));
        let err = source.read_level(Level::Hsk1).unwrap_err();
        assert_eq!(
            err,
            DataLoadError::SourceMissing {
                path: PathBuf::from("/nonexistent/Tuvung.xlsx")
            }
        );
    }

    #[test]
    fn corrupt_file_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.xlsx");
        std::fs::write(&path, b"this is not a zip archive").unwrap();

        let source = WorkbookSource::new(&path);
        let err = source.read_level(Level::Hsk2).unwrap_err();
        assert!(
            matches!(err, DataLoadError::Unreadable { .. }),
            "expected Unreadable, got: {err:?}"
        );
    }

    #[test]
    fn range_rows_use_fixed_columns() {
        let mut range: Range<Data> = Range::new((0, 0), (2, 6));
        range.set_value((0, 1), Data::String("HanTu".into()));
        range.set_value((0, 6), Data::String("NghiaViDu".into()));
        range.set_value((1, 1), Data::String("你好".into()));
        range.set_value((1, 3), Data::String("hello".into()));
        range.set_value((1, 4), Data::String("你好吗？".into()));
        range.set_value((1, 6), Data::String("How are you?".into()));
        range.set_value((2, 1), Data::Float(8.0));

        let rows = rows_from_range(&range, Level::Hsk1).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0],
            RawRow::new("你好", "hello", "你好吗？", "How are you?")
        );
        assert_eq!(rows[1].headword.as_deref(), Some("8"));
        assert_eq!(rows[1].meaning, None);
    }

    #[test]
    fn header_below_blank_rows_is_skipped() {
        let mut range: Range<Data> = Range::new((1, 1), (2, 6));
        range.set_value((1, 1), Data::String("HanTu".into()));
        range.set_value((1, 3), Data::String("Nghia".into()));
        range.set_value((2, 1), Data::String("你好".into()));
        range.set_value((2, 3), Data::String("hello".into()));

        let rows = rows_from_range(&range, Level::Hsk1).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].headword.as_deref(), Some("你好"));
        assert_eq!(rows[0].meaning.as_deref(), Some("hello"));
    }

    #[test]
    fn header_only_sheet_has_no_rows() {
        let mut range: Range<Data> = Range::new((0, 0), (0, 6));
        range.set_value((0, 1), Data::String("HanTu".into()));

        let rows = rows_from_range(&range, Level::Hsk3).unwrap();
        assert!(rows.is_empty());
    }

    fn fixture() -> WorkbookSource {
        WorkbookSource::new(Path::new(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/fixtures/vocabulary.xlsx"
        )))
    }

    #[test]
    fn reads_workbook_columns() {
        let rows = fixture().read_level(Level::Hsk1).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(
            rows[0],
            RawRow::new("你好", "hello", "你好吗？", "How are you?")
        );
        assert_eq!(rows[1].headword.as_deref().map(str::trim), Some("谢谢"));
        assert_eq!(rows[1].meaning.as_deref(), Some("thank you"));
        assert_eq!(rows[1].example_sentence, None);
        assert_eq!(rows[1].example_meaning, None);
        assert_eq!(rows[2].headword, None);
        assert_eq!(rows[2].meaning.as_deref(), Some("orphan meaning"));
    }

    #[test]
    fn workbook_sheet_starting_below_row_one() {
        let rows = fixture().read_level(Level::Hsk2).unwrap();
        assert_eq!(
            rows,
            vec![RawRow::new("旅游", "to travel", "我喜欢旅游。", "I like to travel.")]
        );
    }

    #[test]
    fn workbook_without_level_sheet() {
        let err = fixture().read_level(Level::Hsk6).unwrap_err();
        assert_eq!(err, DataLoadError::SheetMissing { level: Level::Hsk6 });
    }

    #[test]
    fn narrow_sheet_is_malformed() {
        let mut range: Range<Data> = Range::new((0, 0), (1, 3));
        range.set_value((1, 1), Data::String("你".into()));

        let err = rows_from_range(&range, Level::Hsk4).unwrap_err();
        assert!(matches!(err, DataLoadError::Malformed { level: Level::Hsk4, .. }));
    }

    #[test]
    fn empty_sheet_is_malformed() {
        let range: Range<Data> = Range::empty();
        let err = rows_from_range(&range, Level::Hsk5).unwrap_err();
        assert!(err.to_string().contains("empty"));
    }
}
