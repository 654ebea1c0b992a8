//! Core data model types for hsktrainer.
//!
//! These are the fundamental types the rest of the system uses to represent
//! HSK levels, vocabulary entries, and per-level vocabulary tables.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the six HSK difficulty tiers.
///
/// Each level maps to one sheet of the vocabulary source, named exactly as
/// the `Display` output (`HSK1` .. `HSK6`).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Level {
    #[default]
    #[serde(rename = "HSK1")]
    Hsk1,
    #[serde(rename = "HSK2")]
    Hsk2,
    #[serde(rename = "HSK3")]
    Hsk3,
    #[serde(rename = "HSK4")]
    Hsk4,
    #[serde(rename = "HSK5")]
    Hsk5,
    #[serde(rename = "HSK6")]
    Hsk6,
}

impl Level {
    /// All levels in selector order.
    pub const ALL: [Level; 6] = [
        Level::Hsk1,
        Level::Hsk2,
        Level::Hsk3,
        Level::Hsk4,
        Level::Hsk5,
        Level::Hsk6,
    ];

    /// Name of the sheet holding this level's vocabulary.
    pub fn sheet_name(&self) -> &'static str {
        match self {
            Level::Hsk1 => "HSK1",
            Level::Hsk2 => "HSK2",
            Level::Hsk3 => "HSK3",
            Level::Hsk4 => "HSK4",
            Level::Hsk5 => "HSK5",
            Level::Hsk6 => "HSK6",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sheet_name())
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = match trimmed.get(..3) {
            Some(prefix) if prefix.eq_ignore_ascii_case("hsk") => &trimmed[3..],
            _ => trimmed,
        };
        match digits {
            "1" => Ok(Level::Hsk1),
            "2" => Ok(Level::Hsk2),
            "3" => Ok(Level::Hsk3),
            "4" => Ok(Level::Hsk4),
            "5" => Ok(Level::Hsk5),
            "6" => Ok(Level::Hsk6),
            _ => Err(format!("unknown level: '{s}' (expected HSK1..HSK6)")),
        }
    }
}

/// One vocabulary item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    /// The Chinese word the user must type. Never empty, already trimmed.
    pub headword: String,
    /// The meaning shown as the prompt.
    pub meaning: String,
    /// Example sentence using the headword.
    #[serde(default)]
    pub example_sentence: Option<String>,
    /// Translation of the example sentence.
    #[serde(default)]
    pub example_meaning: Option<String>,
}

impl WordEntry {
    /// The example pair, present whenever an example sentence exists.
    ///
    /// A missing translation is reported as an empty string.
    pub fn example(&self) -> Option<Example> {
        self.example_sentence.as_ref().map(|sentence| Example {
            sentence: sentence.clone(),
            meaning: self.example_meaning.clone().unwrap_or_default(),
        })
    }
}

/// An example sentence paired with its meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    pub sentence: String,
    pub meaning: String,
}

/// The cleaned vocabulary for one level.
///
/// Immutable once loaded; shared through the store's cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyTable {
    /// Level this table was loaded for.
    pub level: Level,
    /// Entries in source order.
    pub entries: Vec<WordEntry>,
    /// Rows discarded because they had no headword.
    #[serde(default)]
    pub dropped_rows: usize,
}

impl VocabularyTable {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The four relevant cells of one data row, as read from a source.
///
/// Cells are raw: not yet trimmed, and blank strings are still `Some`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    pub headword: Option<String>,
    pub meaning: Option<String>,
    pub example_sentence: Option<String>,
    pub example_meaning: Option<String>,
}

impl RawRow {
    /// Convenience constructor for fully populated rows.
    pub fn new(headword: &str, meaning: &str, example: &str, example_meaning: &str) -> Self {
        Self {
            headword: Some(headword.to_string()),
            meaning: Some(meaning.to_string()),
            example_sentence: Some(example.to_string()),
            example_meaning: Some(example_meaning.to_string()),
        }
    }
}
