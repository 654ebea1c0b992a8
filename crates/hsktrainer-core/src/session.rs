//! Per-user quiz session state.

use serde::{Deserialize, Serialize};

use crate::model::{Level, WordEntry};

/// Mutable state of one user's quiz.
///
/// Owned by the caller and passed by reference into every
/// [`QuizEngine`](crate::engine::QuizEngine) operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSession {
    /// Level the words are drawn from.
    pub selected_level: Level,
    /// Word currently being asked, if one has been drawn.
    pub current_word: Option<WordEntry>,
    /// Whether the outcome of the last submission should be shown.
    pub result_visible: bool,
    /// Bumped every time a new word is presented so the answer input starts
    /// out empty.
    pub input_generation: u64,
    /// Answers submitted during this session.
    #[serde(default)]
    pub attempts: u32,
    /// Submissions that matched the headword.
    #[serde(default)]
    pub correct: u32,
}

impl QuizSession {
    /// A fresh session on `level` with no word drawn yet.
    pub fn new(level: Level) -> Self {
        Self {
            selected_level: level,
            ..Default::default()
        }
    }

    /// Fraction of submissions that were correct, `None` before the first one.
    pub fn accuracy(&self) -> Option<f64> {
        if self.attempts == 0 {
            None
        } else {
            Some(f64::from(self.correct) / f64::from(self.attempts))
        }
    }
}
