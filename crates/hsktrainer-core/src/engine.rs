//! Quiz engine.
//!
//! Draws words from the active level's table into a [`QuizSession`] and
//! checks submitted answers against them. Sampling is uniform with
//! replacement, so the same word can come up twice in a row.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::error::DataLoadError;
use crate::model::{Example, Level, VocabularyTable, WordEntry};
use crate::session::QuizSession;
use crate::store::VocabularyStore;

/// Result of checking one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOutcome {
    /// Whether the trimmed answer equals the headword.
    pub correct: bool,
    /// The submitted answer, trimmed.
    pub answer: String,
    /// The expected answer.
    pub headword: String,
    /// Example pair of the current word, if it has one.
    pub example: Option<Example>,
}

/// Exact, case-sensitive comparison after trimming both sides.
pub fn answer_matches(input: &str, headword: &str) -> bool {
    input.trim() == headword.trim()
}

/// Orchestrates word selection and answer checking for quiz sessions.
pub struct QuizEngine {
    store: Arc<VocabularyStore>,
    rng: StdRng,
}

impl QuizEngine {
    pub fn new(store: Arc<VocabularyStore>) -> Self {
        Self::with_rng(store, StdRng::from_entropy())
    }

    /// Create an engine with a caller-supplied RNG (seeded in tests).
    pub fn with_rng(store: Arc<VocabularyStore>, rng: StdRng) -> Self {
        Self { store, rng }
    }

    pub fn store(&self) -> &VocabularyStore {
        &self.store
    }

    /// The table words are currently drawn from.
    pub fn active_table(&self, session: &QuizSession) -> Result<Arc<VocabularyTable>, DataLoadError> {
        self.store.load(session.selected_level)
    }

    /// Select `level`. Changing level clears the current word and hides the
    /// result; re-selecting the same level does nothing.
    ///
    /// Returns `true` if the level changed.
    pub fn start_or_switch_level(&self, session: &mut QuizSession, level: Level) -> bool {
        if session.selected_level == level {
            return false;
        }

        tracing::debug!(from = %session.selected_level, to = %level, "switching level");
        session.selected_level = level;
        session.current_word = None;
        session.result_visible = false;
        true
    }

    /// Draw a word if none is set; otherwise keep the current one.
    pub fn ensure_current_word<'s>(
        &mut self,
        session: &'s mut QuizSession,
    ) -> Result<&'s WordEntry, DataLoadError> {
        let word = match session.current_word.take() {
            Some(word) => word,
            None => self.sample(session.selected_level)?,
        };
        Ok(session.current_word.insert(word))
    }

    /// Unconditionally draw a new word, hide the result, and bump the input
    /// generation. On a load error the session is left untouched.
    pub fn next_word<'s>(
        &mut self,
        session: &'s mut QuizSession,
    ) -> Result<&'s WordEntry, DataLoadError> {
        let word = self.sample(session.selected_level)?;
        session.result_visible = false;
        session.input_generation += 1;
        Ok(session.current_word.insert(word))
    }

    /// Check `input` against the current word and make the result visible.
    ///
    /// Does not advance to a new word; the same word can be answered again.
    /// Returns `None` only when no word has been drawn.
    pub fn check_answer(&self, session: &mut QuizSession, input: &str) -> Option<AnswerOutcome> {
        let word = session.current_word.as_ref()?;
        session.result_visible = true;

        let correct = answer_matches(input, &word.headword);
        let outcome = AnswerOutcome {
            correct,
            answer: input.trim().to_string(),
            headword: word.headword.clone(),
            example: word.example(),
        };

        session.attempts += 1;
        if correct {
            session.correct += 1;
        }

        tracing::debug!(level = %session.selected_level, correct, "checked answer");
        Some(outcome)
    }

    fn sample(&mut self, level: Level) -> Result<WordEntry, DataLoadError> {
        let table = self.store.load(level)?;
        table
            .entries
            .choose(&mut self.rng)
            .cloned()
            .ok_or(DataLoadError::EmptyTable { level })
    }
}
