//! View model for the presentation layer.
//!
//! `render` is a pure function of the session and the last outcome; front
//! ends call it after every state change and draw the returned [`View`] from
//! scratch.

use serde::Serialize;

use crate::engine::AnswerOutcome;
use crate::error::DataLoadError;
use crate::model::{Example, Level};
use crate::session::QuizSession;

/// Application title shown on every screen.
pub const TITLE: &str = "HSK Vocabulary Trainer";

/// Message shown for a wrong answer. Never includes the expected answer.
pub const INCORRECT_MESSAGE: &str = "Incorrect. Please try again.";

/// Everything a front end needs to draw one screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum View {
    /// A word is being asked.
    Quiz(QuizView),
    /// No word can be shown for the selected level.
    Halted { level: Level, warning: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizView {
    pub title: &'static str,
    pub level: Level,
    /// The prompt: the meaning of the current word.
    pub meaning: String,
    /// Identifies the answer input; a new value means a fresh, empty input.
    pub input_generation: u64,
    /// Outcome of the last submission, when visible.
    pub result: Option<ResultView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ResultView {
    Correct {
        headword: String,
        example: Option<Example>,
        /// Success animation payload, if one could be fetched.
        animation: Option<serde_json::Value>,
    },
    Incorrect { message: &'static str },
}

/// Build the view for the current session state.
///
/// The result section appears only while `result_visible` is set and an
/// outcome is supplied. `animation` is purely decorative.
pub fn render(
    session: &QuizSession,
    outcome: Option<&AnswerOutcome>,
    animation: Option<&serde_json::Value>,
) -> View {
    let Some(word) = &session.current_word else {
        return View::Halted {
            level: session.selected_level,
            warning: "No word available for this level.".into(),
        };
    };

    let result = match outcome {
        Some(outcome) if session.result_visible => Some(if outcome.correct {
            ResultView::Correct {
                headword: outcome.headword.clone(),
                example: outcome.example.clone(),
                animation: animation.cloned(),
            }
        } else {
            ResultView::Incorrect {
                message: INCORRECT_MESSAGE,
            }
        }),
        _ => None,
    };

    View::Quiz(QuizView {
        title: TITLE,
        level: session.selected_level,
        meaning: word.meaning.clone(),
        input_generation: session.input_generation,
        result,
    })
}

/// Build the warning screen for a level that failed to load.
pub fn render_halted(level: Level, error: &DataLoadError) -> View {
    View::Halted {
        level,
        warning: format!("No vocabulary data found: {error}"),
    }
}
