//! hsktrainer-core — Vocabulary store, quiz engine, and view model.
//!
//! This crate defines the data model, vocabulary sources, the per-level
//! vocabulary cache, and the quiz logic that every front end builds on.

pub mod engine;
pub mod error;
pub mod mock;
pub mod model;
pub mod parser;
pub mod session;
pub mod store;
pub mod traits;
pub mod view;
pub mod workbook;

pub use engine::{answer_matches, AnswerOutcome, QuizEngine};
pub use error::DataLoadError;
pub use model::{Level, VocabularyTable, WordEntry};
pub use session::QuizSession;
pub use store::VocabularyStore;
