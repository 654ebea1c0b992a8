//! The `hsktrainer play` command.
//!
//! Reads one line at a time from stdin. Lines starting with `:` are
//! commands; everything else (an empty line included) is an answer.

use std::io::{BufRead, Write};

use anyhow::Result;

use hsktrainer_core::model::Level;
use hsktrainer_core::view::{render, render_halted};
use hsktrainer_core::{AnswerOutcome, QuizSession};
use hsktrainer_render::text::render_text;

use super::{CommonOptions, Trainer};

/// One line of user input.
#[derive(Debug, PartialEq)]
enum Input<'a> {
    Answer(&'a str),
    Next,
    Level(Level),
    Help,
    Quit,
    Invalid(String),
}

fn parse_input(line: &str) -> Input<'_> {
    let trimmed = line.trim();
    let Some(command) = trimmed.strip_prefix(':') else {
        return Input::Answer(line);
    };

    let mut parts = command.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some("next" | "n"), None) => Input::Next,
        (Some("quit" | "q"), None) => Input::Quit,
        (Some("help" | "h"), None) => Input::Help,
        (Some("level" | "l"), Some(level)) => match level.parse() {
            Ok(level) => Input::Level(level),
            Err(e) => Input::Invalid(e),
        },
        (Some("level" | "l"), None) => Input::Invalid("usage: :level <HSK1..HSK6>".into()),
        _ => Input::Invalid(format!("unknown command: '{trimmed}' (try :help)")),
    }
}

const HELP: &str = "\
Type the Chinese word for the meaning shown and press Enter.
Commands:
  :next, :n           skip to another word
  :level <L>, :l <L>  switch level (HSK1..HSK6)
  :help, :h           show this help
  :quit, :q           finish and show your score";

pub async fn execute(level: Option<Level>, options: CommonOptions) -> Result<()> {
    let mut trainer = Trainer::from_options(&options)?;
    let mut session = QuizSession::new(level.unwrap_or(trainer.config.default_level));

    tracing::debug!(
        vocabulary = %trainer.engine.store().source_name(),
        level = %session.selected_level,
        "starting quiz"
    );

    println!("{HELP}\n");

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    let mut outcome: Option<AnswerOutcome> = None;
    let mut animation: Option<serde_json::Value> = None;

    loop {
        // Every gesture re-renders the whole screen from the session.
        let loaded = trainer.engine.ensure_current_word(&mut session).map(|_| ());
        let view = match loaded {
            Ok(()) => render(&session, outcome.as_ref(), animation.as_ref()),
            Err(e) => render_halted(session.selected_level, &e),
        };
        println!("{}", render_text(&view));
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!();
            break;
        };
        let line = line?;

        match parse_input(&line) {
            Input::Quit => break,
            Input::Help => println!("{HELP}\n"),
            Input::Invalid(message) => println!("{message}\n"),
            Input::Next => {
                if trainer.engine.next_word(&mut session).is_ok() {
                    outcome = None;
                    animation = None;
                }
            }
            Input::Level(level) => {
                if trainer.engine.start_or_switch_level(&mut session, level) {
                    outcome = None;
                    animation = None;
                }
            }
            Input::Answer(text) => {
                if session.current_word.is_none() {
                    println!("No word to answer. Pick another level with :level <HSK1..HSK6>.\n");
                    continue;
                }
                outcome = trainer.engine.check_answer(&mut session, text);
                animation = match &outcome {
                    Some(o) => trainer.animation_for(o).await,
                    None => None,
                };
            }
        }
    }

    print_summary(&session);
    Ok(())
}

fn print_summary(session: &QuizSession) {
    match session.accuracy() {
        Some(accuracy) => println!(
            "Score: {}/{} correct ({:.1}%)",
            session.correct,
            session.attempts,
            accuracy * 100.0
        ),
        None => println!("No answers submitted."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_an_answer() {
        assert_eq!(parse_input("你好"), Input::Answer("你好"));
        assert_eq!(parse_input(" 你好 "), Input::Answer(" 你好 "));
        assert_eq!(parse_input(""), Input::Answer(""));
    }

    #[test]
    fn commands() {
        assert_eq!(parse_input(":next"), Input::Next);
        assert_eq!(parse_input(" :n "), Input::Next);
        assert_eq!(parse_input(":q"), Input::Quit);
        assert_eq!(parse_input(":help"), Input::Help);
        assert_eq!(parse_input(":level hsk4"), Input::Level(Level::Hsk4));
        assert_eq!(parse_input(":l 2"), Input::Level(Level::Hsk2));
    }

    #[test]
    fn bad_commands_are_invalid() {
        assert!(matches!(parse_input(":level HSK9"), Input::Invalid(_)));
        assert!(matches!(parse_input(":level"), Input::Invalid(_)));
        assert!(matches!(parse_input(":jump"), Input::Invalid(_)));
        assert!(matches!(parse_input(":next now"), Input::Invalid(_)));
    }
}
