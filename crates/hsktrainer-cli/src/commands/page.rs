//! The `hsktrainer page` command.

use std::path::PathBuf;

use anyhow::Result;

use hsktrainer_core::model::Level;
use hsktrainer_core::view::{render, render_halted};
use hsktrainer_core::QuizSession;
use hsktrainer_render::html::write_html_page;

use super::{CommonOptions, Trainer};

pub async fn execute(
    level: Option<Level>,
    answer: Option<String>,
    output: PathBuf,
    options: CommonOptions,
) -> Result<()> {
    let mut trainer = Trainer::from_options(&options)?;
    let mut session = QuizSession::new(level.unwrap_or(trainer.config.default_level));

    let view = match trainer.engine.ensure_current_word(&mut session).map(|_| ()) {
        Ok(()) => {
            let outcome = answer
                .as_deref()
                .and_then(|a| trainer.engine.check_answer(&mut session, a));
            let animation = match &outcome {
                Some(o) => trainer.animation_for(o).await,
                None => None,
            };
            render(&session, outcome.as_ref(), animation.as_ref())
        }
        Err(e) => {
            eprintln!("Warning: {e}");
            render_halted(session.selected_level, &e)
        }
    };

    write_html_page(&view, &output)?;
    println!("Page written to: {}", output.display());

    Ok(())
}
