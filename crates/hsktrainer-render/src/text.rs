//! Plain-text rendering for the terminal front end.

use hsktrainer_core::view::{ResultView, View};

/// Render a view as terminal text, ending with a newline.
pub fn render_text(view: &View) -> String {
    let mut out = String::new();

    match view {
        View::Quiz(quiz) => {
            out.push_str(&format!("== {}: {} ==\n", quiz.title, quiz.level));
            out.push_str(&format!(
                "\nWord #{}: {}\n",
                quiz.input_generation + 1,
                quiz.meaning
            ));

            match &quiz.result {
                Some(ResultView::Correct {
                    headword,
                    example,
                    animation,
                }) => {
                    let mark = if animation.is_some() { "🎉 " } else { "" };
                    out.push_str(&format!("\n{mark}Correct answer: {headword}\n"));
                    if let Some(example) = example {
                        out.push_str(&format!("  Example: {}\n", example.sentence));
                        if !example.meaning.is_empty() {
                            out.push_str(&format!("           {}\n", example.meaning));
                        }
                    }
                }
                Some(ResultView::Incorrect { message }) => {
                    out.push_str(&format!("\n{message}\n"));
                }
                None => {}
            }
        }
        View::Halted { level, warning } => {
            out.push_str(&format!("== {level} ==\n"));
            out.push_str(&format!("\nWARNING: {warning}\n"));
        }
    }

    out
}
