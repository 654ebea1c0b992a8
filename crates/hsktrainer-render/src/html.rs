//! HTML page generator.
//!
//! Produces a self-contained quiz page with all CSS inlined. When a success
//! animation payload is present it is embedded as JSON and played with
//! lottie-web.

use anyhow::Result;
use std::path::Path;

use hsktrainer_core::model::Level;
use hsktrainer_core::view::{QuizView, ResultView, View, TITLE};

const LOTTIE_WEB_URL: &str = "https://cdnjs.cloudflare.com/ajax/libs/lottie-web/5.12.2/lottie.min.js";

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Generate a full HTML page for a view.
pub fn generate_html(view: &View) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!("<title>{TITLE}</title>\n"));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    match view {
        View::Quiz(quiz) => push_quiz(&mut html, quiz),
        View::Halted { level, warning } => push_halted(&mut html, *level, warning),
    }

    html.push_str("</body>\n</html>");
    html
}

/// Write an HTML page to a file.
pub fn write_html_page(view: &View, path: &Path) -> Result<()> {
    let html = generate_html(view);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)?;
    Ok(())
}

fn push_header(html: &mut String, level: Level) {
    html.push_str(&format!("<div class=\"app-title\">{TITLE}</div>\n"));
    html.push_str(&format!("<div class=\"subtitle\">{level}</div>\n"));
}

fn push_quiz(html: &mut String, quiz: &QuizView) {
    html.push_str("<div class=\"main-card\">\n");
    push_header(html, quiz.level);

    html.push_str(&format!(
        "<div class=\"meaning-box\">{}</div>\n",
        html_escape(&quiz.meaning)
    ));

    // A new input name per word keeps the browser from refilling old text.
    html.push_str("<form class=\"quiz-form\" method=\"post\">\n");
    html.push_str("<label for=\"answer\">Chinese Character</label>\n");
    html.push_str(&format!(
        "<input id=\"answer\" name=\"input_{}\" placeholder=\"Type here\" autocomplete=\"off\">\n",
        quiz.input_generation
    ));
    html.push_str("<button type=\"submit\" name=\"action\" value=\"check\">Check</button>\n");
    html.push_str("</form>\n");

    match &quiz.result {
        Some(ResultView::Correct {
            headword,
            example,
            animation,
        }) => {
            html.push_str("<div class=\"result-row\">\n");
            if let Some(payload) = animation {
                html.push_str("<div id=\"success-animation\" class=\"animation\"></div>\n");
                html.push_str("<script type=\"application/json\" id=\"success-animation-data\">");
                // `</` cannot appear inside a script element.
                html.push_str(&payload.to_string().replace("</", "<\\/"));
                html.push_str("</script>\n");
                html.push_str(&format!("<script src=\"{LOTTIE_WEB_URL}\"></script>\n"));
                html.push_str("<script>\n");
                html.push_str(JS);
                html.push_str("</script>\n");
            }
            html.push_str(&format!(
                "<div class=\"success-box\">Correct answer: <b>{}</b></div>\n",
                html_escape(headword)
            ));
            html.push_str("</div>\n");

            if let Some(example) = example {
                html.push_str(&format!(
                    "<div class=\"example-box\">\n<b>Example</b><br>\n{}<br>\n<i>{}</i>\n</div>\n",
                    html_escape(&example.sentence),
                    html_escape(&example.meaning)
                ));
            }
        }
        Some(ResultView::Incorrect { message }) => {
            html.push_str(&format!(
                "<div class=\"error-box\">{}</div>\n",
                html_escape(message)
            ));
        }
        None => {}
    }

    html.push_str("<form class=\"next-form\" method=\"post\">\n");
    html.push_str("<button type=\"submit\" name=\"action\" value=\"next\">Next</button>\n");
    html.push_str("</form>\n");
    html.push_str("</div>\n");
}

fn push_halted(html: &mut String, level: Level, warning: &str) {
    html.push_str("<div class=\"main-card\">\n");
    push_header(html, level);
    html.push_str(&format!(
        "<div class=\"warning-box\">{}</div>\n",
        html_escape(warning)
    ));
    html.push_str("</div>\n");
}

const CSS: &str = r#"
body { background-color: #f7f9fc; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; padding: 2rem; }
.main-card { background: #ffffff; padding: 32px; border-radius: 20px; box-shadow: 0 14px 40px rgba(0,0,0,0.08); max-width: 720px; margin: auto; }
.app-title { text-align: center; font-size: 30px; font-weight: 700; color: #1f3a8a; margin-bottom: 6px; }
.subtitle { text-align: center; font-size: 15px; color: #6b7280; margin-bottom: 28px; }
.meaning-box { text-align: center; font-size: 26px; font-weight: 600; color: #111827; margin-bottom: 24px; }
form { text-align: center; margin: 12px 0; }
label { display: block; color: #6b7280; margin-bottom: 6px; }
input { font-size: 24px; text-align: center; padding: 10px; width: 80%; }
button { font-size: 16px; padding: 8px 24px; margin-top: 12px; border-radius: 10px; border: 1px solid #d1d5db; background: #fff; cursor: pointer; }
.result-row { display: flex; align-items: center; gap: 16px; }
.animation { width: 110px; height: 110px; flex: none; }
.success-box { flex: 1; background: #ecfdf5; border-left: 6px solid #10b981; padding: 16px; border-radius: 14px; font-size: 18px; animation: fadeIn 0.5s ease-in-out; }
.error-box { background: #fef2f2; border-left: 6px solid #ef4444; padding: 16px; border-radius: 14px; font-size: 18px; animation: shake 0.4s; }
.warning-box { background: #fffbeb; border-left: 6px solid #f59e0b; padding: 16px; border-radius: 14px; font-size: 18px; }
.example-box { background: #f1f5f9; padding: 16px; border-radius: 14px; margin-top: 14px; font-size: 16px; }
@keyframes fadeIn { from { opacity: 0; transform: translateY(8px); } to { opacity: 1; transform: translateY(0); } }
@keyframes shake { 0% { transform: translateX(0); } 25% { transform: translateX(-4px); } 50% { transform: translateX(4px); } 75% { transform: translateX(-4px); } 100% { transform: translateX(0); } }
"#;

const JS: &str = r#"
(function () {
  const data = JSON.parse(document.getElementById('success-animation-data').textContent);
  if (window.lottie) {
    lottie.loadAnimation({
      container: document.getElementById('success-animation'),
      renderer: 'svg',
      loop: false,
      autoplay: true,
      animationData: data,
    });
  }
})();
"#;
