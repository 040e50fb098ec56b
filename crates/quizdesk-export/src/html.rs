//! HTML quiz export.
//!
//! Produces a self-contained, printable page with the CSS inlined. The
//! answer key sits in its own section after a page break.

use std::path::{Path, PathBuf};

use anyhow::Result;

use quizdesk_core::Quiz;

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Generate an HTML page for a quiz.
pub fn generate_html(quiz: &Quiz) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!("<title>{}</title>\n", html_escape(quiz.id())));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    // Header
    html.push_str("<header>\n");
    html.push_str(&format!("<h1>{}</h1>\n", html_escape(quiz.id())));
    html.push_str(&format!(
        "<p class=\"meta\">{} questions | created {}</p>\n",
        quiz.len(),
        quiz.created_at().format("%Y-%m-%d %H:%M UTC")
    ));
    html.push_str("</header>\n");

    // Questions
    html.push_str("<section class=\"questions\">\n");
    html.push_str("<h2>Questions</h2>\n");
    if quiz.is_empty() {
        html.push_str("<p class=\"meta\">This quiz has no questions.</p>\n");
    } else {
        html.push_str("<ol>\n");
        for question in quiz.questions() {
            html.push_str(&format!("<li><p>{}</p>\n", html_escape(question.prompt())));
            if let Some(options) = question.options() {
                html.push_str("<ol class=\"options\" type=\"A\">\n");
                for (_, text) in options.labelled() {
                    html.push_str(&format!("<li>{}</li>\n", html_escape(text)));
                }
                html.push_str("</ol>\n");
            }
            html.push_str("</li>\n");
        }
        html.push_str("</ol>\n");
    }
    html.push_str("</section>\n");

    // Answer key
    html.push_str("<section class=\"answers\">\n");
    html.push_str("<h2>Answers [Teacher's Copy]</h2>\n");
    html.push_str("<ol>\n");
    for question in quiz.questions() {
        html.push_str(&format!("<li>{}</li>\n", html_escape(question.answer())));
    }
    html.push_str("</ol>\n");
    html.push_str("</section>\n");

    html.push_str(&format!(
        "<footer class=\"meta\">Exported {}</footer>\n",
        chrono::Utc::now().format("%Y-%m-%d %H:%M UTC")
    ));
    html.push_str("</body>\n</html>");
    html
}

/// Write `{dir}/{quiz id}.html`. Refuses to overwrite an existing file.
pub fn write_html_export(quiz: &Quiz, dir: &Path) -> Result<PathBuf> {
    crate::write_new_file(dir, quiz.id(), "html", &generate_html(quiz))
}

const CSS: &str = r#"
:root { --bg: #fff; --fg: #1a1a1a; --border: #e5e7eb; --muted: #6b7280; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #111827; --fg: #f9fafb; --border: #374151; }
}
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0 auto; max-width: 48rem; padding: 2rem; background: var(--bg); color: var(--fg); }
h1, h2 { margin-top: 2rem; }
.meta { color: var(--muted); }
ol > li { margin: 0.75rem 0; }
ol.options > li { margin: 0.25rem 0; }
.answers { border-top: 1px solid var(--border); }
@media print {
  .answers { page-break-before: always; }
}
"#;
