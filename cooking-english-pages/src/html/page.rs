//! Per-day lesson page assembly.
//!
//! Composes the section cards, embedded stylesheet, page data block, and
//! the static lesson script into one self-contained HTML document.

use cooking_english_core::{LessonContent, Roster};
use serde_json::json;

use crate::assets::{LESSON_CSS, LESSON_JS};
use crate::error::RenderError;
use crate::escape::script_json;
use crate::html::fragments::render_nav;
use crate::html::sections;
use crate::html::{COURSE_TITLE, RenderOptions};

/// Render the complete page for `day`.
///
/// `day` is the roster day being built; it drives the heading and the
/// footer navigation. Names and emoji come from `content.meta`.
///
/// # Errors
///
/// Returns a `RenderError` when some field cannot be rendered, such as a
/// star rating above `MAX_RENDERED_STARS`.
pub fn render_lesson_page(
    day: u32,
    content: &LessonContent,
    roster: &Roster,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    let escape = options.escape;
    let meta = &content.meta;
    let en = escape.apply(&meta.en);
    let emoji = escape.apply(&meta.emoji);

    let mut sections = Vec::new();

    // Head
    sections.push("<!DOCTYPE html>".to_string());
    sections.push("<html lang=\"ja\">".to_string());
    sections.push("<head>".to_string());
    sections.push("  <meta charset=\"UTF-8\">".to_string());
    sections.push(
        "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">".to_string(),
    );
    sections.push(format!("  <title>Day {day}: {en} {emoji}</title>"));
    sections.push("  <style>".to_string());
    sections.push(format!("{LESSON_CSS}  </style>"));
    sections.push("</head>".to_string());
    sections.push("<body>".to_string());
    sections.push("  <div class=\"container\">".to_string());
    sections.push(format!("    <h1>{emoji} Day {day}: {en}</h1>"));
    sections.push(format!(
        "    <p class=\"day-badge\">{COURSE_TITLE} — {day}日目</p>"
    ));
    sections.push(String::new());
    sections.push("    <div class=\"progress-bar\">".to_string());
    sections.push(
        "      <div class=\"progress-fill\" id=\"progressFill\" style=\"width: 0%\"></div>"
            .to_string(),
    );
    sections.push("    </div>".to_string());
    sections.push(String::new());

    // Cards
    let cards = [
        sections::recipe_card(content, escape),
        sections::quiz_card(2, "quiz1", "Quiz 1", "レシピの内容チェック", &content.quiz1, escape),
        sections::review_card(content, escape)?,
        sections::quiz_card(4, "quiz2", "Quiz 2", "レビューの内容チェック", &content.quiz2, escape),
        sections::tips_card(content, escape),
        sections::conversation_card(content, escape),
        sections::quiz_card(7, "quiz3", "Quiz 3", "会話の内容チェック", &content.quiz3, escape),
        sections::try_it_card(content, escape),
        sections::summary_card(),
        sections::footer_nav(&render_nav(day, roster)),
    ];
    sections.push(cards.join("\n\n"));
    sections.push("  </div>".to_string());
    sections.push(String::new());
    sections.push("  <div class=\"copy-toast\" id=\"copyToast\">コピーしました！</div>".to_string());
    sections.push(String::new());

    // Script
    sections.push("  <script>".to_string());
    sections.push(format!(
        "    const lessonPage = {};",
        script_json(&page_data(day, content))
    ));
    sections.push("  </script>".to_string());
    sections.push("  <script>".to_string());
    sections.push(format!("{LESSON_JS}  </script>"));
    sections.push("</body>".to_string());
    sections.push("</html>".to_string());

    Ok(sections.join("\n"))
}

/// Values the static lesson script needs from this page.
fn page_data(day: u32, content: &LessonContent) -> serde_json::Value {
    let meta = &content.meta;
    let quiz_correct: serde_json::Map<String, serde_json::Value> = content
        .quizzes()
        .iter()
        .map(|(id, quiz)| ((*id).to_string(), json!(quiz.correct)))
        .collect();

    json!({
        "quizCorrect": quiz_correct,
        "summaryTitle": format!("Day {day}: {} {}", meta.en, meta.emoji),
    })
}
