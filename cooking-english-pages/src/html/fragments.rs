//! Fragment sub-generators.
//!
//! Each function renders one repeated piece of a lesson page. They are
//! pure and deterministic; the section cards compose them.

use std::sync::LazyLock;

use cooking_english_core::Roster;
use cooking_english_core::lesson::{ConversationLine, Quiz, VocabItem};
use regex::Regex;

use crate::error::RenderError;
use crate::escape::EscapeMode;

static EMPHASIS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("valid regex"));

/// Star glyph used for review ratings.
pub const STAR: &str = "⭐";

/// Largest star rating a page will render.
pub const MAX_RENDERED_STARS: i64 = 1_000_000;

/// Render recipe steps as numbered paragraphs.
///
/// Numbering is 1-based. `**text**` becomes `<strong>text</strong>`; an
/// unpaired `**` is left as written.
#[must_use]
pub fn render_steps(steps: &[String], escape: EscapeMode) -> String {
    steps
        .iter()
        .enumerate()
        .map(|(i, step)| {
            let text = escape.apply(step);
            let text = EMPHASIS_RE.replace_all(&text, "<strong>$1</strong>");
            format!("<p>{}. {text}</p>", i + 1)
        })
        .collect::<Vec<_>>()
        .join("\n        ")
}

/// Render vocabulary checklist rows.
///
/// Each row carries the word in `data-word` so the summary script can find
/// ticked entries. An empty list renders nothing.
#[must_use]
pub fn render_vocab(items: &[VocabItem], escape: EscapeMode) -> String {
    items
        .iter()
        .map(|item| {
            let word = escape.apply(&item.word);
            let meaning = escape.apply(&item.meaning);
            format!(
                "        <div class=\"vocab-item\">\n\
                 \x20         <input type=\"checkbox\" class=\"vocab-check\" data-word=\"{word}\">\n\
                 \x20         <span class=\"vocab-word\">{word}</span>\n\
                 \x20         <span class=\"vocab-meaning\">{meaning}</span>\n\
                 \x20       </div>\n"
            )
        })
        .collect()
}

/// Render the selectable options of one quiz.
///
/// Options are tagged 0, 1, 2… in order; the page script compares the
/// clicked tag to the quiz's `correct` value. `correct` is not range-checked
/// here.
#[must_use]
pub fn render_quiz_options(quiz: &Quiz, quiz_id: &str, escape: EscapeMode) -> String {
    quiz.options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            format!(
                "          <div class=\"quiz-option\" onclick=\"selectQuiz(this, '{quiz_id}', {i})\">{}</div>\n",
                escape.apply(option)
            )
        })
        .collect()
}

/// CSS class for a speaker label. Only an exact `"B"` gets the alternate style.
#[must_use]
pub fn speaker_class(speaker: &str) -> &'static str {
    if speaker == "B" { "speaker b" } else { "speaker" }
}

/// Render conversation lines.
#[must_use]
pub fn render_conversation(lines: &[ConversationLine], escape: EscapeMode) -> String {
    lines
        .iter()
        .map(|line| {
            format!(
                "        <div class=\"conversation-line\">\n\
                 \x20         <span class=\"{}\">{}:</span>\n\
                 \x20         <span class=\"dialogue\">{}</span>\n\
                 \x20       </div>\n",
                speaker_class(&line.speaker),
                escape.apply(&line.speaker),
                escape.apply(&line.text)
            )
        })
        .collect()
}

/// Render a star rating. Zero or negative counts render nothing.
///
/// # Errors
///
/// Returns `RenderError::TooManyStars` above `MAX_RENDERED_STARS`.
pub fn render_stars(count: i64) -> Result<String, RenderError> {
    if count > MAX_RENDERED_STARS {
        return Err(RenderError::TooManyStars {
            count,
            limit: MAX_RENDERED_STARS,
        });
    }
    Ok(STAR.repeat(usize::try_from(count).unwrap_or(0)))
}

/// Render tips text as paragraphs split on blank lines.
#[must_use]
pub fn render_tips(content: &str, escape: EscapeMode) -> String {
    content
        .split("\n\n")
        .map(str::trim)
        .filter(|para| !para.is_empty())
        .map(|para| format!("<p>{}</p>", escape.apply(para)))
        .collect::<Vec<_>>()
        .join("\n        ")
}

/// Footer navigation controls for one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nav {
    /// Link to the previous day, or a disabled button on the first day.
    pub previous: String,
    /// Link to the next day, or a disabled "completed" button on the last day.
    pub next: String,
}

/// Build prev/next controls from the roster.
///
/// A day missing from the roster has no neighbours, so both controls are
/// disabled.
#[must_use]
pub fn render_nav(day: u32, roster: &Roster) -> Nav {
    let previous = roster.previous(day).map_or_else(
        || "<button class=\"btn btn-secondary\" disabled>← 前の日</button>".to_string(),
        |prev| {
            format!(
                "<a href=\"day{0}.html\" class=\"nav-link\"><button class=\"btn btn-secondary\">← Day {0}</button></a>",
                prev.day
            )
        },
    );

    let next = roster.next(day).map_or_else(
        || "<button class=\"btn btn-primary\" disabled>完了！ 🎉</button>".to_string(),
        |next| {
            format!(
                "<a href=\"day{0}.html\" class=\"nav-link\"><button class=\"btn btn-primary\">Day {0} →</button></a>",
                next.day
            )
        },
    );

    Nav { previous, next }
}
