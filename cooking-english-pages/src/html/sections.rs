//! Section cards of a lesson page.
//!
//! One function per card. Cards are returned without a trailing newline
//! and joined by the page assembler.

use cooking_english_core::LessonContent;
use cooking_english_core::lesson::{Quiz, VocabItem};

use crate::error::RenderError;
use crate::escape::EscapeMode;
use crate::html::fragments::{
    Nav, render_conversation, render_quiz_options, render_stars, render_steps, render_tips,
    render_vocab,
};

/// Header shared by every card: number badge, title, subtitle.
fn card_header(number: &str, title: &str, subtitle: &str) -> String {
    format!(
        r#"      <div class="card-header">
        <div class="card-number">{number}</div>
        <div>
          <div class="card-title">{title}</div>
          <div class="card-subtitle">{subtitle}</div>
        </div>
      </div>"#
    )
}

/// Copy / read-aloud / vocabulary button row.
fn tool_buttons(copy_action: &str, vocab_id: &str) -> String {
    format!(
        r#"      <div class="btn-row">
        <button class="btn btn-secondary" onclick="{copy_action}">📋 コピー</button>
        <button class="btn btn-secondary" onclick="openNaturalReader()">🔊 Natural Reader</button>
        <button class="btn btn-primary" onclick="toggleVocab('{vocab_id}')">📚 単語リストを見る</button>
      </div>"#
    )
}

/// Collapsible vocabulary checklist. Rendered even when empty.
fn vocab_section(vocab_id: &str, items: &[VocabItem], escape: EscapeMode) -> String {
    format!(
        r#"      <div class="vocab-section" id="{vocab_id}">
        <h4>💡 わからなかった単語にチェック ✓</h4>
{rows}      </div>"#,
        rows = render_vocab(items, escape)
    )
}

/// Card 1: the recipe text with its vocabulary.
#[must_use]
pub fn recipe_card(content: &LessonContent, escape: EscapeMode) -> String {
    let recipe = &content.recipe;
    format!(
        r#"    <!-- Section 1: Recipe -->
    <div class="card" id="section1">
{header}

      <div class="english-text" id="recipeText">
        <p><strong>{title}</strong></p>
        <p>{intro}</p>
        <p><strong>Ingredients:</strong><br>{ingredients}</p>
        <p><strong>Steps:</strong></p>
        {steps}
      </div>

{buttons}

{vocab}
    </div>"#,
        header = card_header(
            "1",
            "Recipe",
            &format!("{}のレシピを読んでみよう", escape.apply(&content.meta.ja))
        ),
        title = escape.apply(&recipe.title),
        intro = escape.apply(&recipe.intro),
        ingredients = escape.apply(&recipe.ingredients),
        steps = render_steps(&recipe.steps, escape),
        buttons = tool_buttons("copyText('recipeText')", "vocab1"),
        vocab = vocab_section("vocab1", &content.recipe_vocab, escape),
    )
}

/// A quiz card. `quiz_id` must match the key used in the page data block.
#[must_use]
pub fn quiz_card(
    section: u8,
    quiz_id: &str,
    title: &str,
    subtitle: &str,
    quiz: &Quiz,
    escape: EscapeMode,
) -> String {
    format!(
        r#"    <!-- Section {section}: {title} -->
    <div class="card" id="section{section}">
{header}

      <div class="quiz-section">
        <div class="quiz-question">Q: {question}</div>
        <div class="quiz-options" id="{quiz_id}">
{options}        </div>
        <div class="quiz-result" id="{quiz_id}-result"></div>
      </div>
    </div>"#,
        header = card_header(&section.to_string(), title, subtitle),
        question = escape.apply(&quiz.question),
        options = render_quiz_options(quiz, quiz_id, escape),
    )
}

/// Card 3: the restaurant review.
///
/// # Errors
///
/// Fails when the star rating is too large to render.
pub fn review_card(content: &LessonContent, escape: EscapeMode) -> Result<String, RenderError> {
    let review = &content.review;
    let stars = render_stars(review.stars)?;
    Ok(format!(
        r#"    <!-- Section 3: Review -->
    <div class="card" id="section3">
{header}

      <div class="english-text" id="reviewText">
        <p><strong>🏠 {restaurant} — {location}, Australia</strong></p>
        <p>{stars}</p>
        <p>{body}</p>
      </div>

{buttons}

{vocab}
    </div>"#,
        header = card_header("3", "Review", "オーストラリアのレストランレビュー"),
        restaurant = escape.apply(&review.restaurant),
        location = escape.apply(&review.location),
        body = escape.apply(&review.content),
        buttons = tool_buttons("copyText('reviewText')", "vocab2"),
        vocab = vocab_section("vocab2", &content.review_vocab, escape),
    ))
}

/// Card 5: Australia tips.
#[must_use]
pub fn tips_card(content: &LessonContent, escape: EscapeMode) -> String {
    let tips = &content.australia_tips;
    format!(
        r#"    <!-- Section 5: Australia Tips -->
    <div class="card" id="section5">
{header}

      <div class="tips-section">
        {paragraphs}
      </div>
    </div>"#,
        header = card_header("5", "🦘 Australia Tips", &escape.apply(&tips.title)),
        paragraphs = render_tips(&tips.content, escape),
    )
}

/// Card 6: the conversation with its vocabulary.
#[must_use]
pub fn conversation_card(content: &LessonContent, escape: EscapeMode) -> String {
    let conversation = &content.conversation;
    let scene = escape.apply(&conversation.scene);
    format!(
        r#"    <!-- Section 6: Conversation -->
    <div class="card" id="section6">
{header}

      <div class="conversation-box" id="conversationText">
        <p style="color: #666; font-size: 14px; margin-bottom: 12px;">🏠 {scene}</p>
{lines}      </div>

{buttons}

{vocab}
    </div>"#,
        header = card_header("6", "Conversation", &scene),
        lines = render_conversation(&conversation.lines, escape),
        buttons = tool_buttons("copyConversation()", "vocab3"),
        vocab = vocab_section("vocab3", &content.conversation_vocab, escape),
    )
}

/// Card 8: the three-line diary prompt.
#[must_use]
pub fn try_it_card(content: &LessonContent, escape: EscapeMode) -> String {
    format!(
        r#"    <!-- Section 8: Try It! -->
    <div class="card" id="section8">
{header}

      <div class="diary-section">
        <div class="diary-hint">
          <p>💡 今日の会話や文をマネしてOK！わからない英語は日本語のままで大丈夫。</p>
          <p style="margin-top: 8px;">例：</p>
          <p style="font-style: italic; color: #e8a4b8;">{hint}</p>
        </div>

        <textarea id="diaryText" placeholder="I'm making...&#10;&#10;"></textarea>
      </div>
    </div>"#,
        header = card_header("8", "✏️ Try It!", "今日のことを3行で書いてみよう"),
        hint = escape.apply(&content.try_it_hint),
    )
}

/// Card 9: the learning summary generator. Static markup.
#[must_use]
pub fn summary_card() -> String {
    format!(
        r#"    <!-- Section 9: Summary -->
    <div class="card" id="section9">
{header}

      <button class="btn btn-primary" onclick="generateSummary()" style="margin-bottom: 16px; width: 100%; justify-content: center;">
        📋 サマリーを生成する
      </button>

      <div class="summary-section" id="summaryOutput">
ここにサマリーが表示されます。
上のボタンを押してね！
      </div>

      <div class="btn-row" style="margin-top: 12px;">
        <button class="btn btn-success" onclick="copySummary()">📋 サマリーをコピー</button>
        <button class="btn btn-secondary" onclick="openChatGPT()">🤖 ChatGPTを開く</button>
      </div>
    </div>"#,
        header = card_header("✓", "📊 学習サマリー", "ChatGPTにコピペして解説をもらおう"),
    )
}

/// Home link and prev/next controls.
#[must_use]
pub fn footer_nav(nav: &Nav) -> String {
    format!(
        r#"    <!-- Footer Navigation -->
    <div style="text-align: center; margin-top: 8px;">
      <a href="index.html" class="btn btn-secondary" style="display: inline-flex; padding: 10px 20px; text-decoration: none;">🏠 ホームに戻る</a>
    </div>
    <div class="footer-nav">
      {previous}
      {next}
    </div>"#,
        previous = nav.previous,
        next = nav.next,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use cooking_english_core::lesson::ConversationLine;
    use cooking_english_core::{DayMeta, parse_lesson};

    fn content() -> LessonContent {
        parse_lesson("{}", &DayMeta::new(3, "Karaage", "唐揚げ", "🍗")).unwrap()
    }

    #[test]
    fn test_recipe_card_subtitle_uses_japanese_name() {
        let card = recipe_card(&content(), EscapeMode::Escaped);
        assert!(card.contains("唐揚げのレシピを読んでみよう"));
        assert!(card.contains("id=\"recipeText\""));
        assert!(card.contains("id=\"vocab1\""));
    }

    #[test]
    fn test_empty_vocab_keeps_shell() {
        let card = recipe_card(&content(), EscapeMode::Escaped);
        assert!(card.contains("<div class=\"vocab-section\" id=\"vocab1\">"));
        assert!(!card.contains("vocab-item"));
    }

    #[test]
    fn test_quiz_card_ids() {
        let quiz = Quiz {
            question: "Is it fried?".to_string(),
            options: vec!["Yes".to_string(), "No".to_string()],
            correct: 0,
        };
        let card = quiz_card(4, "quiz2", "Quiz 2", "レビューの内容チェック", &quiz, EscapeMode::Escaped);
        assert!(card.contains("id=\"section4\""));
        assert!(card.contains("<div class=\"quiz-options\" id=\"quiz2\">"));
        assert!(card.contains("id=\"quiz2-result\""));
        assert!(card.contains("Q: Is it fried?"));
    }

    #[test]
    fn test_review_card_default_stars() {
        let card = review_card(&content(), EscapeMode::Escaped).unwrap();
        assert!(card.contains("<p>⭐⭐⭐⭐⭐</p>"));
    }

    #[test]
    fn test_review_card_rejects_huge_rating() {
        let mut content = content();
        content.review.stars = i64::MAX;
        assert!(matches!(
            review_card(&content, EscapeMode::Escaped),
            Err(RenderError::TooManyStars { .. })
        ));
    }

    #[test]
    fn test_conversation_card_scene_appears_twice() {
        let mut content = content();
        content.conversation.scene = "At the izakaya".to_string();
        content.conversation.lines = vec![ConversationLine::new("A", "Hello!")];
        let card = conversation_card(&content, EscapeMode::Escaped);
        assert_eq!(card.matches("At the izakaya").count(), 2);
        assert!(card.contains("<span class=\"dialogue\">Hello!</span>"));
    }

    #[test]
    fn test_try_it_default_hint() {
        let card = try_it_card(&content(), EscapeMode::Escaped);
        assert!(card.contains("I&#39;m making ... tonight."));
        let trusted = try_it_card(&content(), EscapeMode::Trusted);
        assert!(trusted.contains("I'm making ... tonight."));
    }

    #[test]
    fn test_footer_nav_embeds_controls() {
        let nav = Nav {
            previous: "<prev>".to_string(),
            next: "<next>".to_string(),
        };
        let footer = footer_nav(&nav);
        assert!(footer.contains("href=\"index.html\""));
        assert!(footer.find("<prev>").unwrap() < footer.find("<next>").unwrap());
    }
}
