//! Lesson content schema.
//!
//! These types are deserialized from the per-day JSON documents. Every
//! field is defaulted so a partially authored day still renders; only a
//! document that is not a JSON object, or a field of the wrong JSON type,
//! fails to parse.

use serde::Deserialize;

use crate::roster::DayMeta;

/// Hint shown in the Try It! card when a document has none.
pub const DEFAULT_TRY_IT_HINT: &str = "I'm making ... tonight.";

/// Star rating used when a review omits `stars`.
pub const DEFAULT_STARS: i64 = 5;

const fn default_stars() -> i64 {
    DEFAULT_STARS
}

fn default_speaker() -> String {
    "A".to_string()
}

// ============================================================================
// Documents
// ============================================================================

/// A lesson document exactly as stored, before the roster fills in `meta`.
///
/// `Default` is the document `{}` parses to.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LessonDocument {
    pub meta: Option<DayMeta>,
    pub recipe: Recipe,
    pub recipe_vocab: Vec<VocabItem>,
    pub review: Review,
    pub review_vocab: Vec<VocabItem>,
    pub quiz1: Quiz,
    pub quiz2: Quiz,
    pub quiz3: Quiz,
    pub conversation: Conversation,
    pub conversation_vocab: Vec<VocabItem>,
    pub australia_tips: AustraliaTips,
    pub try_it_hint: String,
}

impl Default for LessonDocument {
    fn default() -> Self {
        Self {
            meta: None,
            recipe: Recipe::default(),
            recipe_vocab: Vec::new(),
            review: Review::default(),
            review_vocab: Vec::new(),
            quiz1: Quiz::default(),
            quiz2: Quiz::default(),
            quiz3: Quiz::default(),
            conversation: Conversation::default(),
            conversation_vocab: Vec::new(),
            australia_tips: AustraliaTips::default(),
            try_it_hint: DEFAULT_TRY_IT_HINT.to_string(),
        }
    }
}

impl LessonDocument {
    /// Resolves the document into renderable content.
    ///
    /// A missing `meta` block is replaced by `fallback`, normally the
    /// roster entry for the day being built.
    #[must_use]
    pub fn into_content(self, fallback: &DayMeta) -> LessonContent {
        LessonContent {
            meta: self.meta.unwrap_or_else(|| fallback.clone()),
            recipe: self.recipe,
            recipe_vocab: self.recipe_vocab,
            review: self.review,
            review_vocab: self.review_vocab,
            quiz1: self.quiz1,
            quiz2: self.quiz2,
            quiz3: self.quiz3,
            conversation: self.conversation,
            conversation_vocab: self.conversation_vocab,
            australia_tips: self.australia_tips,
            try_it_hint: self.try_it_hint,
        }
    }
}

/// One day's lesson, ready to render. `meta` is always present.
#[derive(Debug, Clone)]
pub struct LessonContent {
    pub meta: DayMeta,
    pub recipe: Recipe,
    pub recipe_vocab: Vec<VocabItem>,
    pub review: Review,
    pub review_vocab: Vec<VocabItem>,
    pub quiz1: Quiz,
    pub quiz2: Quiz,
    pub quiz3: Quiz,
    pub conversation: Conversation,
    pub conversation_vocab: Vec<VocabItem>,
    pub australia_tips: AustraliaTips,
    pub try_it_hint: String,
}

impl LessonContent {
    /// The three quizzes paired with their page identifiers.
    #[must_use]
    pub fn quizzes(&self) -> [(&'static str, &Quiz); 3] {
        [
            ("quiz1", &self.quiz1),
            ("quiz2", &self.quiz2),
            ("quiz3", &self.quiz3),
        ]
    }
}

/// Parses a raw lesson document and resolves its metadata.
///
/// # Errors
///
/// Returns the `serde_json` error if `raw` is not a JSON object of the
/// expected shape.
pub fn parse_lesson(raw: &str, fallback: &DayMeta) -> Result<LessonContent, serde_json::Error> {
    let document: LessonDocument = serde_json::from_str(raw)?;
    Ok(document.into_content(fallback))
}

// ============================================================================
// Sections
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Recipe {
    pub title: String,
    pub intro: String,
    pub ingredients: String,
    /// Steps in cooking order. `**text**` marks emphasis.
    pub steps: Vec<String>,
}

/// A word the learner may tick as not understood.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct VocabItem {
    pub word: String,
    pub meaning: String,
}

impl VocabItem {
    #[must_use]
    pub fn new(word: &str, meaning: &str) -> Self {
        Self {
            word: word.to_string(),
            meaning: meaning.to_string(),
        }
    }
}

/// A restaurant review from Australia.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Review {
    pub restaurant: String,
    pub location: String,
    /// Star rating. Not clamped.
    #[serde(default = "default_stars")]
    pub stars: i64,
    pub content: String,
}

impl Default for Review {
    fn default() -> Self {
        Self {
            restaurant: String::new(),
            location: String::new(),
            stars: DEFAULT_STARS,
            content: String::new(),
        }
    }
}

/// A multiple-choice question.
///
/// `correct` indexes into `options`; range is not checked while parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Quiz {
    pub question: String,
    pub options: Vec<String>,
    pub correct: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Conversation {
    pub scene: String,
    pub lines: Vec<ConversationLine>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConversationLine {
    /// Expected `"A"` or `"B"`.
    #[serde(default = "default_speaker")]
    pub speaker: String,
    pub text: String,
}

impl Default for ConversationLine {
    fn default() -> Self {
        Self {
            speaker: default_speaker(),
            text: String::new(),
        }
    }
}

impl ConversationLine {
    #[must_use]
    pub fn new(speaker: &str, text: &str) -> Self {
        Self {
            speaker: speaker.to_string(),
            text: text.to_string(),
        }
    }
}

/// Cultural notes; `content` paragraphs are separated by blank lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AustraliaTips {
    pub title: String,
    pub content: String,
}
