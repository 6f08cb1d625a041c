//! The course roster.
//!
//! One ordered list of day metadata drives the build loop, the prev/next
//! navigation bounds, and the index page. Nothing else in the workspace
//! hardcodes the first or last day.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::sync::LazyLock;

/// Emoji used when a document's `meta` block omits one.
pub const DEFAULT_EMOJI: &str = "🍳";

fn default_emoji() -> String {
    DEFAULT_EMOJI.to_string()
}

/// Reads `meta.day` without failing the document: numeric strings are
/// accepted, anything else that is not a `u32` becomes 0.
fn lenient_day<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let day = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    Ok(day.unwrap_or(0))
}

/// Identifying metadata for one lesson day.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DayMeta {
    /// Day number within the course. Informational; the roster decides
    /// which day a document is built as.
    #[serde(default, deserialize_with = "lenient_day")]
    pub day: u32,

    /// English dish name.
    #[serde(default)]
    pub en: String,

    /// Japanese dish name.
    #[serde(default)]
    pub ja: String,

    /// Emoji shown next to the dish name.
    #[serde(default = "default_emoji")]
    pub emoji: String,
}

impl DayMeta {
    /// Creates a metadata entry.
    #[must_use]
    pub fn new(day: u32, en: &str, ja: &str, emoji: &str) -> Self {
        Self {
            day,
            en: en.to_string(),
            ja: ja.to_string(),
            emoji: emoji.to_string(),
        }
    }
}

// ============================================================================
// Built-in course
// ============================================================================

const BUILTIN_DAYS: &[(u32, &str, &str, &str)] = &[
    (1, "Gyoza", "餃子", "🥟"),
    (2, "Shumai", "シュウマイ", "🟡"),
    (3, "Karaage", "唐揚げ", "🍗"),
    (4, "Chicken Nanban", "チキン南蛮", "🍗"),
    (5, "Yurinjii", "油淋鶏", "🐔"),
    (6, "Kakuni", "角煮", "🍖"),
    (7, "Fried Rice", "チャーハン", "🍳"),
    (8, "Ramen", "ラーメン", "🍜"),
    (9, "Onigiri", "おにぎり", "🍙"),
    (10, "Miso Soup", "味噌汁", "🥣"),
    (11, "Tamagoyaki", "卵焼き", "🥚"),
    (12, "Teriyaki Chicken", "照り焼きチキン", "🍗"),
    (13, "Japanese Curry", "カレー", "🍛"),
    (14, "Okonomiyaki", "お好み焼き", "🥞"),
    (15, "Takoyaki", "たこ焼き", "🐙"),
    (16, "Nikujaga", "肉じゃが", "🥔"),
    (17, "Gyudon", "牛丼", "🥩"),
    (18, "Tonkatsu", "とんかつ", "🐷"),
    (19, "Yakitori", "焼き鳥", "🍢"),
    (20, "Edamame", "枝豆", "🫛"),
    (21, "Chawanmushi", "茶碗蒸し", "🍮"),
    (22, "Tempura", "天ぷら", "🍤"),
    (23, "Soba", "そば", "🍝"),
    (24, "Udon", "うどん", "🍜"),
    (25, "Oyakodon", "親子丼", "🐔"),
    (26, "Katsudon", "カツ丼", "🍱"),
    (27, "Ochazuke", "お茶漬け", "🍵"),
    (28, "Takowasa", "たこわさ", "🐙"),
    (29, "Tsukemono", "浅漬け", "🥒"),
    (30, "Matcha Pudding", "抹茶プリン", "🍵"),
];

static BUILTIN_ROSTER: LazyLock<Roster> = LazyLock::new(|| {
    Roster::new(
        BUILTIN_DAYS
            .iter()
            .map(|&(day, en, ja, emoji)| DayMeta::new(day, en, ja, emoji))
            .collect(),
    )
});

// ============================================================================
// Roster
// ============================================================================

/// Ordered list of every day in the course.
///
/// Order is the build order and the navigation order. A day's neighbours
/// are its neighbours in this list, not `day ± 1` arithmetic, so a roster
/// with gaps still links correctly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    days: Vec<DayMeta>,
}

impl Roster {
    /// Creates a roster from entries in course order.
    #[must_use]
    pub const fn new(days: Vec<DayMeta>) -> Self {
        Self { days }
    }

    /// The 30-day course.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &*BUILTIN_ROSTER
    }

    /// Iterates entries in course order.
    pub fn iter(&self) -> std::slice::Iter<'_, DayMeta> {
        self.days.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Looks up the entry for `day`.
    #[must_use]
    pub fn get(&self, day: u32) -> Option<&DayMeta> {
        self.days.iter().find(|m| m.day == day)
    }

    #[must_use]
    pub fn first(&self) -> Option<&DayMeta> {
        self.days.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&DayMeta> {
        self.days.last()
    }

    /// Returns `true` if `day` opens the course.
    #[must_use]
    pub fn is_first(&self, day: u32) -> bool {
        self.first().is_some_and(|m| m.day == day)
    }

    /// Returns `true` if `day` closes the course.
    #[must_use]
    pub fn is_last(&self, day: u32) -> bool {
        self.last().is_some_and(|m| m.day == day)
    }

    /// The entry before `day`, or `None` for the first day or an unknown day.
    #[must_use]
    pub fn previous(&self, day: u32) -> Option<&DayMeta> {
        let index = self.position(day)?;
        index.checked_sub(1).and_then(|i| self.days.get(i))
    }

    /// The entry after `day`, or `None` for the last day or an unknown day.
    #[must_use]
    pub fn next(&self, day: u32) -> Option<&DayMeta> {
        let index = self.position(day)?;
        self.days.get(index + 1)
    }

    fn position(&self, day: u32) -> Option<usize> {
        self.days.iter().position(|m| m.day == day)
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a DayMeta;
    type IntoIter = std::slice::Iter<'a, DayMeta>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
