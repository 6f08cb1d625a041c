//! Text escaping for interpolated lesson content.
//!
//! Lesson text lands in three contexts: element bodies, double-quoted
//! attribute values, and one inline `<script>` data block. `escape_html`
//! covers the first two; `script_json` covers the third.

use std::borrow::Cow;

/// How interpolated lesson text is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EscapeMode {
    /// HTML-escape every field.
    #[default]
    Escaped,
    /// Insert fields verbatim. Only for authored, trusted content.
    Trusted,
}

impl EscapeMode {
    /// Applies this mode to one text field.
    #[must_use]
    pub fn apply(self, text: &str) -> Cow<'_, str> {
        match self {
            Self::Escaped => escape_html(text),
            Self::Trusted => Cow::Borrowed(text),
        }
    }
}

/// Escape `& < > " '` for safe use in HTML text and quoted attributes.
///
/// Borrows when nothing needs escaping.
#[must_use]
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Serialize a JSON value for embedding inside a `<script>` element.
///
/// `</` is written as `<\/` so a string value can never close the element.
#[must_use]
pub fn script_json(value: &serde_json::Value) -> String {
    value.to_string().replace("</", "<\\/")
}
