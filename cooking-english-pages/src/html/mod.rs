//! HTML generation for lesson days and the course index.
//!
//! - `fragments`: repeated pieces (steps, vocab rows, quiz options, …)
//! - `sections`: one card per lesson section
//! - `page`: per-day document assembly
//! - `index`: the course index built from the roster

pub mod fragments;
pub mod index;
pub mod page;
pub mod sections;

use crate::escape::EscapeMode;

/// Course name shown on every page.
pub const COURSE_TITLE: &str = "30日間クッキング英語";

/// Options shared by every renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Whether lesson text is HTML-escaped.
    pub escape: EscapeMode,
}
