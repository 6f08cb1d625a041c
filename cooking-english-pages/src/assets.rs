//! Static page assets embedded at compile time.
//!
//! The lesson script reads its per-page values from a `lessonPage` object
//! declared in a separate data block, so the script text itself is the same
//! for every day.

/// Stylesheet for lesson pages.
pub const LESSON_CSS: &str = include_str!("../assets/lesson.css");

/// Quiz, progress, clipboard, and summary logic for lesson pages.
pub const LESSON_JS: &str = include_str!("../assets/lesson.js");

/// Stylesheet for the index page.
pub const INDEX_CSS: &str = include_str!("../assets/index.css");
