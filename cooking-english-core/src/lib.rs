//! Cooking English Core - lesson schema, roster, and content errors
//!
//! Shared between `cooking-english-pages` (HTML generation) and
//! `cooking-english` (CLI, loader, and build driver).

pub mod error;
pub mod lesson;
pub mod roster;

pub use error::{ContentError, ValidationIssue};
pub use lesson::{LessonContent, LessonDocument, parse_lesson};
pub use roster::{DayMeta, Roster};
