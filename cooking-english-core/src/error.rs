//! Content loading and validation errors.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Why a day's content could not be turned into a page.
///
/// Messages describe the cause only; callers label them with the day.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The day has not been authored yet. Expected, not a failure.
    #[error("no content at {}", path.display())]
    NotFound {
        /// Roster day.
        day: u32,
        /// Where the document was expected.
        path: PathBuf,
    },

    /// The document exists but could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Read {
        day: u32,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not a lesson-shaped JSON object.
    #[error("parse error in {}: {message}", path.display())]
    Parse {
        day: u32,
        path: PathBuf,
        /// Parser detail, including line and column.
        message: String,
    },

    /// The document parsed but failed strict validation.
    #[error("{} validation issue(s): {}", issues.len(), join_issues(issues))]
    Invalid {
        day: u32,
        issues: Vec<ValidationIssue>,
    },
}

impl ContentError {
    /// Returns `true` for a day that simply has no document yet.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// The roster day this error belongs to.
    #[must_use]
    pub const fn day(&self) -> u32 {
        match self {
            Self::NotFound { day, .. }
            | Self::Read { day, .. }
            | Self::Parse { day, .. }
            | Self::Invalid { day, .. } => *day,
        }
    }
}

/// A single problem found in otherwise parseable content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Dotted path of the offending field, e.g. `quiz2.correct`.
    pub field: String,
    /// Human-readable description.
    pub message: String,
}

impl ValidationIssue {
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn join_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
