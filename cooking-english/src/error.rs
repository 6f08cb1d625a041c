//! Error types and exit codes for the `cooking-english` CLI.

use std::path::PathBuf;
use thiserror::Error;

use cooking_english_core::ContentError;
use cooking_english_pages::RenderError;

// ============================================================================
// Exit Codes
// ============================================================================

/// Process exit codes.
///
/// A run that completes exits with `SUCCESS` even when individual days
/// failed; those failures are reported per day, not through the exit code.
pub struct ExitCode;

impl ExitCode {
    /// Run completed, or there was no content to build
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Output could not be written
    pub const IO_ERROR: i32 = 3;

    /// Invalid arguments (reported by clap)
    pub const USAGE_ERROR: i32 = 64;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for a build.
#[derive(Debug, Error)]
pub enum CookingEnglishError {
    /// A day's content could not be loaded or failed strict validation
    #[error(transparent)]
    Content(#[from] ContentError),

    /// A day's content parsed but could not be rendered
    #[error(transparent)]
    Render(#[from] RenderError),

    /// Filesystem error on the output side
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File or directory being written
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CookingEnglishError {
    /// Wraps an I/O error with the path it concerns.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns the exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Content(_) | Self::Render(_) => ExitCode::ERROR,
            Self::Io { .. } => ExitCode::IO_ERROR,
        }
    }
}
