//! Rendering errors.

use thiserror::Error;

/// Content that parsed but cannot be turned into a page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// A star rating too large to emit.
    #[error("review.stars: {count} exceeds the renderable maximum of {limit}")]
    TooManyStars {
        /// Rating from the document.
        count: i64,
        /// Largest rating a page will render.
        limit: i64,
    },
}
