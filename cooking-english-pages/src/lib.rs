//! Cooking English Pages - HTML generation for lesson days
//!
//! Turns parsed lesson content into self-contained HTML pages with inline
//! styles and the embedded quiz/progress script, plus the course index.
//! Everything here is pure: no I/O, identical input gives identical output.

pub mod assets;
pub mod error;
pub mod escape;
pub mod html;
pub mod validate;

pub use error::RenderError;
pub use escape::EscapeMode;
pub use html::RenderOptions;
pub use html::index::render_index_page;
pub use html::page::render_lesson_page;
pub use validate::validate_lesson;
