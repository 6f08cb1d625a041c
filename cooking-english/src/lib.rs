//! `cooking-english` - static site generator for the 30-day cooking-English course
//!
//! Loads per-day lesson documents, renders them into self-contained HTML
//! pages, and writes a course index linking every roster day.

pub mod build;
pub mod cli;
pub mod error;
pub mod loader;
pub mod observability;
pub mod output;
