//! Observability: diagnostic logging for builds.

pub mod logging;

pub use logging::{LogFormat, init_logging};
