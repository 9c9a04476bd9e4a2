//! Observability.
//!
//! Structured logging for `pagesmith` via `tracing`.

pub mod logging;

pub use logging::{LogFormat, LogOptions, init_logging};
