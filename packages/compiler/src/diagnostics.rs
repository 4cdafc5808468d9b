//! Diagnostics Context
//!
//! Structured logging context handed to every component that reports
//! per-message warnings. All events carry the catalog being converted as
//! the `source` field.

/// Identifies the conversion run in emitted diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogContext {
    pub source: String,
}

impl LogContext {
    pub fn new(source: impl Into<String>) -> Self {
        LogContext {
            source: source.into(),
        }
    }
}

impl Default for LogContext {
    fn default() -> Self {
        LogContext::new("<memory>")
    }
}
