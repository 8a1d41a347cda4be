//! Logging utilities
//!
//! Structured `tracing` output for error chains. Every rendering is passed
//! through [`sanitize_for_logging`] before it is emitted.

use std::error::Error as StdError;
use tracing::{debug, error, info, warn};

use crate::chain::tree;
use crate::report::{error_chain_length, root_cause};

/// Log levels for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// Sanitized summary of an error chain, as emitted by [`log_error`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorRecord {
    pub error: String,
    pub chain_length: usize,
    pub root_cause: String,
}

impl ErrorRecord {
    /// Summarise `err`
    pub fn from_error(err: &dyn StdError) -> Self {
        Self {
            error: sanitize_for_logging(&err.to_string()),
            chain_length: error_chain_length(err),
            root_cause: sanitize_for_logging(&root_cause(err).to_string()),
        }
    }
}

/// Emit one event describing `err`
///
/// # Example
///
/// ```rust
/// use errwrap::logging::{log_error, LogLevel};
/// use errwrap::{new, wrap};
///
/// let err = wrap(Some(new("connection refused")), "syncing replicas").unwrap();
/// log_error(&err, LogLevel::Warn);
/// ```
pub fn log_error(err: &dyn StdError, level: LogLevel) {
    let record = ErrorRecord::from_error(err);

    match level {
        LogLevel::Debug => debug!(
            error = %record.error,
            chain_length = record.chain_length,
            root_cause = %record.root_cause,
            "error reported"
        ),
        LogLevel::Info => info!(
            error = %record.error,
            chain_length = record.chain_length,
            root_cause = %record.root_cause,
            "error reported"
        ),
        LogLevel::Warn => warn!(
            error = %record.error,
            chain_length = record.chain_length,
            root_cause = %record.root_cause,
            "error reported"
        ),
        LogLevel::Error => error!(
            error = %record.error,
            chain_length = record.chain_length,
            root_cause = %record.root_cause,
            "error reported"
        ),
    }
}

/// Emit one event per error in `err`'s tree, with its `depth` in traversal order
///
/// Returns the number of events emitted.
pub fn log_error_chain(err: &(dyn StdError + 'static), level: LogLevel) -> usize {
    let mut emitted = 0;

    for (depth, node) in tree(err).enumerate() {
        let rendered = sanitize_for_logging(&node.to_string());
        match level {
            LogLevel::Debug => debug!(depth, error = %rendered, "error chain"),
            LogLevel::Info => info!(depth, error = %rendered, "error chain"),
            LogLevel::Warn => warn!(depth, error = %rendered, "error chain"),
            LogLevel::Error => error!(depth, error = %rendered, "error chain"),
        }
        emitted += 1;
    }

    emitted
}

/// Sanitize string for logging (remove sensitive data)
///
/// Replaces common secret patterns with redacted markers.
///
/// ```rust
/// use errwrap::logging::sanitize_for_logging;
///
/// let sanitized = sanitize_for_logging("connect failed, token=abc123");
/// assert!(sanitized.contains("[REDACTED]"));
/// ```
pub fn sanitize_for_logging(input: &str) -> String {
    let mut result = input.to_string();

    let patterns = [
        (r"(?i)(api[\s_-]?key|apikey)\s*[:=]\s*\S+", "$1: [REDACTED]"),
        (r"(?i)(password|passwd|pwd)\s*[:=]\s*\S+", "$1: [REDACTED]"),
        (r"(?i)(token)\s*[:=]\s*\S+", "$1: [REDACTED]"),
        (r"(?i)(secret)\s*[:=]\s*\S+", "$1: [REDACTED]"),
        (
            r"(?i)(authorization|auth)\s*:\s*bearer\s+\S+",
            "$1: Bearer [REDACTED]",
        ),
    ];

    for (pattern, replacement) in &patterns {
        if let Ok(re) = regex::Regex::new(pattern) {
            result = re.replace_all(&result, *replacement).to_string();
        }
    }

    result
}
