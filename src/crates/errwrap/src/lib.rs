//! Contextual error wrapping for Rust error chains
//!
//! This crate annotates errors with human-readable context without losing
//! the original error, and exposes the usual error-chain primitives under
//! short names so a chain can be built, rendered and searched from one place.
//!
//! An absent error is `None`. Wrapping `None` gives back `None`.
//!
//! ```rust
//! use errwrap::{is, new, unwrap, wrap, wrapf};
//!
//! let not_found = new("file not found");
//!
//! let err = wrap(Some(not_found.clone()), "loading config").unwrap();
//! assert_eq!(err.to_string(), "loading config: file not found");
//! assert!(is(&err, &not_found));
//! assert!(unwrap(&err).is_some());
//!
//! let err = wrapf!(Some(not_found), "loading config {}", "app.yaml").unwrap();
//! assert_eq!(err.to_string(), "loading config app.yaml: file not found");
//!
//! assert!(wrap(None::<errwrap::Message>, "loading config").is_none());
//! ```
//!
//! # Modules
//!
//! - `error` - `wrap`, `wrapf` and the `ErrorContext` extension trait
//! - `chain` - leaf errors, joined errors and chain traversal (`is`, `as_type`)
//! - `report` - multi-line chain rendering and root cause lookup
//! - `config` - environment and file based configuration helpers
//! - `logging` - structured `tracing` output for error chains

pub mod chain;
pub mod config;
pub mod error;
pub mod logging;
pub mod report;

pub use chain::{as_type, is, is_match, join, new, tree, unwrap, Joined, Message, Tree};
pub use error::{wrap, wrapf, ErrorContext, WrappedError};
pub use report::{
    error_chain_length, format_error_chain, format_error_chain_with, root_cause, ReportConfig,
};

use thiserror::Error;

/// Boxed error stored inside chain nodes
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur in the errwrap crate itself
#[derive(Debug, Error)]
pub enum ErrwrapError {
    /// Invalid or unreadable configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML (de)serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type for errwrap operations
pub type Result<T> = std::result::Result<T, ErrwrapError>;

/// Get version information
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let v = version();
        assert!(!v.is_empty());
    }

    #[test]
    fn test_config_error_display() {
        let err = ErrwrapError::Config("indent too large".to_string());
        assert_eq!(err.to_string(), "Configuration error: indent too large");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: ErrwrapError = io.into();
        assert!(matches!(err, ErrwrapError::Io(_)));
        assert_eq!(err.to_string(), "I/O error: missing");
    }
}
