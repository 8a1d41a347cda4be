//! Error wrapping utilities
//!
//! This module attaches human-readable context to errors while keeping the
//! original error reachable through `source()`.
//!
//! # Features
//!
//! - `wrap` / `wrapf` for optional errors (`None` stays `None`)
//! - `ErrorContext` trait for adding context to a `Result`
//!
//! # Example
//!
//! ```rust,ignore
//! use errwrap::error::{wrap, ErrorContext};
//!
//! fn read_config(path: &str) -> Result<String, errwrap::WrappedError> {
//!     std::fs::read_to_string(path).with_context(|| format!("reading {}", path))
//! }
//!
//! let maybe_err: Option<std::io::Error> = None;
//! assert!(wrap(maybe_err, "loading config").is_none());
//! ```

mod context;
mod wrapped;

pub use context::ErrorContext;
pub use wrapped::{wrap, wrapf, WrappedError};
