//! Error chain reporting
//!
//! Renders a `source()` chain as a multi-line report and finds its root
//! cause.
//!
//! # Example
//!
//! ```rust
//! use errwrap::{format_error_chain, new, root_cause, wrap};
//!
//! let err = wrap(wrap(Some(new("file not found")), "reading app.yaml"), "loading config").unwrap();
//!
//! let report = format_error_chain(&err);
//! assert!(report.starts_with("Error: loading config: reading app.yaml: file not found"));
//! assert!(report.ends_with("    Caused by: file not found"));
//! assert_eq!(root_cause(&err).to_string(), "file not found");
//! ```

mod config;

pub use config::ReportConfig;

use config::MAX_INDENT;

use std::error::Error as StdError;

/// Format an error chain as a multi-line string using the default layout
///
/// Walks the error chain via `source()` and formats each error on a
/// separate line, indented two spaces per level.
pub fn format_error_chain(error: &dyn StdError) -> String {
    format_error_chain_with(error, &ReportConfig::default())
}

/// Format an error chain with a custom layout
///
/// Causes deeper than `config.max_depth` are collapsed into one
/// `"... N more"` line. The indent is clamped to the largest value
/// `ReportConfig` validation accepts.
pub fn format_error_chain_with(error: &dyn StdError, config: &ReportConfig) -> String {
    let step = config.indent.min(MAX_INDENT);
    let mut result = format!("Error: {}", error);
    let mut current = error.source();
    let mut level: usize = 1;

    while let Some(source) = current {
        let indent = level.saturating_mul(step);

        if config.max_depth.is_some_and(|max| level > max) {
            let remaining = error_chain_length(source);
            result.push_str(&format!("\n{:indent$}... {} more", "", remaining, indent = indent));
            break;
        }

        result.push_str(&format!(
            "\n{:indent$}{}: {}",
            "",
            config.label,
            source,
            indent = indent
        ));
        current = source.source();
        level += 1;
    }

    result
}

/// Get the root cause of an error chain
///
/// Walks the error chain via `source()` until reaching the bottom. A
/// [`Joined`](crate::Joined) error has no single cause and is its own root.
pub fn root_cause(error: &dyn StdError) -> &dyn StdError {
    let mut current = error;
    while let Some(source) = current.source() {
        current = source;
    }
    current
}

/// Count the number of errors in an error chain (minimum 1)
pub fn error_chain_length(error: &dyn StdError) -> usize {
    let mut count = 1;
    let mut current = error.source();

    while let Some(source) = current {
        count += 1;
        current = source.source();
    }

    count
}
