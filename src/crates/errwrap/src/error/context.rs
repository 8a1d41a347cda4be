//! Context extension for `Result`
//!
//! Provides `context` / `with_context` on any `Result` whose error converts
//! into a boxed error.

use super::wrapped::WrappedError;
use crate::BoxError;

/// Trait for adding context to errors
///
/// The wrapped error renders as `"<context>: <original>"` and keeps the
/// original error as its `source()`.
///
/// # Example
///
/// ```rust
/// use errwrap::ErrorContext;
///
/// fn read_config(path: &str) -> Result<String, errwrap::WrappedError> {
///     std::fs::read_to_string(path).with_context(|| format!("reading config {}", path))
/// }
///
/// let err = read_config("/definitely/not/here.yaml").unwrap_err();
/// assert!(err.to_string().starts_with("reading config /definitely/not/here.yaml: "));
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error with a message
    ///
    /// # Arguments
    ///
    /// * `msg` - Context message to add to the error
    ///
    /// # Returns
    ///
    /// The result with error wrapped with context
    fn context(self, msg: impl Into<String>) -> Result<T, WrappedError>;

    /// Add context to an error using a closure (lazily evaluated)
    ///
    /// The closure only runs if the result is an error.
    fn with_context<F>(self, f: F) -> Result<T, WrappedError>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: Into<BoxError>,
{
    fn context(self, msg: impl Into<String>) -> Result<T, WrappedError> {
        self.map_err(|e| WrappedError::new(msg, e))
    }

    fn with_context<F>(self, f: F) -> Result<T, WrappedError>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| WrappedError::new(f(), e))
    }
}
