//! Contextual wrapping of optional errors

use std::error::Error as StdError;
use std::fmt;

use crate::BoxError;

/// Error annotated with a context message
///
/// Renders as `"<message>: <cause>"` and reports the original error as its
/// `source()`.
#[derive(Debug)]
pub struct WrappedError {
    message: String,
    source: BoxError,
}

impl WrappedError {
    /// Wrap `source` with `message`
    pub fn new(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self {
            message: message.into(),
            source: source.into(),
        }
    }

    /// The context message, without the cause
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The wrapped error
    pub fn cause(&self) -> &(dyn StdError + Send + Sync + 'static) {
        &*self.source
    }

    /// Give back the wrapped error, dropping the context
    pub fn into_cause(self) -> BoxError {
        self.source
    }
}

impl fmt::Display for WrappedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.message, self.source)
    }
}

impl StdError for WrappedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&*self.source as &(dyn StdError + 'static))
    }
}

/// Annotate `err` with `msg`
///
/// Returns `None` when `err` is `None`; the message is not converted in that
/// case. Otherwise the result renders as `"<msg>: <err>"` and its cause is
/// `err`.
///
/// # Example
///
/// ```rust
/// use errwrap::{new, wrap};
///
/// let err = wrap(Some(new("file not found")), "loading config").unwrap();
/// assert_eq!(err.to_string(), "loading config: file not found");
/// ```
pub fn wrap<E>(err: Option<E>, msg: impl Into<String>) -> Option<WrappedError>
where
    E: Into<BoxError>,
{
    let err = err?;
    Some(WrappedError::new(msg, err))
}

/// Annotate `err` with a formatted message
///
/// Same as [`wrap`], except the message is rendered from `args`. The
/// arguments are only rendered when `err` is present. Usually called through
/// the [`wrapf!`](crate::wrapf!) macro.
pub fn wrapf<E>(err: Option<E>, args: fmt::Arguments<'_>) -> Option<WrappedError>
where
    E: Into<BoxError>,
{
    let err = err?;
    Some(WrappedError::new(fmt::format(args), err))
}

/// Annotate an optional error with a `format!`-style message
///
/// ```rust
/// use errwrap::{new, wrapf};
///
/// let err = wrapf!(Some(new("file not found")), "loading config {}", "app.yaml").unwrap();
/// assert_eq!(err.to_string(), "loading config app.yaml: file not found");
///
/// assert!(wrapf!(None::<errwrap::Message>, "op {}", 5).is_none());
/// ```
#[macro_export]
macro_rules! wrapf {
    ($err:expr, $($arg:tt)+) => {
        $crate::error::wrapf($err, ::core::format_args!($($arg)+))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::new;

    #[test]
    fn test_wrap_none() {
        assert!(wrap(None::<std::io::Error>, "loading config").is_none());
    }

    #[test]
    fn test_wrap_renders_message_and_cause() {
        let err = wrap(Some(new("file not found")), "loading config").unwrap();
        assert_eq!(err.to_string(), "loading config: file not found");
        assert_eq!(err.message(), "loading config");
        assert_eq!(err.cause().to_string(), "file not found");
    }

    #[test]
    fn test_wrap_empty_message() {
        let err = wrap(Some(new("boom")), "").unwrap();
        assert_eq!(err.to_string(), ": boom");
    }

    #[test]
    fn test_wrap_accepts_string_errors() {
        let err = wrap(Some("plain text"), "ctx").unwrap();
        assert_eq!(err.to_string(), "ctx: plain text");
    }

    #[test]
    fn test_wrap_nested() {
        let inner = wrap(Some(new("file not found")), "reading app.yaml");
        let outer = wrap(inner, "loading config").unwrap();
        assert_eq!(
            outer.to_string(),
            "loading config: reading app.yaml: file not found"
        );
    }

    #[test]
    fn test_wrapf_formats_message() {
        let err = wrapf(Some(new("timeout")), format_args!("op {} of {}", 3, 5)).unwrap();
        assert_eq!(err.to_string(), "op 3 of 5: timeout");
        assert_eq!(err.message(), "op 3 of 5");
    }

    #[test]
    fn test_wrapf_none_skips_formatting() {
        struct Panics;

        impl fmt::Display for Panics {
            fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
                panic!("arguments must not be rendered for an absent error");
            }
        }

        assert!(crate::wrapf!(None::<std::io::Error>, "op {}", Panics).is_none());
    }

    #[test]
    fn test_source_is_cause() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = wrap(Some(io), "opening").unwrap();
        let source = err.source().unwrap();
        let io = source.downcast_ref::<std::io::Error>().unwrap();
        assert_eq!(io.kind(), std::io::ErrorKind::NotFound);
    }

    #[test]
    fn test_into_cause() {
        let err = wrap(Some(new("root")), "ctx").unwrap();
        let cause = err.into_cause();
        assert_eq!(cause.to_string(), "root");
    }
}
