use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Leaf error carrying only a text
///
/// Every [`new`] call creates a distinct error, even for identical text.
/// Clones share the identity of the original, so a clone kept as a sentinel
/// can be found again with [`is`](crate::chain::is) after the original has
/// been wrapped.
#[derive(Debug, Clone)]
pub struct Message {
    id: u64,
    text: Cow<'static, str>,
}

impl Message {
    /// The error text
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl PartialEq for Message {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Message {}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl StdError for Message {}

/// Create an error that renders as `text`
pub fn new(text: impl Into<Cow<'static, str>>) -> Message {
    Message {
        id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
        text: text.into(),
    }
}
