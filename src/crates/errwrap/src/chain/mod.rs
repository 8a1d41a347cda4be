//! Error chain primitives
//!
//! Leaf errors, joined errors and traversal of the tree formed by
//! `source()` links and [`Joined`] children.
//!
//! # Example
//!
//! ```rust
//! use errwrap::{as_type, is, join, new, wrap, Message};
//!
//! let timeout = new("timeout");
//! let refused = new("connection refused");
//!
//! let both = join([Some(timeout.clone()), None, Some(refused.clone())]).unwrap();
//! assert_eq!(both.to_string(), "timeout\nconnection refused");
//!
//! let err = wrap(Some(both), "syncing replicas").unwrap();
//! assert!(is(&err, &refused));
//! assert_eq!(as_type::<Message>(&err), Some(&timeout));
//! ```

mod joined;
mod message;
mod tree;

pub use joined::{join, Joined};
pub use message::{new, Message};
pub use tree::{tree, Tree};

use std::error::Error as StdError;

/// Immediate cause of `err`, or `None`
///
/// A [`Joined`] error has several causes and no single one, so this returns
/// `None` for it.
pub fn unwrap<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a (dyn StdError + 'static)> {
    err.source()
}

/// Whether `target` appears anywhere in `err`'s tree
///
/// An error matches when it has the same concrete type as `target` and
/// compares equal to it. `PartialEq` is the hook for custom equivalence.
pub fn is<T>(err: &(dyn StdError + 'static), target: &T) -> bool
where
    T: StdError + PartialEq + 'static,
{
    tree(err).any(|node| node.downcast_ref::<T>().is_some_and(|candidate| candidate == target))
}

/// Whether any error in `err`'s tree satisfies `predicate`
pub fn is_match<F>(err: &(dyn StdError + 'static), predicate: F) -> bool
where
    F: FnMut(&(dyn StdError + 'static)) -> bool,
{
    tree(err).any(predicate)
}

/// First error of type `T` in `err`'s tree
pub fn as_type<'a, T>(err: &'a (dyn StdError + 'static)) -> Option<&'a T>
where
    T: StdError + 'static,
{
    tree(err).find_map(|node| node.downcast_ref::<T>())
}
