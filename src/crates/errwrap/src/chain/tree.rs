use std::error::Error as StdError;

use super::joined::Joined;

/// Depth-first iterator over an error tree
///
/// Yields the starting error first, then its causes. The errors inside a
/// [`Joined`] are visited in order, each with its own causes before the next.
pub struct Tree<'a> {
    stack: Vec<&'a (dyn StdError + 'static)>,
}

impl<'a> Iterator for Tree<'a> {
    type Item = &'a (dyn StdError + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;

        if let Some(joined) = node.downcast_ref::<Joined>() {
            let children: Vec<_> = joined.errors().collect();
            self.stack.extend(children.into_iter().rev());
        } else if let Some(source) = node.source() {
            self.stack.push(source);
        }

        Some(node)
    }
}

/// Iterate `err` and every error reachable from it
pub fn tree<'a>(err: &'a (dyn StdError + 'static)) -> Tree<'a> {
    Tree { stack: vec![err] }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::{join, new};
    use crate::error::wrap;
    use crate::BoxError;

    fn rendered(err: &(dyn StdError + 'static)) -> Vec<String> {
        tree(err).map(|e| e.to_string()).collect()
    }

    #[test]
    fn test_tree_leaf() {
        assert_eq!(rendered(&new("leaf")), vec!["leaf"]);
    }

    #[test]
    fn test_tree_linear_chain() {
        let err = wrap(wrap(Some(new("root")), "mid"), "top").unwrap();
        assert_eq!(rendered(&err), vec!["top: mid: root", "mid: root", "root"]);
    }

    #[test]
    fn test_tree_depth_first_order() {
        let left: BoxError = wrap(Some(new("a")), "left").unwrap().into();
        let right: BoxError = new("b").into();
        let joined = join([Some(left), Some(right)]).unwrap();

        assert_eq!(rendered(&joined), vec!["left: a\nb", "left: a", "a", "b"]);
    }
}
