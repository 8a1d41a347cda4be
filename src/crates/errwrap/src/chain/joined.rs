use std::error::Error as StdError;
use std::fmt;

use crate::BoxError;

/// Several errors reported as one
///
/// Renders as the renderings of its errors separated by newlines. Tree
/// traversal visits each joined error in order.
#[derive(Debug)]
pub struct Joined {
    errors: Vec<BoxError>,
}

impl Joined {
    /// The joined errors, in order
    pub fn errors(&self) -> impl Iterator<Item = &(dyn StdError + 'static)> + '_ {
        self.errors
            .iter()
            .map(|e| &**e as &(dyn StdError + 'static))
    }

    /// Number of joined errors (never zero)
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Whether there are no joined errors; never true for a `join` result
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for Joined {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", err)?;
        }
        Ok(())
    }
}

impl StdError for Joined {}

/// Join errors into one, dropping `None` entries
///
/// Returns `None` if no errors remain.
pub fn join<I, E>(errs: I) -> Option<Joined>
where
    I: IntoIterator<Item = Option<E>>,
    E: Into<BoxError>,
{
    let errors: Vec<BoxError> = errs.into_iter().flatten().map(Into::into).collect();
    if errors.is_empty() {
        return None;
    }
    Some(Joined { errors })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::{new, Message};

    #[test]
    fn test_join_all_none() {
        assert!(join([None::<Message>, None]).is_none());
    }

    #[test]
    fn test_join_empty() {
        assert!(join(Vec::<Option<Message>>::new()).is_none());
    }

    #[test]
    fn test_join_drops_none() {
        let joined = join([None, Some(new("a")), None, Some(new("b"))]).unwrap();
        assert_eq!(joined.len(), 2);
        assert_eq!(joined.to_string(), "a\nb");
    }

    #[test]
    fn test_join_single() {
        let joined = join([Some(new("only"))]).unwrap();
        assert_eq!(joined.to_string(), "only");
        assert!(!joined.is_empty());
    }

    #[test]
    fn test_join_mixed_types() {
        let io: BoxError = std::io::Error::new(std::io::ErrorKind::Other, "io").into();
        let msg: BoxError = new("msg").into();
        let joined = join([Some(io), Some(msg)]).unwrap();
        let rendered: Vec<String> = joined.errors().map(|e| e.to_string()).collect();
        assert_eq!(rendered, vec!["io", "msg"]);
    }
}
