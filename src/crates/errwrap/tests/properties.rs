//! Property tests for wrapping

use errwrap::{is, new, unwrap, wrap, wrapf, Message};
use proptest::prelude::*;

proptest! {
    #[test]
    fn wrap_of_none_is_none(msg in ".*") {
        prop_assert!(wrap(None::<Message>, msg).is_none());
    }

    #[test]
    fn wrapf_of_none_is_none(n in any::<i64>(), word in "[a-z]{0,12}") {
        let wrapped = wrapf!(None::<Message>, "op {} {}", n, word);
        prop_assert!(wrapped.is_none());
    }

    #[test]
    fn wrap_renders_message_then_cause(msg in ".*", cause in ".*") {
        let err = wrap(Some(new(cause.clone())), msg.clone()).unwrap();
        prop_assert_eq!(err.to_string(), format!("{}: {}", msg, cause));
    }

    #[test]
    fn wrapf_renders_formatted_message(n in any::<u32>(), name in "[a-z./]{1,16}", cause in ".*") {
        let err = wrapf!(Some(new(cause.clone())), "step {} of {}", n, name).unwrap();
        prop_assert_eq!(err.to_string(), format!("step {} of {}: {}", n, name, cause));
    }

    #[test]
    fn wrap_preserves_cause_identity(msg in ".*", cause in ".*") {
        let e = new(cause);
        let err = wrap(Some(e.clone()), msg).unwrap();

        let unwrapped = unwrap(&err).and_then(|c| c.downcast_ref::<Message>());
        prop_assert_eq!(unwrapped, Some(&e));
        prop_assert!(is(&err, &e));
    }

    #[test]
    fn nested_wraps_keep_root_reachable(msgs in proptest::collection::vec(".*", 1..8)) {
        let root = new("root");
        let mut err = wrap(Some(root.clone()), msgs[0].clone()).unwrap();
        for msg in &msgs[1..] {
            err = wrap(Some(err), msg.clone()).unwrap();
        }

        prop_assert!(is(&err, &root));
        prop_assert_eq!(errwrap::error_chain_length(&err), msgs.len() + 1);
    }
}
