//! Property tests for wipe guard rails.

use proptest::prelude::*;

use webroot_sync::domain::policies::{GuardRailViolation, WipeGuard, MIN_ROOT_LEN};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Guard evaluation never panics.
    #[test]
    fn property_check_never_panics(s in "(?s).{0,64}") {
        let _ = WipeGuard::default().check_root(&s);
    }

    /// PROPERTY: Relative roots are never accepted.
    #[test]
    fn property_relative_rejected(s in "[A-Za-z0-9._-][A-Za-z0-9./_-]{0,32}") {
        prop_assert!(WipeGuard::default().check_root(&s).is_err());
    }

    /// PROPERTY: Anything shorter than the minimum is rejected.
    #[test]
    fn property_short_rejected(s in "/[a-z]{0,3}") {
        prop_assume!(s.len() < MIN_ROOT_LEN);
        prop_assert!(WipeGuard::default().check_root(&s).is_err());
    }

    /// PROPERTY: Trailing slashes never sneak a forbidden root through.
    #[test]
    fn property_trailing_slashes_do_not_help(
        root in prop_oneof![Just("/run"), Just("/home"), Just("/root")],
        slashes in 1usize..4,
    ) {
        let candidate = format!("{}{}", root, "/".repeat(slashes));
        let is_forbidden = matches!(
            WipeGuard::default().check_root(&candidate),
            Err(GuardRailViolation::Forbidden { .. })
        );
        prop_assert!(is_forbidden);
    }

    /// PROPERTY: Roots that climb back to `/` are rejected.
    #[test]
    fn property_dot_dot_to_root_rejected(depth in 1usize..4, name in "[a-z]{5,10}") {
        let climb = vec![".."; depth + 1].join("/");
        let candidate = format!("/{}/{}", name, climb);
        prop_assert!(WipeGuard::default().check_root(&candidate).is_err());
    }

    /// PROPERTY: Ordinary deep absolute roots are accepted as given.
    #[test]
    fn property_plain_roots_accepted(parts in proptest::collection::vec("[a-z]{2,8}", 2..5)) {
        let root = format!("/{}", parts.join("/"));
        let checked = WipeGuard::default().check_root(&root);
        prop_assert!(checked.is_ok());
        let checked = checked.unwrap();
        prop_assert_eq!(checked.as_str(), root.as_str());
    }
}
