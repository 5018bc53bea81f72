//! Union tests
//!
//! Merging glob lists from independent sources.

use notation_glob_engine::error::ErrorKind;
use notation_glob_engine::glob::union;

fn merge(a: &[&str], b: &[&str], restrictive: bool) -> Vec<String> {
    union(a, b, restrictive).unwrap()
}

#[cfg(test)]
mod union_tests {
    use super::*;

    #[test]
    fn other_side_lifts_exclusions_in_loose_mode() {
        env_logger::builder().is_test(true).try_init().ok();

        assert_eq!(merge(&["*", "!location"], &["location"], false), vec!["*"]);
        assert_eq!(merge(&["location"], &["*", "!location"], false), vec!["*"]);
    }

    #[test]
    fn exclusions_are_absolute_in_restrictive_mode() {
        assert_eq!(
            merge(&["*", "!location"], &["location"], true),
            vec!["*", "!location"]
        );
        assert_eq!(
            merge(&["a", "!a.b"], &["a.b.c", "x"], true),
            vec!["a", "x", "!a.b"]
        );
    }

    #[test]
    fn exact_duplicates_dominate() {
        assert_eq!(merge(&["*", "!a"], &["*", "!a"], false), vec!["*", "!a"]);
    }

    #[test]
    fn ungranted_exclusions_survive() {
        assert_eq!(merge(&["*", "!password"], &["name"], false), vec!["*", "!password"]);
    }

    #[test]
    fn empty_side_yields_the_other() {
        assert_eq!(merge(&[], &["a", "b.c"], false), vec!["a", "b.c"]);
        assert_eq!(merge(&["!a"], &["b"], false), vec!["b"]);
        assert_eq!(merge(&["a"], &[], true), vec!["a"]);
    }

    #[test]
    fn partial_grants_are_carried_over() {
        assert_eq!(
            merge(&["*", "!*.model"], &["car"], false),
            vec!["*", "!*.model", "car.model"]
        );
    }

    #[test]
    fn union_is_order_independent() {
        let a = ["image", "name"];
        let b = ["name", "!location"];
        let c = ["*", "!location"];

        let ab_c = union(&union(&a, &b, false).unwrap(), &c, false).unwrap();
        let a_bc = union(&a, &union(&b, &c, false).unwrap(), false).unwrap();
        let ac_b = union(&union(&a, &c, false).unwrap(), &b, false).unwrap();

        assert_eq!(ab_c, vec!["*", "!location"]);
        assert_eq!(ab_c, a_bc);
        assert_eq!(ab_c, ac_b);
    }

    #[test]
    fn mixed_roots_across_sides_fail() {
        let error = union(&["a"], &["[0]"], false).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Integrity);
        assert!(union(&["a"], &["[0]"], true).unwrap_err().is_integrity());
    }
}
