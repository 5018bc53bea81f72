//! Ordering, intersection and coverage tests

use std::cmp::Ordering;

use notation_glob_engine::glob::{self, Pattern, covers};

fn glob(text: &str) -> Pattern {
    Pattern::parse(text).unwrap()
}

/// Every ordering of `items`
fn permutations(items: &[&'static str]) -> Vec<Vec<&'static str>> {
    if items.len() <= 1 {
        return vec![items.to_vec()];
    }
    let mut out = Vec::new();
    for (i, first) in items.iter().enumerate() {
        let mut rest = items.to_vec();
        rest.remove(i);
        for mut tail in permutations(&rest) {
            tail.insert(0, *first);
            out.push(tail);
        }
    }
    out
}

const POOL: [&str; 22] = [
    "*", "[*]", "a", "!a", "a.b", "a['b']", "!a.*", "*.b", "!*.b", "a[0]", "![0]", "![3]",
    "![*]", "[0].x", "![0][1]", "![1][3]", "![*][2]", "![0][*]", "![2].a", "[*][1]",
    "!a[2]", "!a[*]",
];

fn specificity(a: &Pattern, b: &Pattern) -> Ordering {
    glob::ordering::compare(a, b)
}

#[cfg(test)]
mod ordering_tests {
    use super::*;

    #[test]
    fn sort_orders_array_removals() {
        assert_eq!(
            glob::sort(&["![0][1]", "![0][*]", "![0][3]", "![*][2]"]).unwrap(),
            vec!["![0][3]", "![*][2]", "![0][1]", "![0][*]"]
        );
    }

    #[test]
    fn sort_is_independent_of_input_order() {
        let pool = ["![1][3]", "![*][2]", "![0][1]", "![0][*]", "![2]", "[0].x"];
        let expected = vec!["![2]", "[0].x", "![1][3]", "![*][2]", "![0][1]", "![0][*]"];
        for order in permutations(&pool) {
            assert_eq!(glob::sort(&order).unwrap(), expected, "{order:?}");
        }
    }

    #[test]
    fn normalize_is_independent_of_input_order() {
        let pool = ["[*]", "![1][3]", "![*][2]", "![0][1]", "![4]"];
        let expected = glob::normalize(&pool, false).unwrap();
        assert_eq!(expected, vec!["[*]", "![4]", "![1][3]", "![*][2]", "![0][1]"]);
        for order in permutations(&pool) {
            assert_eq!(glob::normalize(&order, false).unwrap(), expected, "{order:?}");
        }
    }

    #[test]
    fn compare_is_a_total_preorder() {
        let globs: Vec<Pattern> = POOL.iter().map(|g| glob(g)).collect();
        for a in &globs {
            assert_eq!(specificity(a, a), Ordering::Equal, "{a} against itself");
            for b in &globs {
                assert_eq!(
                    specificity(a, b),
                    specificity(b, a).reverse(),
                    "{a} against {b}"
                );
                for c in &globs {
                    if specificity(a, b) != Ordering::Greater && specificity(b, c) != Ordering::Greater {
                        assert_ne!(specificity(a, c), Ordering::Greater, "{a} <= {b} <= {c}");
                    }
                }
            }
        }
    }

    #[test]
    fn sort_keeps_original_text() {
        assert_eq!(
            glob::sort(&["x['y']", "!a", "*"]).unwrap(),
            vec!["*", "!a", "x['y']"]
        );
        assert!(glob::sort(&["a", "["]).is_err());
    }

    #[test]
    fn compare_by_specificity() {
        assert_eq!(glob::compare("a", "a.b").unwrap(), Ordering::Less);
        assert_eq!(glob::compare("*", "a").unwrap(), Ordering::Less);
        assert_eq!(glob::compare("a", "!a").unwrap(), Ordering::Less);
        assert_eq!(glob::compare("b", "a").unwrap(), Ordering::Greater);
        assert_eq!(glob::compare("*", "[*]").unwrap(), Ordering::Equal);
        assert_eq!(glob::compare("a.*", "a").unwrap(), Ordering::Equal);
    }

    #[test]
    fn intersect_strings() {
        assert_eq!(glob::intersect("x.*", "*.y", false).unwrap().as_deref(), Some("x.y"));
        assert_eq!(glob::intersect("x.*.z", "*.y", false).unwrap().as_deref(), Some("x.y.z"));
        assert_eq!(glob::intersect("!x.*", "*.y", true).unwrap().as_deref(), Some("!x.y"));
        assert_eq!(glob::intersect("x.y", "*.b", false).unwrap(), None);
        assert!(glob::intersect("x", "y..z", false).is_err());
    }

    #[test]
    fn covers_is_reflexive_and_transitive() {
        let globs: Vec<Pattern> = ["*", "a", "a.*.c", "a.b", "a.b.c", "*.b", "[*]", "[0]", "[0].x"]
            .iter()
            .map(|g| glob(g))
            .collect();
        for a in &globs {
            assert!(covers(a, a), "{a} covers itself");
            for b in &globs {
                for c in &globs {
                    if covers(a, b) && covers(b, c) {
                        assert!(covers(a, c), "{a} > {b} > {c}");
                    }
                }
            }
        }
    }

    #[test]
    fn wildcards_cover_their_own_kind() {
        assert!(covers(&glob("*"), &glob("a.b")));
        assert!(!covers(&glob("*"), &glob("[0]")));
        assert!(covers(&glob("[*]"), &glob("[0].a")));
        assert!(!covers(&glob("a.b"), &glob("a.*.c")));
        assert!(covers(&glob("a.*.c"), &glob("a.b.c")));
    }

    #[test]
    fn glob_level_test() {
        assert!(glob::test("a.*", "a.b").unwrap());
        assert!(!glob::test("a.b", "a").unwrap());
    }
}
