//! Specificity ordering of globs
//!
//! Broad globs sort first and specific ones last, so a consumer applying a
//! sorted list as successive include/exclude operations lets later rules
//! override earlier ones.

use std::cmp::{Ordering, Reverse};

use super::note::Note;
use super::pattern::Pattern;
use super::tokenizer;

/// Removal slot of a negated glob ending in an array note
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Slot {
    Unslotted,
    /// Higher indices first
    Index(Reverse<u32>),
    /// `[*]` after every concrete index
    Any,
}

/// Sort key of a glob, compared field by field
type SortKey = (usize, Slot, Reverse<usize>, bool, String);

fn sort_key(glob: &Pattern) -> SortKey {
    let slot = match glob.notes().last() {
        Some(Note::Index(index)) if glob.is_negated() => Slot::Index(Reverse(*index)),
        Some(Note::ArrayWildcard) if glob.is_negated() => Slot::Any,
        _ => Slot::Unslotted,
    };
    let text = if is_bare_wildcard(glob) {
        String::new()
    } else {
        let normalized: Vec<Note> = glob.notes().iter().map(Note::normalized).collect();
        tokenizer::join(&normalized)
    };
    (
        glob.depth(),
        slot,
        Reverse(glob.wildcard_count()),
        glob.is_negated(),
        text,
    )
}

/// Compare two globs by specificity
///
/// 1. Fewer notes first.
/// 2. Negated globs ending in an array note after the others, by descending
///    index with `[*]` last, so higher indices get removed before lower
///    ones shift.
/// 3. More wildcards first.
/// 4. Positive before negated.
/// 5. Normalized text. Bare positive wildcards (`*`, `[*]`) share one key.
///
/// This is a total preorder: structurally equal globs compare `Equal`
/// whatever key form they were written in.
#[must_use]
pub fn compare(a: &Pattern, b: &Pattern) -> Ordering {
    sort_key(a).cmp(&sort_key(b))
}

/// Stable sort of globs by [`compare`]
pub fn sort_patterns(list: &mut [Pattern]) {
    list.sort_by_cached_key(sort_key);
}

fn is_bare_wildcard(glob: &Pattern) -> bool {
    !glob.is_negated() && glob.depth() == 1 && glob.notes()[0].is_wildcard()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(list: &[&str]) -> Vec<String> {
        let mut globs: Vec<Pattern> = list.iter().map(|g| Pattern::parse(g).unwrap()).collect();
        sort_patterns(&mut globs);
        globs.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn array_items_sort_by_descending_index() {
        assert_eq!(
            sorted(&["![0][1]", "![0][*]", "![0][3]", "![*][2]"]),
            vec!["![0][3]", "![*][2]", "![0][1]", "![0][*]"]
        );
    }

    #[test]
    fn array_slots_ignore_parents() {
        assert_eq!(
            sorted(&["![0][1]", "![1][3]", "![*][2]"]),
            vec!["![1][3]", "![*][2]", "![0][1]"]
        );
        assert_eq!(
            sorted(&["![*].a", "![2]", "[*]", "![5]"]),
            vec!["[*]", "![5]", "![2]", "![*].a"]
        );
    }

    #[test]
    fn key_forms_compare_equal() {
        let a = Pattern::parse("a.b").unwrap();
        let b = Pattern::parse("a['b']").unwrap();
        assert_eq!(compare(&a, &b), Ordering::Equal);
    }

    #[test]
    fn broad_rules_sort_before_specific() {
        assert_eq!(
            sorted(&["car.model", "!car.*", "*"]),
            vec!["*", "!car.*", "car.model"]
        );
        assert_eq!(sorted(&["!id", "id", "a"]), vec!["a", "id", "!id"]);
    }
}
