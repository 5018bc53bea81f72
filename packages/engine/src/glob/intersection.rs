//! Intersection of two globs
//!
//! ```text
//!   x.*  ∩  *.y   »  x.y
//! x.*.z  ∩  *.y   »  x.y.z
//!   x.y  ∩  *.b   »  (none)
//! ```

use super::note::Note;
use super::pattern::Pattern;

/// Most specific glob consistent with both `a` and `b`
///
/// Notes are merged position by position up to the longer glob. Returns
/// `None` when some position holds two different concrete notes, or an
/// object wildcard against an array note.
///
/// In restrictive mode the result is negated if either side is. In loose
/// mode it is negated if both are, or if only the strictly shallower side is
/// (a deeper positive cannot lift a broader exclusion).
#[must_use]
pub fn intersect(a: &Pattern, b: &Pattern, restrictive: bool) -> Option<Pattern> {
    let merged = merge_notes(a.notes(), b.notes())?;
    Pattern::from_notes(merged, intersection_negated(a, b, restrictive))
}

pub(crate) fn merge_notes(a: &[Note], b: &[Note]) -> Option<Vec<Note>> {
    let len = a.len().max(b.len());
    let mut merged = Vec::with_capacity(len);
    for i in 0..len {
        let note = match (a.get(i), b.get(i)) {
            (Some(x), Some(y)) => merge_note(x, y)?,
            (Some(x), None) | (None, Some(x)) => x.clone(),
            (None, None) => break,
        };
        merged.push(note);
    }
    Some(merged)
}

fn merge_note(x: &Note, y: &Note) -> Option<Note> {
    if x == y {
        return Some(x.clone());
    }
    match (x, y) {
        (Note::Wildcard, other) | (other, Note::Wildcard) if !other.is_array() => {
            Some(other.clone())
        }
        (Note::ArrayWildcard, other) | (other, Note::ArrayWildcard) if other.is_array() => {
            Some(other.clone())
        }
        _ => None,
    }
}

fn intersection_negated(a: &Pattern, b: &Pattern, restrictive: bool) -> bool {
    if restrictive {
        return a.is_negated() || b.is_negated();
    }
    match (a.is_negated(), b.is_negated()) {
        (true, true) => true,
        (true, false) => a.depth() < b.depth(),
        (false, true) => b.depth() < a.depth(),
        (false, false) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glob(text: &str) -> Pattern {
        Pattern::parse(text).unwrap()
    }

    fn meet(a: &str, b: &str, restrictive: bool) -> Option<String> {
        intersect(&glob(a), &glob(b), restrictive).map(|p| p.to_string())
    }

    #[test]
    fn wildcards_yield_to_concrete_notes() {
        assert_eq!(meet("x.*", "!*.y", false).as_deref(), Some("x.y"));
        assert_eq!(meet("x.*", "!*.y", true).as_deref(), Some("!x.y"));
        assert_eq!(meet("!x.*.z", "!*.y", false).as_deref(), Some("!x.y.z"));
    }

    #[test]
    fn conflicting_notes_have_no_intersection() {
        assert_eq!(meet("x.y", "*.b", false), None);
        assert_eq!(meet("x.y", "a.*", false), None);
        assert_eq!(meet("*.a", "[0].a", false), None);
    }

    #[test]
    fn shallower_negation_propagates_in_loose_mode() {
        assert_eq!(meet("!x", "x.y", false).as_deref(), Some("!x.y"));
        assert_eq!(meet("x", "!x.y", false).as_deref(), Some("x.y"));
    }

    #[test]
    fn array_wildcards_merge_with_indices() {
        assert_eq!(meet("[*].a", "[2]", false).as_deref(), Some("[2].a"));
    }
}
