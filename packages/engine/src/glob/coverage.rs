//! Pairwise relations between globs
//!
//! Coverage compares note sequences positionally. A glob covers every path
//! at or below the paths it names, so a shorter glob may cover a longer one
//! but never the reverse.

use super::note::Note;
use super::pattern::Pattern;

/// Whether `a`'s match set is a superset of `b`'s
///
/// Negation of `b` is ignored. A negated `a` with more notes than `b` never
/// covers it: `!x.*.*` does not cover `!x.*`, since the deeper exclusion
/// leaves `x.*` itself in place.
#[must_use]
pub fn covers(a: &Pattern, b: &Pattern) -> bool {
    if a.is_negated() && a.depth() > b.depth() {
        return false;
    }
    covers_notes(a.notes(), b.notes())
}

/// Positional coverage of two note sequences
#[must_use]
pub fn covers_notes(a: &[Note], b: &[Note]) -> bool {
    a.len() <= b.len() && a.iter().zip(b).all(|(x, y)| x.covers(y))
}

/// Whether either glob covers the other at every shared position
///
/// Positions beyond the shorter glob match: `[2][1]` and `[2]` match even
/// though neither fully subsumes the other for removal-order purposes.
#[must_use]
pub fn matches(a: &Pattern, b: &Pattern) -> bool {
    matches_notes(a.notes(), b.notes())
}

#[inline]
pub(crate) fn matches_notes(a: &[Note], b: &[Note]) -> bool {
    a.iter().zip(b).all(|(x, y)| x.matches(y))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glob(text: &str) -> Pattern {
        Pattern::parse(text).unwrap()
    }

    #[test]
    fn shallower_covers_deeper() {
        assert!(covers(&glob("x"), &glob("x.y.z")));
        assert!(!covers(&glob("x.y"), &glob("x")));
    }

    #[test]
    fn deeper_negation_never_covers_shallower() {
        assert!(!covers(&glob("!x.*.*"), &glob("!x.*")));
        assert!(covers(&glob("!x.*"), &glob("!x.*.*")));
    }

    #[test]
    fn matches_is_symmetric() {
        assert!(matches(&glob("[2][1]"), &glob("[2]")));
        assert!(matches(&glob("[2]"), &glob("[2][1]")));
        assert!(matches(&glob("[*][1]"), &glob("[0][*]")));
        assert!(!matches(&glob("[1][1]"), &glob("[2]")));
    }
}
