//! Union of two glob lists
//!
//! Restrictive mode treats exclusions as absolute across both sources, so the
//! union is the normalized concatenation. Loose mode lets each side keep what
//! it grants: an exclusion from one side survives only where the other side
//! does not grant the excluded paths.

use super::intersection::intersect;
use super::normalize::{Normalizer, parse_all};
use super::pattern::Pattern;
use crate::error::NotationResult;

/// Union of two parsed glob lists
///
/// # Errors
///
/// Returns `NotationError::Integrity` if either list, or both combined, mix
/// array-root and object-root globs.
pub fn union_patterns(
    a: Vec<Pattern>,
    b: Vec<Pattern>,
    restrictive: bool,
) -> NotationResult<Vec<Pattern>> {
    let normalizer = Normalizer::new(restrictive);
    let a = normalizer.normalize(a)?;
    let b = normalizer.normalize(b)?;
    if a.is_empty() {
        return Ok(b);
    }
    if b.is_empty() {
        return Ok(a);
    }

    if restrictive {
        return normalizer.normalize(a.into_iter().chain(b).collect());
    }

    let mut candidates = Vec::with_capacity(a.len() + b.len());
    merge_side(&a, &b, &mut candidates);
    merge_side(&b, &a, &mut candidates);
    tracing::trace!(candidates = candidates.len(), "Loose union candidates");
    normalizer.normalize(candidates)
}

fn merge_side(side: &[Pattern], other: &[Pattern], out: &mut Vec<Pattern>) {
    for glob in side {
        if !glob.is_negated() || other.contains(glob) {
            out.push(glob.clone());
            continue;
        }
        if grants(other, glob) == Some(true) {
            tracing::trace!(exclusion = %glob, "Exclusion lifted by other list");
            continue;
        }
        out.push(glob.clone());

        for granted in other.iter().filter(|p| !p.is_negated()) {
            if glob.covers(granted) || granted.covers(glob) {
                continue;
            }
            let Some(shared) = intersect(glob, granted, false).map(|i| i.to_positive()) else {
                continue;
            };
            if grants(other, &shared) == Some(true) {
                out.push(shared);
            }
        }
    }
}

/// Polarity of the most specific rule in a sorted list that covers `glob`
fn grants(list: &[Pattern], glob: &Pattern) -> Option<bool> {
    list.iter()
        .rev()
        .find(|rule| rule.covers(glob))
        .map(|rule| !rule.is_negated())
}

/// Union of two glob lists
///
/// # Errors
///
/// Returns `NotationError::Parse` for invalid globs and
/// `NotationError::Integrity` for mixed array and object roots.
///
/// # Examples
/// ```
/// use notation_glob_engine::glob::union;
///
/// let merged = union(&["*", "!location"], &["location"], false).unwrap();
/// assert_eq!(merged, vec!["*"]);
///
/// let merged = union(&["*", "!location"], &["location"], true).unwrap();
/// assert_eq!(merged, vec!["*", "!location"]);
/// ```
pub fn union<A, B>(a: &[A], b: &[B], restrictive: bool) -> NotationResult<Vec<String>>
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    let merged = union_patterns(parse_all(a)?, parse_all(b)?, restrictive)?;
    Ok(merged.iter().map(ToString::to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn globs(list: &[&str]) -> Vec<Pattern> {
        list.iter().map(|g| Pattern::parse(g).unwrap()).collect()
    }

    #[test]
    fn grants_follows_most_specific_rule() {
        let list = globs(&["*", "!car.*", "car.model"]);
        let glob = |s: &str| Pattern::parse(s).unwrap();
        assert_eq!(grants(&list, &glob("car.model.year")), Some(true));
        assert_eq!(grants(&list, &glob("car.color")), Some(false));
        assert_eq!(grants(&list, &glob("id")), Some(true));
        assert_eq!(grants(&globs(&["name"]), &glob("id")), None);
    }

    #[test]
    fn partial_grants_are_carried_over() {
        let merged = union(&["*", "!*.model"], &["car"], false).unwrap();
        assert_eq!(merged, vec!["*", "!*.model", "car.model"]);
    }
}
