//! Reduction of glob lists to their minimal equivalent
//!
//! Each pass computes keep/drop decisions against a read-only snapshot of the
//! working set. Orphaned exclusions (negated globs no positive glob covers)
//! are replaced by their intersections with the positive globs they partially
//! overlap, and passes repeat until the working set stops changing.

use hashbrown::HashSet;

use super::coverage::covers;
use super::intersection::intersect;
use super::ordering::sort_patterns;
use super::pattern::Pattern;
use crate::error::{NotationError, NotationResult};

/// Glob list normalizer
///
/// In loose mode (the default) an exclusion only removes paths that no more
/// specific positive glob grants again. In restrictive mode an exclusion
/// removes every path it covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Normalizer {
    restrictive: bool,
}

/// Outcome of one pass over the working set
struct Reduction {
    kept: Vec<Pattern>,
    intersections: Vec<Pattern>,
}

impl Normalizer {
    #[inline]
    #[must_use]
    pub const fn new(restrictive: bool) -> Self {
        Self { restrictive }
    }

    #[inline]
    #[must_use]
    pub const fn loose() -> Self {
        Self::new(false)
    }

    #[inline]
    #[must_use]
    pub const fn restrictive() -> Self {
        Self::new(true)
    }

    #[inline]
    #[must_use]
    pub const fn is_restrictive(&self) -> bool {
        self.restrictive
    }

    /// Normalize parsed globs into a sorted, duplicate-free minimal list
    ///
    /// # Errors
    ///
    /// Returns `NotationError::Integrity` if the list mixes array-root and
    /// object-root globs.
    pub fn normalize(&self, globs: Vec<Pattern>) -> NotationResult<Vec<Pattern>> {
        ensure_integrity(&globs)?;

        let mut working = dedupe(globs);
        if self.restrictive && working.iter().any(Pattern::is_negate_all) {
            tracing::debug!("Negate-all glob in restrictive mode, nothing remains");
            return Ok(Vec::new());
        }

        let mut seen: HashSet<Pattern> = HashSet::new();
        let mut pass = 0usize;
        loop {
            pass += 1;
            let Reduction { kept, intersections } = self.reduce(&working);

            let mut next = kept;
            let mut grew = false;
            for glob in intersections {
                if !next.contains(&glob) && seen.insert(glob.clone()) {
                    tracing::trace!(intersection = %glob, "Orphaned exclusion narrowed");
                    next.push(glob);
                    grew = true;
                }
            }

            tracing::trace!(
                pass,
                before = working.len(),
                after = next.len(),
                grew,
                "Normalization pass"
            );

            let settled = !grew && next.len() == working.len();
            working = next;
            if settled {
                break;
            }
        }

        sort_patterns(&mut working);
        tracing::debug!(
            passes = pass,
            remaining = working.len(),
            restrictive = self.restrictive,
            "Normalized glob list"
        );
        Ok(working)
    }

    fn reduce(&self, working: &[Pattern]) -> Reduction {
        let (negatives, positives): (Vec<&Pattern>, Vec<&Pattern>) =
            working.iter().partition(|g| g.is_negated());

        // negation wins exact ties
        let mut positives: Vec<&Pattern> = positives
            .into_iter()
            .filter(|p| !negatives.iter().any(|n| n.notes() == p.notes()))
            .collect();
        if self.restrictive {
            positives.retain(|p| !negatives.iter().any(|n| covers(n, p)));
        }

        let anchored: Vec<&Pattern> = negatives
            .iter()
            .copied()
            .filter(|n| positives.iter().any(|p| covers(p, n)))
            .collect();

        let kept_negatives: Vec<&Pattern> = anchored
            .iter()
            .copied()
            .filter(|n| {
                !anchored
                    .iter()
                    .any(|m| m != n && covers(m, n) && !regranted_between(m, n, &positives))
            })
            .collect();

        let kept_positives: Vec<&Pattern> = positives
            .iter()
            .copied()
            .filter(|p| {
                let redundant = positives.iter().any(|q| q != p && covers(q, p));
                if !redundant {
                    return true;
                }
                // loose mode keeps a re-grant under an exclusion that is in effect
                !self.restrictive
                    && negatives
                        .iter()
                        .any(|n| covers(n, p) && !regranted_between(n, p, &positives))
            })
            .collect();

        let kept: Vec<Pattern> = working
            .iter()
            .filter(|g| kept_negatives.contains(g) || kept_positives.contains(g))
            .cloned()
            .collect();

        let mut intersections = Vec::new();
        for orphan in negatives.iter().copied().filter(|n| !anchored.contains(n)) {
            for granted in &positives {
                if covers(orphan, granted) {
                    continue;
                }
                let Some(narrowed) = intersect(orphan, granted, true) else {
                    continue;
                };
                let regranted = positives
                    .iter()
                    .any(|p| p != granted && covers(orphan, p) && covers(p, &narrowed));
                if !regranted {
                    intersections.push(narrowed);
                }
            }
        }

        Reduction {
            kept,
            intersections,
        }
    }
}

/// Whether a positive glob strictly between `broad` and `narrow` grants again
fn regranted_between(broad: &Pattern, narrow: &Pattern, positives: &[&Pattern]) -> bool {
    positives
        .iter()
        .any(|q| *q != narrow && covers(broad, q) && covers(q, narrow))
}

/// Exact duplicates collapse to their first occurrence
fn dedupe(globs: Vec<Pattern>) -> Vec<Pattern> {
    let mut seen: HashSet<Pattern> = HashSet::with_capacity(globs.len());
    globs
        .into_iter()
        .filter(|g| seen.insert(g.clone()))
        .collect()
}

/// All globs of one list must agree on array vs object root
pub(crate) fn ensure_integrity(globs: &[Pattern]) -> NotationResult<()> {
    let Some(first) = globs.first() else {
        return Ok(());
    };
    if globs
        .iter()
        .any(|g| g.is_array_pattern() != first.is_array_pattern())
    {
        let raw: Vec<&str> = globs.iter().map(Pattern::raw).collect();
        return Err(NotationError::integrity(&raw));
    }
    Ok(())
}

/// Parse every item of a glob list
///
/// # Errors
///
/// Returns the first `NotationError::Parse` encountered.
pub(crate) fn parse_all<S: AsRef<str>>(list: &[S]) -> NotationResult<Vec<Pattern>> {
    list.iter().map(|g| Pattern::parse(g.as_ref())).collect()
}

/// Normalize a glob list
///
/// # Errors
///
/// Returns `NotationError::Parse` if any item is not a valid glob and
/// `NotationError::Integrity` if array and object roots are mixed.
///
/// # Examples
/// ```
/// use notation_glob_engine::glob::normalize;
///
/// assert_eq!(normalize(&["*", "id", "!id"], false).unwrap(), vec!["*", "!id"]);
/// assert_eq!(normalize(&["car.*", "!*.model"], false).unwrap(), vec!["car", "!car.model"]);
/// ```
pub fn normalize<S: AsRef<str>>(list: &[S], restrictive: bool) -> NotationResult<Vec<String>> {
    let globs = parse_all(list)?;
    let normalized = Normalizer::new(restrictive).normalize(globs)?;
    Ok(normalized.iter().map(ToString::to_string).collect())
}
