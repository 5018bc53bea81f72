//! Notation glob algebra
//!
//! Globs address paths in nested data with dot and bracket notation:
//!
//! ```text
//! user.name          plain keys
//! items[0].id        array index
//! meta['x-id']       quoted bracket key
//! user.*  [*].id     object and array wildcards
//! !user.password     negation (exclusion)
//! ```
//!
//! A glob list reads as successive include/exclude rules. [`normalize`]
//! reduces a list to its minimal equivalent, [`union`] merges two lists and
//! [`sort`] orders a list so that later rules refine earlier ones.
//!
//! # Examples
//!
//! ```rust
//! use notation_glob_engine::glob::{self, Pattern};
//!
//! let list = glob::normalize(&["*", "car", "!car.model"], false).unwrap();
//! assert_eq!(list, vec!["*", "!car.model"]);
//!
//! let glob = Pattern::parse("car.*").unwrap();
//! assert!(glob.test("car.model").unwrap());
//! ```

pub mod coverage;
pub mod intersection;
mod matcher;
pub mod normalize;
pub mod note;
pub mod ordering;
pub mod pattern;
pub mod tokenizer;
pub mod union;

use std::cmp::Ordering;

pub use coverage::{covers, matches};
pub use matcher::concrete_notes;
pub use normalize::{Normalizer, normalize};
pub use note::Note;
pub use ordering::sort_patterns;
pub use pattern::Pattern;
pub use tokenizer::{is_valid_notation, join, split};
pub use union::{union, union_patterns};

use crate::error::NotationResult;

/// Intersection of two glob strings
///
/// # Errors
///
/// Returns `NotationError::Parse` if either argument is not a valid glob.
///
/// # Examples
/// ```
/// use notation_glob_engine::glob::intersect;
///
/// assert_eq!(intersect("x.*.z", "*.y", false).unwrap().as_deref(), Some("x.y.z"));
/// assert_eq!(intersect("x.y", "*.b", false).unwrap(), None);
/// ```
pub fn intersect(a: &str, b: &str, restrictive: bool) -> NotationResult<Option<String>> {
    let a = Pattern::parse(a)?;
    let b = Pattern::parse(b)?;
    Ok(intersection::intersect(&a, &b, restrictive).map(|glob| glob.to_string()))
}

/// Specificity comparison of two glob strings, see [`ordering::compare`]
///
/// # Errors
///
/// Returns `NotationError::Parse` if either argument is not a valid glob.
pub fn compare(a: &str, b: &str) -> NotationResult<Ordering> {
    Ok(ordering::compare(&Pattern::parse(a)?, &Pattern::parse(b)?))
}

/// Sort glob strings by specificity
///
/// The original strings are returned reordered; equal globs keep their
/// relative order.
///
/// # Errors
///
/// Returns `NotationError::Parse` if any item is not a valid glob.
pub fn sort<S: AsRef<str>>(list: &[S]) -> NotationResult<Vec<String>> {
    let mut parsed: Vec<(Pattern, &str)> = list
        .iter()
        .map(|item| Pattern::parse(item.as_ref()).map(|glob| (glob, item.as_ref())))
        .collect::<NotationResult<_>>()?;
    parsed.sort_by(|(a, _), (b, _)| ordering::compare(a, b));
    Ok(parsed.into_iter().map(|(_, raw)| raw.to_string()).collect())
}

/// Test a concrete path against a glob string
///
/// # Errors
///
/// Returns `NotationError::Parse` for an invalid glob or path and
/// `NotationError::InvalidNotation` if `path` is not concrete.
pub fn test(glob: &str, path: &str) -> NotationResult<bool> {
    Pattern::parse(glob)?.test(path)
}
