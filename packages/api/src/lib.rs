//! Notation Glob Public API
//!
//! Include/exclude lists over dot/bracket property paths. Lists can be
//! normalized to their minimal form, merged, ordered and checked against
//! concrete paths.
//!
//! ```rust
//! use notation_glob::Glob;
//!
//! let list = Glob::list()
//!     .include("*")
//!     .include("car")
//!     .exclude("car.model")
//!     .build()
//!     .unwrap();
//! assert_eq!(list, vec!["*", "!car.model"]);
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

use std::cmp::Ordering;

pub mod builder;

pub use builder::core::GlobBuilder;

// Re-export important types from the engine package
pub use notation_glob_engine::config::{ConfigurationError, GlobConfig, Validator};
pub use notation_glob_engine::glob::{Normalizer, Note, Pattern, normalize, union};
pub use notation_glob_engine::{ErrorKind, NotationError, NotationResult};

/// Main entry point providing static glob operations
pub struct Glob;

impl Glob {
    /// Start a new loose-mode list
    ///
    /// Shorthand for `GlobBuilder::new()`
    #[must_use]
    pub fn list() -> GlobBuilder {
        GlobBuilder::new()
    }

    /// Parse a single glob
    ///
    /// # Errors
    ///
    /// Returns `NotationError::Parse` if `glob` is not valid.
    pub fn parse(glob: &str) -> NotationResult<Pattern> {
        Pattern::parse(glob)
    }

    /// Normalize a glob list
    ///
    /// # Errors
    ///
    /// Returns `NotationError::Parse` or `NotationError::Integrity`.
    pub fn normalize<S: AsRef<str>>(list: &[S], restrictive: bool) -> NotationResult<Vec<String>> {
        normalize(list, restrictive)
    }

    /// Union of two glob lists
    ///
    /// # Errors
    ///
    /// Returns `NotationError::Parse` or `NotationError::Integrity`.
    pub fn union<A: AsRef<str>, B: AsRef<str>>(
        a: &[A],
        b: &[B],
        restrictive: bool,
    ) -> NotationResult<Vec<String>> {
        union(a, b, restrictive)
    }

    /// Intersection of two globs, `None` if they share no path
    ///
    /// # Errors
    ///
    /// Returns `NotationError::Parse` if either glob is not valid.
    pub fn intersect(a: &str, b: &str, restrictive: bool) -> NotationResult<Option<String>> {
        notation_glob_engine::glob::intersect(a, b, restrictive)
    }

    /// Specificity comparison
    ///
    /// # Errors
    ///
    /// Returns `NotationError::Parse` if either glob is not valid.
    pub fn compare(a: &str, b: &str) -> NotationResult<Ordering> {
        notation_glob_engine::glob::compare(a, b)
    }

    /// Sort globs by specificity
    ///
    /// # Errors
    ///
    /// Returns `NotationError::Parse` if any glob is not valid.
    pub fn sort<S: AsRef<str>>(list: &[S]) -> NotationResult<Vec<String>> {
        notation_glob_engine::glob::sort(list)
    }

    /// Whether `a` covers every path `b` covers
    ///
    /// # Errors
    ///
    /// Returns `NotationError::Parse` if either glob is not valid.
    pub fn covers(a: &str, b: &str) -> NotationResult<bool> {
        Pattern::parse(a)?.covers_notation(b)
    }

    /// Test a concrete path against a glob
    ///
    /// # Errors
    ///
    /// Returns `NotationError::Parse` or `NotationError::InvalidNotation`.
    pub fn test(glob: &str, path: &str) -> NotationResult<bool> {
        notation_glob_engine::glob::test(glob, path)
    }
}
