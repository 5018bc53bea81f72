//! Parsed notation globs
//!
//! A [`Pattern`] is an immutable, parsed form of one glob string. Derived
//! fields are computed once at construction, except the regular-expression
//! matcher which is compiled on first use and then reused.

use std::fmt;
use std::hash::{Hash, Hasher};

use once_cell::sync::OnceCell;
use regex::Regex;

use super::coverage;
use super::intersection;
use super::matcher;
use super::note::Note;
use super::tokenizer::{self, Token};
use crate::error::{NotationError, NotationResult};

/// A parsed notation glob, e.g. `user.*`, `!user.password`, `[*].id`
#[derive(Debug, Clone)]
pub struct Pattern {
    raw: String,
    negated: bool,
    canonical: String,
    notes: Vec<Note>,
    parent: Option<String>,
    matcher: OnceCell<Regex>,
}

impl Pattern {
    /// Parse a glob string
    ///
    /// # Errors
    ///
    /// Returns `NotationError::Parse` if `raw` does not follow the glob grammar.
    ///
    /// # Examples
    /// ```
    /// use notation_glob_engine::glob::Pattern;
    ///
    /// let glob = Pattern::parse("user.*.*").unwrap();
    /// assert_eq!(glob.canonical(), "user");
    ///
    /// let glob = Pattern::parse("!user.*").unwrap();
    /// assert_eq!(glob.canonical(), "user.*");
    /// assert!(glob.is_negated());
    /// ```
    pub fn parse(raw: &str) -> NotationResult<Self> {
        let (negated, body) = match raw.strip_prefix('!') {
            Some(body) => (true, body),
            None => (false, raw),
        };

        let mut tokens = tokenizer::tokenize(body).map_err(|e| match e {
            NotationError::Parse { reason, .. } => NotationError::parse(raw, reason),
            other => other,
        })?;

        if !negated {
            strip_trailing_wildcards(&mut tokens);
        }

        let canonical_end = tokens.last().map_or(0, |t| t.end);
        let parent = (tokens.len() > 1).then(|| body[..tokens[tokens.len() - 1].start].to_string());

        Ok(Self {
            raw: raw.to_string(),
            negated,
            canonical: body[..canonical_end].to_string(),
            notes: tokens.into_iter().map(|t| t.note).collect(),
            parent,
            matcher: OnceCell::new(),
        })
    }

    /// Build a pattern directly from notes
    ///
    /// Notes are rendered with [`tokenizer::join`]; trailing wildcards are
    /// stripped unless `negated`. An empty note list yields `None`.
    #[must_use]
    pub fn from_notes(mut notes: Vec<Note>, negated: bool) -> Option<Self> {
        if notes.is_empty() {
            return None;
        }
        if !negated {
            while notes.len() > 1 && notes.last().is_some_and(Note::is_wildcard) {
                notes.pop();
            }
        }

        let canonical = tokenizer::join(&notes);
        let parent = (notes.len() > 1).then(|| tokenizer::join(&notes[..notes.len() - 1]));
        let raw = if negated {
            format!("!{canonical}")
        } else {
            canonical.clone()
        };

        Some(Self {
            raw,
            negated,
            canonical,
            notes,
            parent,
            matcher: OnceCell::new(),
        })
    }

    /// Whether `raw` is a valid glob
    #[inline]
    #[must_use]
    pub fn is_valid(raw: &str) -> bool {
        tokenizer::is_valid(raw)
    }

    /// Whether `raw` is valid and expresses more than one exact path
    ///
    /// True for negated globs and for globs that keep a wildcard note after
    /// redundant trailing wildcards are stripped (`x.*` is just `x`).
    #[must_use]
    pub fn has_magic(raw: &str) -> bool {
        Self::parse(raw).is_ok_and(|glob| glob.negated || glob.wildcard_count() > 0)
    }

    /// Split a glob into its notes, see [`tokenizer::split`]
    ///
    /// # Errors
    ///
    /// Returns `NotationError::Parse` if `raw` is not a valid glob.
    #[inline]
    pub fn split(raw: &str, normalize: bool) -> NotationResult<Vec<Note>> {
        tokenizer::split(raw, normalize)
    }

    /// The string as given
    #[inline]
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    #[inline]
    #[must_use]
    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// Negation-stripped, trailing-wildcard-stripped text
    #[inline]
    #[must_use]
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    #[inline]
    #[must_use]
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Number of notes
    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.notes.len()
    }

    /// Canonical text without the last note, `None` for single-note globs
    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    /// Whether the root note addresses an array (`[0]...`, `[*]...`)
    #[inline]
    #[must_use]
    pub fn is_array_pattern(&self) -> bool {
        self.notes.first().is_some_and(Note::is_array)
    }

    /// Number of `*` and `[*]` notes
    #[inline]
    #[must_use]
    pub fn wildcard_count(&self) -> usize {
        self.notes.iter().filter(|n| n.is_wildcard()).count()
    }

    /// `!*` or `![*]`: excludes everything
    #[inline]
    #[must_use]
    pub fn is_negate_all(&self) -> bool {
        self.negated && self.notes.len() == 1 && self.notes[0].is_wildcard()
    }

    /// The same glob without negation
    #[must_use]
    pub fn to_positive(&self) -> Pattern {
        if !self.negated {
            return self.clone();
        }
        // a positive form drops redundant trailing wildcards again
        Pattern::from_notes(self.notes.clone(), false).unwrap_or_else(|| self.clone())
    }

    /// Whether this glob's match set contains `other`'s, see [`coverage::covers`]
    #[inline]
    #[must_use]
    pub fn covers(&self, other: &Pattern) -> bool {
        coverage::covers(self, other)
    }

    /// [`Pattern::covers`] against a glob string
    ///
    /// # Errors
    ///
    /// Returns `NotationError::Parse` if `other` is not a valid glob.
    pub fn covers_notation(&self, other: &str) -> NotationResult<bool> {
        Ok(coverage::covers(self, &Pattern::parse(other)?))
    }

    /// Symmetric relaxation of coverage, see [`coverage::matches`]
    #[inline]
    #[must_use]
    pub fn matches(&self, other: &Pattern) -> bool {
        coverage::matches(self, other)
    }

    /// Test a concrete path against this glob, ignoring negation
    ///
    /// # Errors
    ///
    /// Returns `NotationError::InvalidNotation` if `path` carries wildcards or
    /// negation, `NotationError::Parse` if it is not a valid notation at all.
    ///
    /// # Examples
    /// ```
    /// use notation_glob_engine::glob::Pattern;
    ///
    /// let glob = Pattern::parse("!*.model").unwrap();
    /// assert!(glob.test("car.model").unwrap());
    /// assert!(glob.test("car['model'].year").unwrap());
    /// assert!(!glob.test("car").unwrap());
    /// ```
    pub fn test(&self, path: &str) -> NotationResult<bool> {
        let notes = matcher::concrete_notes(path)?;
        Ok(self.matcher()?.is_match(&matcher::render(&notes)))
    }

    /// Compiled matcher, built on first access
    ///
    /// # Errors
    ///
    /// Returns `NotationError::Parse` if the expression cannot be compiled.
    pub fn matcher(&self) -> NotationResult<&Regex> {
        self.matcher.get_or_try_init(|| matcher::compile(self))
    }

    /// Most specific glob consistent with both, see [`intersection::intersect`]
    #[inline]
    #[must_use]
    pub fn intersect(&self, other: &Pattern, restrictive: bool) -> Option<Pattern> {
        intersection::intersect(self, other, restrictive)
    }
}

/// Drop trailing `*` / `[*]` tokens, keeping at least one
fn strip_trailing_wildcards(tokens: &mut Vec<Token>) {
    while tokens.len() > 1 && tokens.last().is_some_and(|t| t.note.is_wildcard()) {
        tokens.pop();
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.negated == other.negated && self.notes == other.notes
    }
}

impl Eq for Pattern {}

impl Hash for Pattern {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.negated.hash(state);
        self.notes.hash(state);
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            write!(f, "!{}", self.canonical)
        } else {
            write!(f, "{}", self.canonical)
        }
    }
}

impl std::str::FromStr for Pattern {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pattern::parse(s)
    }
}
