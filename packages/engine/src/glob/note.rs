//! Atomic path segments
//!
//! A [`Note`] is the smallest addressable unit of a notation: a plain key, an
//! array index, a quoted bracket key, or one of the two wildcard forms.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{NotationError, NotationResult};

/// Individual segment of a notation
#[derive(Debug, Clone)]
pub enum Note {
    /// Identifier-like property name (`name`)
    Key(String),
    /// Array position (`[3]`)
    Index(u32),
    /// Quoted property name with arbitrary characters (`['first name']`)
    BracketKey(String),
    /// Any single non-array key (`*`)
    Wildcard,
    /// Any single array index (`[*]`)
    ArrayWildcard,
}

impl Note {
    /// Parse a single token into a note
    ///
    /// The token must not carry the leading `.` separator.
    ///
    /// # Errors
    ///
    /// Returns `NotationError::Parse` for unbalanced brackets, characters that
    /// are not valid outside brackets, an empty bracket or an index that does
    /// not fit in `u32`.
    pub fn parse(token: &str) -> NotationResult<Note> {
        match token {
            "*" => return Ok(Note::Wildcard),
            "[*]" => return Ok(Note::ArrayWildcard),
            "" => return Err(NotationError::parse(token, "empty note")),
            _ => {}
        }

        if is_identifier(token) {
            return Ok(Note::Key(token.to_string()));
        }

        let Some(inner) = token.strip_prefix('[').and_then(|t| t.strip_suffix(']')) else {
            return if token.contains(['[', ']']) {
                Err(NotationError::parse(token, "unbalanced bracket"))
            } else {
                Err(NotationError::parse(token, "invalid identifier"))
            };
        };

        if inner.is_empty() {
            return Err(NotationError::parse(token, "empty bracket"));
        }

        if inner.bytes().all(|b| b.is_ascii_digit()) {
            return inner
                .parse::<u32>()
                .map(Note::Index)
                .map_err(|_| NotationError::parse(token, "array index out of range"));
        }

        match inner.chars().next() {
            Some(quote @ ('\'' | '"')) => parse_quoted(token, inner, quote).map(Note::BracketKey),
            _ => Err(NotationError::parse(
                token,
                "bracket must hold an index, [*] or a quoted key",
            )),
        }
    }

    /// Whether this note is `*` or `[*]`
    #[inline]
    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Note::Wildcard | Note::ArrayWildcard)
    }

    /// Whether this note addresses an array position (`[n]` or `[*]`)
    #[inline]
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Note::Index(_) | Note::ArrayWildcard)
    }

    /// Property name for key notes, regardless of how it was written
    #[inline]
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        match self {
            Note::Key(key) | Note::BracketKey(key) => Some(key),
            _ => None,
        }
    }

    /// Key notes in their plain form where possible
    ///
    /// `['name']` becomes `name`; keys that are not identifiers stay bracketed.
    #[must_use]
    pub fn normalized(&self) -> Note {
        match self {
            Note::BracketKey(key) if is_identifier(key) => Note::Key(key.clone()),
            other => other.clone(),
        }
    }

    /// Whether this note's match set contains `other`'s
    ///
    /// A wildcard covers every note of its own kind (object or array),
    /// including the wildcard itself. A concrete note covers only an equal
    /// concrete note.
    #[must_use]
    pub fn covers(&self, other: &Note) -> bool {
        match self {
            Note::Wildcard => !other.is_array(),
            Note::ArrayWildcard => other.is_array(),
            _ => !other.is_wildcard() && self == other,
        }
    }

    /// Symmetric relaxation of [`Note::covers`]
    #[inline]
    #[must_use]
    pub fn matches(&self, other: &Note) -> bool {
        self.covers(other) || other.covers(self)
    }

    /// Whether this note is written with brackets and adjoins its predecessor
    #[inline]
    pub(crate) fn is_bracketed(&self) -> bool {
        !matches!(self, Note::Key(_) | Note::Wildcard)
    }
}

impl PartialEq for Note {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Note::Index(a), Note::Index(b)) => a == b,
            (Note::Wildcard, Note::Wildcard) | (Note::ArrayWildcard, Note::ArrayWildcard) => true,
            _ => match (self.key(), other.key()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
        }
    }
}

impl Eq for Note {}

impl Hash for Note {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Note::Key(key) | Note::BracketKey(key) => {
                0u8.hash(state);
                key.hash(state);
            }
            Note::Index(index) => {
                1u8.hash(state);
                index.hash(state);
            }
            Note::Wildcard => 2u8.hash(state),
            Note::ArrayWildcard => 3u8.hash(state),
        }
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Note::Key(key) => write!(f, "{key}"),
            Note::Index(index) => write!(f, "[{index}]"),
            Note::BracketKey(key) => write!(f, "['{}']", escape(key)),
            Note::Wildcard => write!(f, "*"),
            Note::ArrayWildcard => write!(f, "[*]"),
        }
    }
}

/// Whether `text` is a plain identifier (`[A-Za-z_$][A-Za-z0-9_$]*`)
pub(crate) fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if is_identifier_start(first) => chars.all(is_identifier_continue),
        _ => false,
    }
}

#[inline]
pub(crate) fn is_identifier_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_' || ch == '$'
}

#[inline]
pub(crate) fn is_identifier_continue(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ch == '$'
}

/// Unquote the content of `['...']` / `["..."]`, resolving backslash escapes
fn parse_quoted(token: &str, inner: &str, quote: char) -> NotationResult<String> {
    let body = inner
        .strip_prefix(quote)
        .and_then(|rest| rest.strip_suffix(quote))
        .ok_or_else(|| NotationError::parse(token, "unterminated string literal"))?;

    let mut key = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            match chars.next() {
                Some(escaped) => key.push(escaped),
                None => return Err(NotationError::parse(token, "unterminated escape sequence")),
            }
        } else if ch == quote {
            return Err(NotationError::parse(token, "unescaped quote inside key"));
        } else {
            key.push(ch);
        }
    }
    Ok(key)
}

/// Escape quotes and backslashes for single-quoted rendering
pub(crate) fn escape(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    for ch in key.chars() {
        if ch == '\'' || ch == '\\' {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}
