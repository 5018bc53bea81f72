//! Notation string scanning and validation
//!
//! Splits a notation into tokens following the glob grammar: an optional `!`,
//! one leading note, then notes introduced by `.` (identifier or `*`) or
//! adjoining brackets (`[n]`, `[*]`, `['key']`).

use super::note::{Note, is_identifier_continue, is_identifier_start};
use crate::error::{NotationError, NotationResult};

/// A note together with the byte range it occupies in the scanned text
///
/// `start` includes the leading `.` separator when there is one.
#[derive(Debug, Clone)]
pub(crate) struct Token {
    pub(crate) note: Note,
    pub(crate) start: usize,
    pub(crate) end: usize,
}

/// Tokenize a notation body (without the negation prefix)
///
/// # Errors
///
/// Returns `NotationError::Parse` when the text does not follow the grammar or
/// any token fails [`Note::parse`].
pub(crate) fn tokenize(body: &str) -> NotationResult<Vec<Token>> {
    if body.is_empty() {
        return Err(NotationError::parse(body, "empty notation"));
    }

    let mut tokens: Vec<Token> = Vec::new();
    let mut position = 0;

    while position < body.len() {
        let rest = &body[position..];

        let (len, text) = if let Some(after_dot) = rest.strip_prefix('.') {
            if tokens.is_empty() {
                return Err(NotationError::parse(body, "notation cannot start with '.'"));
            }
            let plain = scan_plain(after_dot);
            if plain == 0 {
                return Err(NotationError::parse(
                    body,
                    format!("expected identifier or '*' after '.' at position {position}"),
                ));
            }
            (plain + 1, &after_dot[..plain])
        } else if rest.starts_with('[') {
            let len = scan_bracket(rest).ok_or_else(|| {
                NotationError::parse(body, format!("unbalanced bracket at position {position}"))
            })?;
            (len, &rest[..len])
        } else if tokens.is_empty() {
            let plain = scan_plain(rest);
            if plain == 0 {
                return Err(NotationError::parse(body, "invalid leading note"));
            }
            (plain, &rest[..plain])
        } else {
            return Err(NotationError::parse(
                body,
                format!("expected '.' or '[' at position {position}"),
            ));
        };

        let note = Note::parse(text).map_err(|e| match e {
            NotationError::Parse { reason, .. } => NotationError::parse(body, reason),
            other => other,
        })?;

        tokens.push(Token {
            note,
            start: position,
            end: position + len,
        });
        position += len;
    }

    Ok(tokens)
}

/// Whether `text` is a valid glob (negation and wildcards allowed)
#[must_use]
pub fn is_valid(text: &str) -> bool {
    tokenize(text.strip_prefix('!').unwrap_or(text)).is_ok()
}

/// Whether `text` is a valid concrete notation: no negation, no wildcards
#[must_use]
pub fn is_valid_notation(text: &str) -> bool {
    !text.starts_with('!')
        && tokenize(text).is_ok_and(|tokens| tokens.iter().all(|t| !t.note.is_wildcard()))
}

/// Split a glob into its notes
///
/// The negation prefix is ignored and trailing wildcards are kept. With
/// `normalize`, quoted keys that are plain identifiers become [`Note::Key`].
///
/// # Errors
///
/// Returns `NotationError::Parse` if `text` is not a valid glob.
pub fn split(text: &str, normalize: bool) -> NotationResult<Vec<Note>> {
    let tokens = tokenize(text.strip_prefix('!').unwrap_or(text))?;
    Ok(tokens
        .into_iter()
        .map(|t| if normalize { t.note.normalized() } else { t.note })
        .collect())
}

/// Render notes back into notation text
#[must_use]
pub fn join(notes: &[Note]) -> String {
    let mut out = String::new();
    for (i, note) in notes.iter().enumerate() {
        if i > 0 && !note.is_bracketed() {
            out.push('.');
        }
        out.push_str(&note.to_string());
    }
    out
}

/// Byte length of a leading `*` or identifier, 0 if neither
fn scan_plain(text: &str) -> usize {
    if text.starts_with('*') {
        return 1;
    }
    let mut chars = text.char_indices();
    match chars.next() {
        Some((_, first)) if is_identifier_start(first) => chars
            .find(|&(_, ch)| !is_identifier_continue(ch))
            .map_or(text.len(), |(idx, _)| idx),
        _ => 0,
    }
}

/// Byte length of a bracket group starting at `text[0] == '['`
///
/// Quoted content may contain `]`, `.` and escaped quotes.
fn scan_bracket(text: &str) -> Option<usize> {
    let mut chars = text.char_indices().skip(1).peekable();

    match chars.peek() {
        Some(&(_, quote)) if quote == '\'' || quote == '"' => {
            chars.next();
            let mut escaped = false;
            for (_, ch) in chars.by_ref() {
                if escaped {
                    escaped = false;
                } else if ch == '\\' {
                    escaped = true;
                } else if ch == quote {
                    break;
                }
            }
            match chars.next() {
                Some((idx, ']')) => Some(idx + 1),
                _ => None,
            }
        }
        _ => chars
            .find(|&(_, ch)| ch == ']' || ch == '[')
            .and_then(|(idx, ch)| (ch == ']').then_some(idx + 1)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizes_mixed_notation() {
        let notes = split("a.b[0]['c.d'].*[*]", false).unwrap();
        assert_eq!(
            notes,
            vec![
                Note::Key("a".into()),
                Note::Key("b".into()),
                Note::Index(0),
                Note::BracketKey("c.d".into()),
                Note::Wildcard,
                Note::ArrayWildcard,
            ]
        );
    }

    #[test]
    fn token_spans_include_separator() {
        let tokens = tokenize("ab.cd[1]").unwrap();
        let spans: Vec<_> = tokens.iter().map(|t| (t.start, t.end)).collect();
        assert_eq!(spans, vec![(0, 2), (2, 5), (5, 8)]);
    }

    #[test]
    fn validates_grammar() {
        for valid in ["*", "[*]", "!x.y", "x[0][*]", "[0].x", "x['a b'].*", "$el._x1"] {
            assert!(is_valid(valid), "{valid} should be valid");
        }
        for invalid in ["", "!", ".x", "x.", "x..y", "x.[0]", "x[", "x]", "x y", "*x", "x*", "!!x", "x.['a']"] {
            assert!(!is_valid(invalid), "{invalid} should be invalid");
        }
    }

    #[test]
    fn concrete_notations_exclude_magic() {
        assert!(is_valid_notation("a.b[1]"));
        assert!(!is_valid_notation("a.*"));
        assert!(!is_valid_notation("!a"));
        assert!(!is_valid_notation("a[*]"));
    }

    #[test]
    fn join_inverts_split() {
        for text in ["a.b[0]", "*.x[*]", "[1]['a b'].c"] {
            assert_eq!(join(&split(text, false).unwrap()), text);
        }
    }
}
