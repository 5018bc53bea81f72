//! Regular-expression matchers for testing concrete paths
//!
//! A glob is compiled into an anchored expression over the normalized
//! rendering of a path (plain keys where possible, single-quoted brackets
//! otherwise). The expression accepts the glob's own depth and anything
//! deeper, mirroring prefix coverage.

use regex::Regex;

use super::note::Note;
use super::pattern::Pattern;
use super::tokenizer;
use crate::error::{NotationError, NotationResult};

/// Any plain key or single-quoted bracket key, as produced by [`render`]
const ANY_KEY: &str = r"(?:[A-Za-z_$][A-Za-z0-9_$]*|\['(?:\\.|[^'\\])*'\])";
const ANY_DOTTED_KEY: &str = r"(?:\.[A-Za-z_$][A-Za-z0-9_$]*|\['(?:\\.|[^'\\])*'\])";
const ANY_INDEX: &str = r"\[\d+\]";
/// Deeper paths continue with a separator
const DESCENDANTS: &str = r"(?:[.\[].*)?";

/// Parse and validate a concrete path
///
/// # Errors
///
/// Returns `NotationError::InvalidNotation` for negated paths or paths with
/// wildcard notes, `NotationError::Parse` for malformed paths.
pub fn concrete_notes(path: &str) -> NotationResult<Vec<Note>> {
    if path.starts_with('!') {
        return Err(NotationError::invalid_notation(path));
    }
    let notes = tokenizer::split(path, true)?;
    if notes.iter().any(Note::is_wildcard) {
        return Err(NotationError::invalid_notation(path));
    }
    Ok(notes)
}

/// Render notes in the normalized form matchers are compiled against
pub(crate) fn render(notes: &[Note]) -> String {
    let normalized: Vec<Note> = notes.iter().map(Note::normalized).collect();
    tokenizer::join(&normalized)
}

/// Compile the matcher for a glob
pub(crate) fn compile(glob: &Pattern) -> NotationResult<Regex> {
    let mut source = String::from("(?s)^");
    for (i, note) in glob.notes().iter().enumerate() {
        match note.normalized() {
            Note::Wildcard if i == 0 => source.push_str(ANY_KEY),
            Note::Wildcard => source.push_str(ANY_DOTTED_KEY),
            Note::ArrayWildcard => source.push_str(ANY_INDEX),
            Note::Key(key) => {
                if i > 0 {
                    source.push_str(r"\.");
                }
                source.push_str(&regex::escape(&key));
            }
            concrete => source.push_str(&regex::escape(&concrete.to_string())),
        }
    }
    source.push_str(DESCENDANTS);
    source.push('$');

    log::trace!("Compiling matcher for '{}': {}", glob, source);

    Regex::new(&source).map_err(|e| {
        log::error!("Matcher compilation failed for '{}': {}", glob, e);
        NotationError::parse(glob.raw(), format!("matcher compilation failed: {e}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matcher_is_memoized() {
        let glob = Pattern::parse("a.*").unwrap();
        let first = glob.matcher().unwrap() as *const Regex;
        let second = glob.matcher().unwrap() as *const Regex;
        assert_eq!(first, second);
    }

    #[test]
    fn renders_normalized_keys() {
        let notes = tokenizer::split("a['b']['c d'][2]", false).unwrap();
        assert_eq!(render(&notes), "a.b['c d'][2]");
    }

    #[test]
    fn rejects_non_concrete_paths() {
        assert!(matches!(
            concrete_notes("a.*"),
            Err(NotationError::InvalidNotation(_))
        ));
        assert!(matches!(
            concrete_notes("!a"),
            Err(NotationError::InvalidNotation(_))
        ));
        assert!(matches!(concrete_notes("a..b"), Err(NotationError::Parse { .. })));
    }
}
