//! Core error constructor functions
//!
//! Factory methods for notation errors with the offending input attached.

use super::types::NotationError;

impl NotationError {
    /// Creates a parse error for a malformed pattern or note token
    ///
    /// # Arguments
    /// * `input` - The offending pattern or token
    /// * `reason` - Why it was rejected
    ///
    /// # Examples
    /// ```
    /// use notation_glob_engine::error::{ErrorKind, NotationError};
    ///
    /// let error = NotationError::parse("x[", "unbalanced bracket");
    /// assert_eq!(error.kind(), ErrorKind::Parse);
    /// ```
    pub fn parse(input: impl Into<String>, reason: impl Into<String>) -> Self {
        NotationError::Parse {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Creates an error for a concrete-path argument that is not concrete
    pub fn invalid_notation(path: impl Into<String>) -> Self {
        NotationError::InvalidNotation(path.into())
    }

    /// Creates an integrity error for a list mixing array and object roots
    ///
    /// The list is rendered into the message so the offending configuration
    /// can be located.
    pub fn integrity<S: AsRef<str>>(list: &[S]) -> Self {
        let rendered = list
            .iter()
            .map(|item| format!("'{}'", item.as_ref()))
            .collect::<Vec<_>>()
            .join(", ");
        NotationError::Integrity(format!(
            "cannot mix object and array notations for the root level: [{rendered}]"
        ))
    }
}
