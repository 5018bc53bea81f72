//! Notation Error Types
//!
//! Core error types raised while parsing patterns and reducing pattern lists.

/// Classification of notation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed pattern or note token
    Parse,
    /// A concrete path argument carried wildcards or negation
    InvalidNotation,
    /// Array-root and object-root patterns mixed in one list
    Integrity,
}

/// Main notation error type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    #[error("Invalid pattern '{input}': {reason}")]
    Parse { input: String, reason: String },

    #[error("Invalid notation '{0}': expected a concrete path without wildcards or negation")]
    InvalidNotation(String),

    #[error("Integrity failed: {0}")]
    Integrity(String),
}

/// Result type for notation operations
pub type NotationResult<T> = Result<T, NotationError>;

impl NotationError {
    /// Classify this error
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            NotationError::Parse { .. } => ErrorKind::Parse,
            NotationError::InvalidNotation(_) => ErrorKind::InvalidNotation,
            NotationError::Integrity(_) => ErrorKind::Integrity,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_parse(&self) -> bool {
        self.kind() == ErrorKind::Parse
    }

    #[inline]
    #[must_use]
    pub fn is_integrity(&self) -> bool {
        self.kind() == ErrorKind::Integrity
    }
}
