//! Configuration validation
//!
//! Pattern lists loaded from configuration are checked up front so that a bad
//! entry is reported with its position instead of failing deep inside a
//! normalization pass.

use crate::error::NotationError;
use crate::glob::Pattern;
use crate::glob::normalize::ensure_integrity;

/// Configuration validation result type
pub type ConfigResult<T> = Result<T, ConfigurationError>;

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Invalid pattern at index {index}: {source}")]
    InvalidPattern {
        index: usize,
        #[source]
        source: NotationError,
    },

    #[error("Pattern list failed integrity check: {0}")]
    Integrity(NotationError),

    #[error("Malformed configuration document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration validation trait
pub trait Validator {
    /// Validates the configuration settings
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` variant if any validation fails:
    /// - `InvalidPattern` - if an entry does not parse as a glob
    /// - `Integrity` - if array-root and object-root entries are mixed
    fn validate(&self) -> ConfigResult<()>;
}

/// Common pattern list validation utilities
pub struct PatternValidator;

impl PatternValidator {
    /// Parse every entry, reporting the first failure with its index
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidPattern` for the first entry that
    /// is not a valid glob.
    pub fn parse_patterns<S: AsRef<str>>(patterns: &[S]) -> ConfigResult<Vec<Pattern>> {
        patterns
            .iter()
            .enumerate()
            .map(|(index, raw)| {
                Pattern::parse(raw.as_ref())
                    .map_err(|source| ConfigurationError::InvalidPattern { index, source })
            })
            .collect()
    }

    /// Validate a full pattern list
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidPattern` for unparsable entries and
    /// `ConfigurationError::Integrity` for mixed roots.
    pub fn validate_patterns<S: AsRef<str>>(patterns: &[S]) -> ConfigResult<()> {
        let parsed = Self::parse_patterns(patterns)?;
        ensure_integrity(&parsed).map_err(ConfigurationError::Integrity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_index_of_bad_pattern() {
        let error = PatternValidator::validate_patterns(&["a", "b..c"]).unwrap_err();
        assert!(matches!(
            error,
            ConfigurationError::InvalidPattern { index: 1, .. }
        ));
    }

    #[test]
    fn rejects_mixed_roots() {
        let error = PatternValidator::validate_patterns(&["x.y", "[0].z"]).unwrap_err();
        assert!(matches!(error, ConfigurationError::Integrity(_)));
    }
}
