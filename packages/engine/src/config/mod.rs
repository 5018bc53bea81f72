//! Glob list configuration
//!
//! A [`GlobConfig`] carries a pattern list and the negation mode it is read
//! in. It can be loaded from JSON, validated and normalized.

use serde::{Deserialize, Serialize};

pub mod validation;

pub use validation::{ConfigResult, ConfigurationError, PatternValidator, Validator};

use crate::glob::Normalizer;

/// Pattern list configuration
///
/// ```json
/// { "patterns": ["*", "!password"], "restrictive": false }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobConfig {
    /// Globs in the order they were configured
    pub patterns: Vec<String>,
    /// Whether exclusions are absolute
    pub restrictive: bool,
}

impl GlobConfig {
    /// Loose-mode configuration over `patterns`
    #[must_use]
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: patterns.into_iter().map(Into::into).collect(),
            restrictive: false,
        }
    }

    /// Switch the negation mode
    #[must_use]
    pub fn with_restrictive(mut self, restrictive: bool) -> Self {
        self.restrictive = restrictive;
        self
    }

    /// Parse a JSON configuration document and validate it
    ///
    /// Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::Json` for malformed documents and the
    /// [`Validator`] errors for invalid pattern lists.
    pub fn from_json(document: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(document)?;
        config.validate()?;
        tracing::debug!(
            patterns = config.patterns.len(),
            restrictive = config.restrictive,
            "Loaded glob configuration"
        );
        Ok(config)
    }

    /// Serialize back into a JSON document
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::Json` if serialization fails.
    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// The configured list normalized in the configured mode
    ///
    /// # Errors
    ///
    /// Returns the [`Validator`] errors for invalid pattern lists.
    pub fn normalized(&self) -> ConfigResult<Vec<String>> {
        let parsed = PatternValidator::parse_patterns(&self.patterns)?;
        let normalized = Normalizer::new(self.restrictive)
            .normalize(parsed)
            .map_err(ConfigurationError::Integrity)?;
        Ok(normalized.iter().map(ToString::to_string).collect())
    }
}

impl Validator for GlobConfig {
    fn validate(&self) -> ConfigResult<()> {
        PatternValidator::validate_patterns(&self.patterns)
    }
}
