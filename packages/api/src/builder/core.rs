//! Core `GlobBuilder` structure and list operations
//!
//! Collects include and exclude rules in order and hands them to the engine
//! for normalization, union and path filtering.

use notation_glob_engine::config::{ConfigResult, GlobConfig};
use notation_glob_engine::glob::{self, Normalizer, Pattern};
use notation_glob_engine::NotationResult;

/// Fluent builder for glob lists
///
/// Rules are kept in the order they were added. Nothing is parsed until a
/// terminal method (`build`, `union_with`, `allows`) runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobBuilder {
    /// Rules as written, exclusions carry their `!`
    pub(crate) patterns: Vec<String>,
    /// Exclusions are absolute when set
    pub(crate) restrictive: bool,
    /// Debug logging enabled flag
    pub(crate) debug_enabled: bool,
}

impl GlobBuilder {
    /// Start an empty loose-mode list
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a loaded configuration
    #[must_use]
    pub fn from_config(config: GlobConfig) -> Self {
        Self {
            patterns: config.patterns,
            restrictive: config.restrictive,
            debug_enabled: false,
        }
    }

    /// Start from a JSON configuration document
    ///
    /// # Errors
    ///
    /// Returns the `ConfigurationError` raised while loading or validating.
    pub fn from_json(document: &str) -> ConfigResult<Self> {
        GlobConfig::from_json(document).map(Self::from_config)
    }

    /// Add an inclusion rule
    ///
    /// # Arguments
    /// * `pattern` - Glob to include, e.g. `user.*`
    ///
    /// # Returns
    /// `Self` for method chaining
    #[must_use]
    pub fn include(mut self, pattern: impl Into<String>) -> Self {
        self.patterns.push(pattern.into());
        self
    }

    /// Add an exclusion rule
    ///
    /// The `!` prefix is added unless `pattern` already carries it.
    #[must_use]
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        if pattern.starts_with('!') {
            self.patterns.push(pattern);
        } else {
            self.patterns.push(format!("!{pattern}"));
        }
        self
    }

    /// Append rules as written
    #[must_use]
    pub fn patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.patterns.extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Exclusions remove every path they cover
    #[must_use]
    pub fn restrictive(mut self) -> Self {
        self.restrictive = true;
        self
    }

    /// Exclusions yield to more specific inclusions
    #[must_use]
    pub fn loose(mut self) -> Self {
        self.restrictive = false;
        self
    }

    /// Enable debug logging for list operations
    #[must_use]
    pub fn debug(mut self) -> Self {
        self.debug_enabled = true;
        self
    }

    /// Rules added so far, in order
    #[must_use]
    pub fn rules(&self) -> &[String] {
        &self.patterns
    }

    #[must_use]
    pub fn is_restrictive(&self) -> bool {
        self.restrictive
    }

    /// Snapshot as a configuration
    #[must_use]
    pub fn to_config(&self) -> GlobConfig {
        GlobConfig::new(self.patterns.iter().cloned()).with_restrictive(self.restrictive)
    }

    /// Normalize the list
    ///
    /// # Errors
    ///
    /// Returns `NotationError::Parse` for invalid rules and
    /// `NotationError::Integrity` for mixed array and object roots.
    pub fn build(&self) -> NotationResult<Vec<String>> {
        let result = glob::normalize(&self.patterns, self.restrictive);
        self.trace("build", &result);
        result
    }

    /// Union with another builder's list, in this builder's mode
    ///
    /// # Errors
    ///
    /// Returns `NotationError::Parse` for invalid rules on either side and
    /// `NotationError::Integrity` for mixed roots.
    pub fn union_with(&self, other: &GlobBuilder) -> NotationResult<Vec<String>> {
        let result = glob::union(&self.patterns, &other.patterns, self.restrictive);
        self.trace("union", &result);
        result
    }

    /// Whether the list grants a concrete path
    ///
    /// Rules of the normalized list are applied in order and the last rule
    /// that matches decides. A path no rule matches is not granted.
    ///
    /// # Errors
    ///
    /// Returns `NotationError::Parse` for a malformed `path`,
    /// `NotationError::InvalidNotation` if it carries wildcards or negation,
    /// and the `build` errors for an invalid list.
    pub fn allows(&self, path: &str) -> NotationResult<bool> {
        glob::concrete_notes(path)?;
        let parsed = self
            .patterns
            .iter()
            .map(|p| Pattern::parse(p))
            .collect::<NotationResult<Vec<_>>>()?;
        let rules = Normalizer::new(self.restrictive).normalize(parsed)?;

        let mut granted = false;
        for rule in &rules {
            if rule.test(path)? {
                granted = !rule.is_negated();
            }
        }
        if self.debug_enabled {
            tracing::info!(path, granted, "Path checked against glob list");
        }
        Ok(granted)
    }

    fn trace(&self, operation: &str, result: &NotationResult<Vec<String>>) {
        if !self.debug_enabled {
            return;
        }
        match result {
            Ok(list) => tracing::info!(operation, rules = self.patterns.len(), result = ?list, "Glob list reduced"),
            Err(e) => log::warn!("Glob list {} failed: {}", operation, e),
        }
    }
}
