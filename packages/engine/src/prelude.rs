//! Notation Glob Prelude
//!
//! The types and entry points most callers need.

// Parsed globs and their segments
pub use crate::glob::{Note, Pattern};

// List operations
pub use crate::glob::{Normalizer, compare, intersect, normalize, sort, union};

// Pairwise relations
pub use crate::glob::{covers, matches};

// Error types
pub use crate::error::{ErrorKind, NotationError, NotationResult};

// Configuration
pub use crate::config::{GlobConfig, Validator};
