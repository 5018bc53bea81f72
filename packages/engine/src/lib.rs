//! # Notation Glob Engine
//!
//! Pattern algebra for dot/bracket property paths with wildcards and
//! negation. Glob lists are read as ordered include/exclude rules over the
//! paths of nested data and can be reduced, merged and ordered.
//!
//! ## Features
//!
//! - **Parsing and validation** of `a.b`, `a[0]`, `a['b c']`, `a.*`, `[*]`, `!a`
//! - **Coverage and intersection** of globs
//! - **Normalization** of glob lists to their minimal equivalent, in loose or
//!   restrictive negation mode
//! - **Union** of two glob lists
//! - **Specificity ordering** so later rules refine earlier ones
//! - **Path testing** through lazily compiled matchers
//! - **Configuration** loading from JSON with validation
//!
//! ## Usage
//!
//! ```rust
//! use notation_glob_engine::prelude::*;
//!
//! let list = normalize(&["car.*", "!*.model"], false).unwrap();
//! assert_eq!(list, vec!["car", "!car.model"]);
//!
//! let merged = union(&["*", "!location"], &["location"], false).unwrap();
//! assert_eq!(merged, vec!["*"]);
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod config;
pub mod error;
pub mod glob;
pub mod prelude;

pub use config::{ConfigResult, ConfigurationError, GlobConfig, Validator};
pub use error::{ErrorKind, NotationError, NotationResult};
pub use glob::{Normalizer, Note, Pattern};
