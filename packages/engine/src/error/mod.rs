//! Notation error handling module
//!
//! Error taxonomy for pattern parsing, concrete-path validation and list
//! integrity checks, together with named constructors.

mod constructors;
mod types;

pub use types::{ErrorKind, NotationError, NotationResult};
