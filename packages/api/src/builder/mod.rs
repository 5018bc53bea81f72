//! Glob list builder API
//!
//! Provides the fluent API for assembling include/exclude lists and reducing
//! them with the engine.

pub mod core;

pub use core::*;
