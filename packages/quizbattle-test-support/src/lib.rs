//! Shared test utilities for the quiz battle engine
//!
//! Logging bootstrap for integration tests, ULID-based unique names and
//! question-set JSON builders.

pub mod fixtures;
pub mod logging;
pub mod unique_helpers;

pub use unique_helpers::unique_str;
