//! Unified error types for xdoc.
//!
//! This module provides a unified error type that encompasses errors from
//! package access, XML parsing and document reading.

// Submodule declarations
pub mod conversions;
pub mod types;

// Re-exports
pub use types::{Error, Result};
