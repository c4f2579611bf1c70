//! Common types shared by the reader and the renderer.
//!
//! This module provides the unified error type, the character style flags
//! and the XML element tree the OpenXML reader walks.

// Submodule declarations
pub mod error;
pub mod style;
pub mod xml;

// Re-exports for convenience
pub use error::{Error, Result};
pub use style::{Style, calculate_flags, merge};
