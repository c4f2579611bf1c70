//! Unified error type for xdoc.
//!
//! Reader and package errors are folded into a single type so callers of
//! the top-level conversion functions deal with one enum.
use thiserror::Error;

/// Main error type for xdoc operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error occurred
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Stream or part not found
    #[error("Component not found: {0}")]
    ComponentNotFound(String),

    /// XML parsing error
    #[error("XML error: {0}")]
    XmlError(String),

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    ZipError(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Result type for xdoc operations.
pub type Result<T> = std::result::Result<T, Error>;
