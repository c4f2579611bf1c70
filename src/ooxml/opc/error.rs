/// Error types for package (zip container) access
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OpcError {
    #[error("Package not found: {0}")]
    PackageNotFound(String),

    #[error("Part not found: {0}")]
    PartNotFound(String),

    #[error("Part {path} is not valid UTF-8")]
    InvalidUtf8 { path: String },

    #[cfg(feature = "ooxml")]
    #[error("ZIP error: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, OpcError>;
