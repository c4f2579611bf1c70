/// Package access for Word documents.
///
/// A .docx file is a zip container of XML parts. The reader never talks to
/// the container directly; it goes through the [`PartSource`] trait, which
/// has two implementations:
///
/// - [`ZipPackage`]: a zip archive on disk or in memory (feature `ooxml`)
/// - [`MemoryPackage`]: parts held in a map, for embedding and tests
///
/// Part paths are package-internal and never start with a slash
/// (`word/document.xml`).
pub mod constants;
pub mod error;
pub mod part;
#[cfg(feature = "ooxml")]
pub mod phys_pkg;
pub mod rel;

// Re-export commonly used types
pub use error::{OpcError, Result};
pub use part::{MemoryPackage, PartSource};
#[cfg(feature = "ooxml")]
pub use phys_pkg::ZipPackage;
pub use rel::read_relationships;
