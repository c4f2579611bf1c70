//! Office Open XML (OOXML) reading.
//!
//! The module is organized in layers:
//!
//! 1. **Package layer** (`opc`): part access over a zip archive or memory
//! 2. **Shared parts** (`metadata`, `opc::rel`): core properties and
//!    relationships
//! 3. **WordprocessingML** (`docx`): paragraphs, runs, fields and notes,
//!    read into the XDOM
//!
//! # Example
//!
//! ```rust,no_run
//! use xdoc::ooxml::docx::Package;
//!
//! let pkg = Package::open("document.docx")?;
//! let doc = pkg.document()?;
//! println!("{}", doc.text());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
pub mod docx;
pub mod error;
pub mod metadata;
pub mod opc;

pub use error::{OoxmlError, Result};
pub use opc::{MemoryPackage, PartSource};
#[cfg(feature = "ooxml")]
pub use opc::ZipPackage;
