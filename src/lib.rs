//! xdoc - Converts Microsoft Word OpenXML documents into LaTeX
//!
//! The conversion runs in two stages. The reader ([`ooxml::docx`]) walks the
//! package XML and builds an XDOM tree ([`xdom`]): styled text runs,
//! paragraphs, headings, numbered examples, footnotes, endnotes and
//! cross-references. The renderer ([`latex`]) turns that tree into LaTeX
//! body text without looking at XML again.
//!
//! # Features
//!
//! - **Style accumulation**: bold, italic, underline, sub- and superscript
//!   are folded through paragraph and run scopes into minimal nested
//!   `\textbf{...}` style commands
//! - **Complex fields**: `REF`/`NOTEREF`/`PAGEREF` fields become
//!   `\Cref{...}` and bookmarks become `\label{...}`
//! - **Notes**: footnotes and endnotes are read once and shared by every
//!   place that references them
//! - **Symbol fonts**: Symbol and Wingdings private-use characters are
//!   translated to Unicode
//! - **Serde**: the XDOM tree can be persisted and restored
//!
//! # Example - Converting a DOCX file
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let tex = xdoc::docx_to_latex("paper.docx")?;
//! println!("{}", tex);
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Working with the document model
//!
//! ```no_run
//! use xdoc::latex::{LatexOptions, ToLatex};
//! use xdoc::ooxml::docx::Package;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let pkg = Package::open("paper.docx")?;
//! let document = pkg.document()?;
//!
//! println!("Title: {:?}", document.title());
//! for reference in document.references() {
//!     println!("Cross-reference to {}", reference.code);
//! }
//!
//! let options = LatexOptions::new().with_reference_command("ref");
//! println!("{}", document.to_latex_with_options(&options));
//! # Ok(())
//! # }
//! ```
//!
//! # Feature Flags
//!
//! - `ooxml` (default): zip-backed package access. Without it, packages
//!   are read through [`ooxml::MemoryPackage`] or any custom
//!   [`ooxml::PartSource`].
pub mod common;
pub mod latex;
pub mod ooxml;
pub mod xdom;

pub use common::{Error, Result, Style};
pub use latex::{LatexOptions, ToLatex};
pub use ooxml::PartSource;
pub use xdom::{XDocument, XNode};

#[cfg(feature = "ooxml")]
use std::path::Path;

/// Read and render the document in any package source.
///
/// # Examples
///
/// ```
/// use xdoc::ooxml::MemoryPackage;
///
/// let pkg = MemoryPackage::new().with_part(
///     "word/document.xml",
///     r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
///          <w:body><w:p><w:r><w:rPr><w:b/></w:rPr><w:t>50%</w:t></w:r></w:p></w:body>
///        </w:document>"#,
/// );
/// assert_eq!(xdoc::source_to_latex(&pkg)?, r"\textbf{50\%}");
/// # Ok::<(), xdoc::Error>(())
/// ```
pub fn source_to_latex(source: &dyn PartSource) -> Result<String> {
    let document = ooxml::docx::parse_document(source)?;
    Ok(document.to_latex())
}

/// Convert a `.docx` file on disk to LaTeX with default options.
#[cfg(feature = "ooxml")]
pub fn docx_to_latex<P: AsRef<Path>>(path: P) -> Result<String> {
    let pkg = ooxml::docx::Package::open(path)?;
    Ok(pkg.document()?.to_latex())
}

/// Convert an in-memory `.docx` archive to LaTeX with default options.
#[cfg(feature = "ooxml")]
pub fn docx_bytes_to_latex(bytes: impl Into<Vec<u8>>) -> Result<String> {
    let pkg = ooxml::docx::Package::from_bytes(bytes)?;
    Ok(pkg.document()?.to_latex())
}
