/// Word (.docx) document reading.
///
/// This module turns the WordprocessingML parts of a package into an
/// [`XDocument`](crate::xdom::XDocument).
///
/// # Architecture
///
/// - `Package`: a .docx file opened from disk or memory
/// - `DocumentParts`: footnotes, endnotes, core properties and
///   relationships, read eagerly
/// - `paragraph`: the body / paragraph / run walk
/// - `field`: the complex field state machine for cross-references
/// - `symbols`: Symbol and Wingdings font tables
///
/// # Example
///
/// ```rust,no_run
/// use xdoc::ooxml::docx::Package;
///
/// let package = Package::open("document.docx")?;
/// let document = package.document()?;
/// if let Some(title) = document.title() {
///     println!("Title: {}", title);
/// }
/// for (id, note) in &document.footnotes {
///     println!("Footnote {}: {}", id, note.text());
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub mod bookmark;
mod context;
pub mod field;
pub mod footnote;
pub mod package;
pub mod paragraph;
pub mod properties;
pub mod symbols;

pub use bookmark::Bookmark;
pub use field::{ComplexField, FieldInstruction, ReferenceKind};
pub use footnote::{NoteMap, Notes, read_notes};
#[cfg(feature = "ooxml")]
pub use package::Package;
pub use package::{DocumentParts, dangling_references, parse_document, read_document};
pub use paragraph::ParagraphKind;
pub use properties::read_properties_styles;
