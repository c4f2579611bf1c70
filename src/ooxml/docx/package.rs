/// Reading a Word package into an [`XDocument`].
use crate::common::xml::{self, XmlElement};
use crate::latex::escape::clean_marker;
use crate::ooxml::docx::context::Context;
use crate::ooxml::docx::footnote::{Notes, read_notes};
use crate::ooxml::docx::paragraph::read_body;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::metadata::read_metadata;
use crate::ooxml::opc::constants::part_name;
use crate::ooxml::opc::{PartSource, read_relationships};
use crate::xdom::XDocument;
use log::warn;
use std::collections::{BTreeMap, BTreeSet};

#[cfg(feature = "ooxml")]
use crate::ooxml::opc::ZipPackage;
#[cfg(feature = "ooxml")]
use std::io::{Read, Seek};
#[cfg(feature = "ooxml")]
use std::path::Path;

/// Everything a document needs besides its body, read once per package.
///
/// All parts are optional: a missing part yields an empty map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentParts {
    pub notes: Notes,
    /// `docProps/core.xml` entries keyed by local name
    pub metadata: BTreeMap<String, String>,
    /// Relationship id → target for `word/document.xml`
    pub relationships: BTreeMap<String, String>,
}

impl DocumentParts {
    /// Read footnotes, endnotes, core properties and relationships.
    pub fn read(source: &dyn PartSource) -> Result<Self> {
        let footnotes = match read_optional_xml(source, part_name::FOOTNOTES)? {
            Some(root) => read_notes(&root, part_name::FOOTNOTES)?,
            None => BTreeMap::new(),
        };
        let endnotes = match read_optional_xml(source, part_name::ENDNOTES)? {
            Some(root) => read_notes(&root, part_name::ENDNOTES)?,
            None => BTreeMap::new(),
        };
        let metadata = read_optional_xml(source, part_name::CORE_PROPERTIES)?
            .map(|root| read_metadata(&root))
            .unwrap_or_default();
        let relationships = read_optional_xml(source, part_name::DOCUMENT_RELS)?
            .map(|root| read_relationships(&root))
            .unwrap_or_default();

        Ok(Self {
            notes: Notes {
                footnotes,
                endnotes,
            },
            metadata,
            relationships,
        })
    }
}

/// Parse a package part as XML, or `None` if the package lacks it.
fn read_optional_xml(source: &dyn PartSource, part: &str) -> Result<Option<XmlElement>> {
    match source.read_optional_text(part)? {
        Some(text) => xml::parse(&text)
            .map(Some)
            .map_err(|e| OoxmlError::xml(part, e)),
        None => Ok(None),
    }
}

/// Read a whole document from a package.
///
/// Fails with [`OoxmlError::MissingPart`] when `word/document.xml` is
/// absent. After reading, every cross-reference whose target bookmark does
/// not exist is reported as a warning.
///
/// # Examples
///
/// ```
/// use xdoc::ooxml::docx::parse_document;
/// use xdoc::ooxml::opc::MemoryPackage;
///
/// let pkg = MemoryPackage::new().with_part(
///     "word/document.xml",
///     r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
///          <w:body><w:p><w:r><w:t>Hello</w:t></w:r></w:p></w:body>
///        </w:document>"#,
/// );
/// let document = parse_document(&pkg)?;
/// assert_eq!(document.text(), "Hello");
/// # Ok::<(), xdoc::ooxml::OoxmlError>(())
/// ```
pub fn parse_document(source: &dyn PartSource) -> Result<XDocument> {
    let root = read_optional_xml(source, part_name::DOCUMENT)?
        .ok_or_else(|| OoxmlError::MissingPart(part_name::DOCUMENT.to_string()))?;
    let parts = DocumentParts::read(source)?;
    let document = read_document(&root, parts)?;
    report_dangling_references(&document);
    Ok(document)
}

/// Build a document from a parsed `w:document` root and its side parts.
pub fn read_document(root: &XmlElement, parts: DocumentParts) -> Result<XDocument> {
    let mut ctx = Context::new(part_name::DOCUMENT);
    let body = root
        .child_elements()
        .enumerate()
        .find(|(_, child)| child.local_name() == "body");

    let children = match body {
        Some((index, body)) => ctx.within(root, 0, |ctx| {
            ctx.within(body, index, |ctx| read_body(body, ctx, &parts.notes))
        })?,
        None => {
            warn!("{}: {} has no body", part_name::DOCUMENT, root.name());
            Vec::new()
        },
    };

    Ok(XDocument {
        children,
        labels: Vec::new(),
        metadata: parts.metadata,
        footnotes: parts.notes.footnotes,
        endnotes: parts.notes.endnotes,
        relationships: parts.relationships,
    })
}

/// Codes of cross-references that no bookmark label resolves to.
///
/// Codes and labels are compared in their rendered form, so `_Ref1` is
/// satisfied by a bookmark named `Ref1`.
pub fn dangling_references(document: &XDocument) -> Vec<&str> {
    let labels: BTreeSet<String> = document
        .labels()
        .into_iter()
        .map(clean_marker)
        .collect();
    document
        .references()
        .into_iter()
        .map(|reference| reference.code.as_str())
        .filter(|code| !labels.contains(&clean_marker(code)))
        .collect()
}

fn report_dangling_references(document: &XDocument) {
    for code in dangling_references(document) {
        warn!("Cross-reference to {:?} has no matching bookmark", code);
    }
}

/// A Word (.docx) package.
///
/// This is the main entry point for reading Word documents from disk or
/// memory.
///
/// # Examples
///
/// ```rust,no_run
/// use xdoc::ooxml::docx::Package;
///
/// let pkg = Package::open("document.docx")?;
/// let document = pkg.document()?;
/// println!("{} paragraphs", document.children.len());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[cfg(feature = "ooxml")]
#[derive(Debug)]
pub struct Package {
    zip: ZipPackage,
}

#[cfg(feature = "ooxml")]
impl Package {
    /// Open a .docx package from a file path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_zip(ZipPackage::open(path)?)
    }

    /// Create a .docx package from a reader.
    pub fn from_reader<R: Read + Seek + Send + 'static>(reader: R) -> Result<Self> {
        Self::from_zip(ZipPackage::from_reader(reader)?)
    }

    /// Create a .docx package from the bytes of a .docx file.
    pub fn from_bytes(data: impl Into<Vec<u8>>) -> Result<Self> {
        Self::from_zip(ZipPackage::from_bytes(data)?)
    }

    fn from_zip(zip: ZipPackage) -> Result<Self> {
        // Reject archives that are not Word documents up front
        if !zip.file_exists(part_name::DOCUMENT) {
            return Err(OoxmlError::MissingPart(part_name::DOCUMENT.to_string()));
        }
        Ok(Self { zip })
    }

    /// Read the main document.
    pub fn document(&self) -> Result<XDocument> {
        parse_document(&self.zip)
    }

    /// Read only the side parts (notes, metadata, relationships).
    pub fn parts(&self) -> Result<DocumentParts> {
        DocumentParts::read(&self.zip)
    }

    /// Get the underlying zip package.
    #[inline]
    pub fn zip_package(&self) -> &ZipPackage {
        &self.zip
    }
}
