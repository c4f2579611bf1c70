/// Constant values related to the parts of a Word package.

/// Package-internal paths of the parts the document reader consumes.
pub mod part_name {
    /// Main document body (required)
    pub const DOCUMENT: &str = "word/document.xml";
    /// Footnote bodies (optional)
    pub const FOOTNOTES: &str = "word/footnotes.xml";
    /// Endnote bodies (optional)
    pub const ENDNOTES: &str = "word/endnotes.xml";
    /// Dublin Core document properties (optional)
    pub const CORE_PROPERTIES: &str = "docProps/core.xml";
    /// Relationships of the main document part (optional)
    pub const DOCUMENT_RELS: &str = "word/_rels/document.xml.rels";
}

/// Relationship target modes.
pub mod target_mode {
    pub const EXTERNAL: &str = "External";
}

/// Normalize a part path to its package-internal form.
///
/// Leading slashes are dropped so `/word/document.xml` and
/// `word/document.xml` name the same part.
#[inline]
pub fn normalize_part_name(path: &str) -> &str {
    path.trim_start_matches('/')
}
