/// The part accessor abstraction and its in-memory implementation.
use crate::ooxml::opc::constants::normalize_part_name;
use crate::ooxml::opc::error::{OpcError, Result};
use std::collections::BTreeMap;

/// Read-only access to the parts of a package.
///
/// Paths are package-internal (`word/footnotes.xml`); a leading slash is
/// tolerated by the provided implementations.
pub trait PartSource {
    /// Whether the package contains a part at `path`.
    fn file_exists(&self, path: &str) -> bool;

    /// Read the part at `path` as UTF-8 text.
    ///
    /// Fails with [`OpcError::PartNotFound`] when the part is absent and
    /// [`OpcError::InvalidUtf8`] when its bytes are not UTF-8.
    fn read_text(&self, path: &str) -> Result<String>;

    /// Read the part at `path`, or `None` if the package lacks it.
    fn read_optional_text(&self, path: &str) -> Result<Option<String>> {
        if !self.file_exists(path) {
            return Ok(None);
        }
        self.read_text(path).map(Some)
    }
}

impl<T: PartSource + ?Sized> PartSource for &T {
    fn file_exists(&self, path: &str) -> bool {
        (**self).file_exists(path)
    }

    fn read_text(&self, path: &str) -> Result<String> {
        (**self).read_text(path)
    }
}

/// A package whose parts live in memory.
///
/// # Examples
///
/// ```
/// use xdoc::ooxml::opc::{MemoryPackage, PartSource};
///
/// let pkg = MemoryPackage::new().with_part("word/document.xml", "<w:document/>");
/// assert!(pkg.file_exists("word/document.xml"));
/// assert!(!pkg.file_exists("word/footnotes.xml"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryPackage {
    parts: BTreeMap<String, Vec<u8>>,
}

impl MemoryPackage {
    /// Create an empty package.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a part.
    pub fn insert(&mut self, path: &str, data: impl Into<Vec<u8>>) {
        self.parts
            .insert(normalize_part_name(path).to_string(), data.into());
    }

    /// Builder form of [`MemoryPackage::insert`].
    pub fn with_part(mut self, path: &str, data: impl Into<Vec<u8>>) -> Self {
        self.insert(path, data);
        self
    }

    /// Names of all parts, sorted.
    pub fn part_names(&self) -> impl Iterator<Item = &str> {
        self.parts.keys().map(String::as_str)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl PartSource for MemoryPackage {
    fn file_exists(&self, path: &str) -> bool {
        self.parts.contains_key(normalize_part_name(path))
    }

    fn read_text(&self, path: &str) -> Result<String> {
        let name = normalize_part_name(path);
        let data = self
            .parts
            .get(name)
            .ok_or_else(|| OpcError::PartNotFound(name.to_string()))?;
        String::from_utf8(data.clone()).map_err(|_| OpcError::InvalidUtf8 {
            path: name.to_string(),
        })
    }
}
