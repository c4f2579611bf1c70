/// Zip-backed physical package.
///
/// Wraps a [`zip::ZipArchive`] behind a [`parking_lot::Mutex`]: reading a
/// zip entry needs `&mut` access to the archive, while [`PartSource`] hands
/// out shared references so the reader can be driven through `&dyn`.
use crate::ooxml::opc::constants::normalize_part_name;
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::part::PartSource;
use parking_lot::Mutex;
use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;
use zip::ZipArchive;
use zip::result::ZipError;

/// Any seekable byte source an archive can be read from.
pub trait ReadSeek: Read + Seek + Send {}

impl<T: Read + Seek + Send> ReadSeek for T {}

/// A .docx package read from a zip archive.
pub struct ZipPackage {
    archive: Mutex<ZipArchive<Box<dyn ReadSeek>>>,
}

impl ZipPackage {
    /// Open a package from a file path.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use xdoc::ooxml::opc::{PartSource, ZipPackage};
    ///
    /// let pkg = ZipPackage::open("document.docx")?;
    /// assert!(pkg.file_exists("word/document.xml"));
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => OpcError::PackageNotFound(path.display().to_string()),
            _ => OpcError::IoError(e),
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// Read a package from an in-memory archive.
    pub fn from_bytes(data: impl Into<Vec<u8>>) -> Result<Self> {
        Self::from_reader(Cursor::new(data.into()))
    }

    /// Read a package from any seekable reader.
    pub fn from_reader<R: Read + Seek + Send + 'static>(reader: R) -> Result<Self> {
        let reader: Box<dyn ReadSeek> = Box::new(reader);
        let archive = ZipArchive::new(reader)?;
        Ok(Self {
            archive: Mutex::new(archive),
        })
    }

    /// Read the raw bytes of a part.
    pub fn read_bytes(&self, path: &str) -> Result<Vec<u8>> {
        let name = normalize_part_name(path);
        let mut archive = self.archive.lock();
        let mut entry = archive.by_name(name).map_err(|e| match e {
            ZipError::FileNotFound => OpcError::PartNotFound(name.to_string()),
            other => OpcError::ZipError(other),
        })?;
        let mut data = Vec::with_capacity(entry.size() as usize);
        entry.read_to_end(&mut data)?;
        Ok(data)
    }

    /// Names of all members in the archive, in archive order.
    pub fn member_names(&self) -> Vec<String> {
        self.archive.lock().file_names().map(String::from).collect()
    }

    /// Number of members in the archive.
    pub fn len(&self) -> usize {
        self.archive.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PartSource for ZipPackage {
    fn file_exists(&self, path: &str) -> bool {
        let name = normalize_part_name(path);
        self.archive.lock().file_names().any(|member| member == name)
    }

    fn read_text(&self, path: &str) -> Result<String> {
        let data = self.read_bytes(path)?;
        String::from_utf8(data).map_err(|_| OpcError::InvalidUtf8 {
            path: normalize_part_name(path).to_string(),
        })
    }
}

impl std::fmt::Debug for ZipPackage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZipPackage")
            .field("members", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::ZipWriter;
    use zip::write::SimpleFileOptions;

    fn build_archive(parts: &[(&str, &[u8])]) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        for (name, data) in parts {
            writer.start_file(*name, SimpleFileOptions::default()).unwrap();
            writer.write_all(data).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_multiple_parts() {
        let data = build_archive(&[
            ("[Content_Types].xml", b"<Types/>"),
            ("word/document.xml", b"<w:document/>"),
            ("word/broken.xml", &[0xc3, 0x28]),
        ]);
        let pkg = ZipPackage::from_bytes(data).unwrap();

        assert_eq!(pkg.len(), 3);
        assert!(pkg.file_exists("word/document.xml"));
        assert!(pkg.file_exists("/word/document.xml"));
        assert!(!pkg.file_exists("word/footnotes.xml"));
        assert_eq!(pkg.read_text("word/document.xml").unwrap(), "<w:document/>");
        assert!(matches!(
            pkg.read_text("word/footnotes.xml"),
            Err(OpcError::PartNotFound(_))
        ));
        assert!(matches!(
            pkg.read_text("word/broken.xml"),
            Err(OpcError::InvalidUtf8 { .. })
        ));
    }

    #[test]
    fn test_open_from_path() {
        let data = build_archive(&[("word/document.xml", b"<w:document/>")]);
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&data).unwrap();
        file.flush().unwrap();

        let pkg = ZipPackage::open(file.path()).unwrap();
        assert_eq!(pkg.member_names(), vec!["word/document.xml".to_string()]);

        assert!(matches!(
            ZipPackage::open("/nonexistent/missing.docx"),
            Err(OpcError::PackageNotFound(_))
        ));
    }

    #[test]
    fn test_not_a_zip() {
        assert!(matches!(
            ZipPackage::from_bytes(b"plain text".to_vec()),
            Err(OpcError::ZipError(_))
        ));
    }
}
