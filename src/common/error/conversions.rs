//! Error conversion implementations.
//!
//! This module contains From trait implementations to convert from internal
//! error types to the unified Error type.
use super::types::Error;
use crate::common::xml::XmlError;
use crate::ooxml::error::OoxmlError;
use crate::ooxml::opc::error::OpcError;

impl From<OpcError> for Error {
    fn from(err: OpcError) -> Self {
        match err {
            OpcError::IoError(e) => Error::Io(e),
            #[cfg(feature = "ooxml")]
            OpcError::ZipError(e) => Error::ZipError(e.to_string()),
            OpcError::PackageNotFound(s) | OpcError::PartNotFound(s) => Error::ComponentNotFound(s),
            err @ OpcError::InvalidUtf8 { .. } => Error::Other(err.to_string()),
        }
    }
}

impl From<OoxmlError> for Error {
    fn from(err: OoxmlError) -> Self {
        match err {
            OoxmlError::Opc(e) => Error::from(e),
            OoxmlError::MissingPart(s) => Error::ComponentNotFound(s),
            err @ OoxmlError::Xml { .. } => Error::XmlError(err.to_string()),
            err @ OoxmlError::UnrecognizedFieldCharType { .. } => Error::ParseError(err.to_string()),
        }
    }
}

impl From<XmlError> for Error {
    fn from(err: XmlError) -> Self {
        Error::XmlError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reader_errors_map_to_unified_variants() {
        let missing: Error = OoxmlError::MissingPart("word/document.xml".to_string()).into();
        assert!(matches!(missing, Error::ComponentNotFound(ref s) if s == "word/document.xml"));

        let field: Error = OoxmlError::UnrecognizedFieldCharType {
            part: "word/document.xml".to_string(),
            path: "w:body/w:p[1]/w:r[2]/w:fldChar".to_string(),
            value: "middle".to_string(),
        }
        .into();
        let message = field.to_string();
        assert!(message.contains("middle"));
        assert!(message.contains("w:p[1]"));

        let utf8: Error = OpcError::InvalidUtf8 {
            path: "word/footnotes.xml".to_string(),
        }
        .into();
        assert!(utf8.to_string().contains("word/footnotes.xml"));
    }
}
