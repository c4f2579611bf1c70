/// Error types for reading Word documents into the document model.
use crate::common::xml::XmlError;
use thiserror::Error;

/// Result type for OOXML operations.
pub type Result<T> = std::result::Result<T, OoxmlError>;

/// Error types for OOXML operations.
#[derive(Error, Debug)]
pub enum OoxmlError {
    /// Package access error
    #[error("OPC error: {0}")]
    Opc(#[from] crate::ooxml::opc::error::OpcError),

    /// A required part is absent from the package
    #[error("Missing required part: {0}")]
    MissingPart(String),

    /// A part could not be parsed as XML
    #[error("XML error in {part}: {source}")]
    Xml {
        part: String,
        #[source]
        source: XmlError,
    },

    /// A `w:fldChar` carried a `w:fldCharType` other than begin/separate/end
    #[error("Unrecognized fldCharType {value:?} in {part} at {path}")]
    UnrecognizedFieldCharType {
        part: String,
        path: String,
        value: String,
    },
}

impl OoxmlError {
    /// Attach the part name to an XML parse failure.
    pub(crate) fn xml(part: &str, source: XmlError) -> Self {
        OoxmlError::Xml {
            part: part.to_string(),
            source,
        }
    }
}
