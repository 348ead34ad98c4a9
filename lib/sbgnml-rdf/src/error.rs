use sbgnml_rdf_io::ExportError;
use sbgnml_rdf_xml::XmlError;
use std::string::FromUtf8Error;

/// The element handed to [`Annotation::from_xml`](crate::Annotation::from_xml) is not the
/// annotation wrapper.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Expected an <{expected}> element, found <{found}>")]
pub struct StructureError {
    /// The configured wrapper tag.
    pub expected: String,
    /// The tag of the element that was passed.
    pub found: String,
}

/// An error raised while reading or writing an annotation as text.
#[derive(Debug, thiserror::Error)]
pub enum AnnotationError {
    /// The document is not an annotation wrapper.
    #[error(transparent)]
    Structure(#[from] StructureError),
    /// The document is not well-formed XML.
    #[error(transparent)]
    Xml(#[from] XmlError),
    /// A graph could not be written as RDF/XML.
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error("The annotation is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
}
