use oxrdfio::RdfParseError;
use sbgnml_rdf_model::IriParseError;
use sbgnml_rdf_xml::XmlError;
use std::io;
use std::string::FromUtf8Error;

/// An error raised while reading an RDF block into a [`TripleStore`](sbgnml_rdf_storage::TripleStore).
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The block is not well-formed XML.
    #[error(transparent)]
    Xml(#[from] XmlError),
    /// The RDF engine rejected the block or the exchange text.
    #[error(transparent)]
    Rdf(#[from] RdfParseError),
    /// The base IRI is invalid.
    #[error("Invalid base IRI '{iri}': {error}")]
    InvalidBaseIri {
        /// The IRI itself.
        iri: String,
        /// The parsing error.
        #[source]
        error: IriParseError,
    },
    /// An error raised while rendering the exchange text.
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("The exchange text is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
}

/// An error raised while writing a [`TripleStore`](sbgnml_rdf_storage::TripleStore) as RDF/XML.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// An error raised by the RDF/XML writer.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// The exchange text could not be read back.
    #[error("Invalid exchange text: {0}")]
    Exchange(#[source] RdfParseError),
    /// A registry namespace was rejected by the writer.
    #[error("Invalid IRI for prefix {prefix}: {error}")]
    InvalidNamespace {
        prefix: String,
        #[source]
        error: IriParseError,
    },
    /// The document could not be written as text.
    #[error(transparent)]
    Xml(#[from] XmlError),
    #[error(transparent)]
    Layout(#[from] LayoutError),
    #[error("The exported document is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
}

/// An error raised while rearranging RDF/XML into the striped layout.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    /// The RDF/XML parser rejected the writer output.
    #[error(transparent)]
    Rdf(#[from] RdfParseError),
    #[error("The term {0} cannot be written as RDF/XML")]
    UnsupportedTerm(String),
    #[error("The IRI <{0}> cannot be written as an XML name")]
    UnrepresentableIri(String),
    #[error("Invalid IRI '{iri}': {error}")]
    InvalidIri {
        iri: String,
        #[source]
        error: IriParseError,
    },
}
