//! Import and export of SBGN-ML annotation blocks as RDF/XML.
//!
//! The [`RdfXmlImporter`] and [`RdfXmlExporter`] delegate the RDF/XML syntax to
//! [`oxrdfio`]. Statements are exchanged with it through N-Quads text (see [`to_exchange_text`]),
//! so a [`TripleStore`](sbgnml_rdf_storage::TripleStore) keeps its order end to end. After
//! writing, the [`FixupPass`]es restore the compact shape annotation documents are written in.

mod error;
mod exchange;
mod export;
mod fixup;
mod import;
pub mod layout;

pub use error::{ExportError, LayoutError, ParseError};
pub use exchange::{from_exchange_text, to_exchange_text};
pub use export::RdfXmlExporter;
pub use fixup::{apply_fixups, FixupPass};
pub use import::RdfXmlImporter;
