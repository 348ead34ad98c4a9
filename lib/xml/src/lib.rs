//! A minimal owned XML element tree.
//!
//! Annotation blocks are handed around as [`Element`] subtrees of a host document. The tree keeps
//! qualified names and namespace declarations verbatim, it does not resolve namespaces.

mod element;
mod error;
mod reader;
mod writer;

pub use element::{Element, XmlNode};
pub use error::XmlError;
