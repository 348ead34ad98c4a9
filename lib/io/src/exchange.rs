//! The line-oriented exchange syntax between a [`TripleStore`] and the RDF engine.
//!
//! Statements are written as [N-Quads](https://www.w3.org/TR/n-quads/), one per line and in store
//! order. The rendering is done here rather than by the engine's writer so that the mapping stays
//! one line per statement.

use oxrdfio::{RdfFormat, RdfParseError, RdfParser};
use sbgnml_rdf_storage::TripleStore;

/// Renders each statement of `store` as one N-Quads line.
///
/// ```
/// use sbgnml_rdf_io::to_exchange_text;
/// use sbgnml_rdf_model::{vocab::rdf, BlankNode, Triple};
/// use sbgnml_rdf_storage::TripleStore;
///
/// let mut store = TripleStore::new();
/// store.add_triple(Triple::new(BlankNode::new("b0")?, rdf::TYPE, rdf::BAG));
/// assert_eq!(
///     to_exchange_text(&store),
///     "_:b0 <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://www.w3.org/1999/02/22-rdf-syntax-ns#Bag> .\n"
/// );
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
pub fn to_exchange_text(store: &TripleStore) -> String {
    store.iter().map(|quad| format!("{quad} .\n")).collect()
}

/// Parses N-Quads statements into a store, keeping their order.
pub fn from_exchange_text(text: &str) -> Result<TripleStore, RdfParseError> {
    RdfParser::from_format(RdfFormat::NQuads)
        .for_reader(text.as_bytes())
        .collect()
}
