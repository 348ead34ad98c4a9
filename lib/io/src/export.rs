use crate::fixup::apply_fixups;
use crate::layout::{empty_document, stripe};
use crate::{to_exchange_text, ExportError};
use oxrdfio::{RdfFormat, RdfParser, RdfSerializer};
use sbgnml_rdf_model::vocab::rdf;
use sbgnml_rdf_model::{NamespaceRegistry, Quad};
use sbgnml_rdf_storage::TripleStore;
use sbgnml_rdf_xml::Element;

/// Writes [`TripleStore`]s as RDF/XML in the compact shape of annotation documents.
///
/// Statements go through the exchange syntax to the RDF/XML writer. Its output is rearranged into
/// the striped layout and then rewritten by the [fixup passes](crate::FixupPass), which restore
/// `rdf:Bag` containers and compact key/value items.
///
/// ```
/// use sbgnml_rdf_io::{RdfXmlExporter, RdfXmlImporter};
/// use sbgnml_rdf_model::NamespaceRegistry;
///
/// let registry = NamespaceRegistry::default();
/// let store = RdfXmlImporter::new(&registry).import_str(
///     r##"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#" xmlns:bqbiol="http://biomodels.net/biology-qualifiers/">
///   <rdf:Description rdf:about="#glyph1">
///     <bqbiol:is>
///       <rdf:Bag>
///         <rdf:li rdf:resource="http://identifiers.org/CHEBI:15422"/>
///       </rdf:Bag>
///     </bqbiol:is>
///   </rdf:Description>
/// </rdf:RDF>"##,
/// );
/// let text = RdfXmlExporter::new(&registry).export(&store)?;
/// assert!(text.contains("<rdf:Bag>"));
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct RdfXmlExporter<'a> {
    registry: &'a NamespaceRegistry,
}

impl<'a> RdfXmlExporter<'a> {
    pub fn new(registry: &'a NamespaceRegistry) -> Self {
        Self { registry }
    }

    /// Writes `store` as indented RDF/XML text.
    pub fn export(&self, store: &TripleStore) -> Result<String, ExportError> {
        let element = self.export_element(store)?;
        Ok(String::from_utf8(element.write_to(Vec::new())?)?)
    }

    /// Writes `store` as an `rdf:RDF` element.
    pub fn export_element(&self, store: &TripleStore) -> Result<Element, ExportError> {
        let mut element = self.export_expanded(store)?;
        apply_fixups(&mut element);
        Ok(element)
    }

    /// Writes `store` in the striped layout without applying the fixup passes.
    ///
    /// Containers appear as `rdf:Description` elements typed with `rdf:type` and key/value items as
    /// `rdf:parseType="Resource"` items.
    pub fn export_expanded(&self, store: &TripleStore) -> Result<Element, ExportError> {
        let quads = self.read_exchange_text(store)?;
        if quads.is_empty() {
            return Ok(empty_document(self.registry));
        }
        let document = self.write_generic(&quads)?;
        Ok(stripe(&document, self.registry)?)
    }

    /// Reads the statements of `store` back from the exchange syntax, dropping named graphs.
    fn read_exchange_text(&self, store: &TripleStore) -> Result<Vec<Quad>, ExportError> {
        let exchange_text = to_exchange_text(store);
        let mut quads = Vec::with_capacity(store.len());
        for quad in RdfParser::from_format(RdfFormat::NQuads).for_reader(exchange_text.as_bytes()) {
            let quad = quad.map_err(ExportError::Exchange)?;
            if quad.graph_name.is_default_graph() {
                quads.push(quad);
            } else {
                tracing::warn!(graph = %quad.graph_name, "Dropping statement of a named graph from RDF/XML output");
            }
        }
        Ok(quads)
    }

    /// Writes the statements with the RDF/XML writer of the RDF engine.
    fn write_generic(&self, quads: &[Quad]) -> Result<Vec<u8>, ExportError> {
        let mut serializer = RdfSerializer::from_format(RdfFormat::RdfXml);
        for (prefix, namespace) in self.registry.entries() {
            if prefix == rdf::PREFIX {
                continue;
            }
            serializer = serializer.with_prefix(prefix, namespace).map_err(|error| {
                ExportError::InvalidNamespace {
                    prefix: prefix.to_owned(),
                    error,
                }
            })?;
        }
        let mut serializer = serializer.for_writer(Vec::new());
        for quad in quads {
            serializer.serialize_triple(quad.as_ref())?;
        }
        Ok(serializer.finish()?)
    }
}
