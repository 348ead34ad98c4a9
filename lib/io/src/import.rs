use crate::{from_exchange_text, ParseError};
use oxrdfio::{RdfFormat, RdfParser, RdfSerializer};
use sbgnml_rdf_model::{NamespaceRegistry, Quad};
use sbgnml_rdf_storage::TripleStore;
use sbgnml_rdf_xml::Element;

/// Reads RDF blocks into [`TripleStore`]s.
///
/// Malformed blocks are not fatal: [`import`](Self::import) logs the problem and returns an empty
/// store, so a garbled annotation does not abort loading the surrounding document.
///
/// ```
/// use sbgnml_rdf_io::RdfXmlImporter;
/// use sbgnml_rdf_model::NamespaceRegistry;
///
/// let registry = NamespaceRegistry::default();
/// let importer = RdfXmlImporter::new(&registry);
/// let store = importer.import_str(
///     r##"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#" xmlns:bqbiol="http://biomodels.net/biology-qualifiers/">
///       <rdf:Description rdf:about="#glyph1">
///         <bqbiol:is rdf:resource="http://identifiers.org/CHEBI:15422"/>
///       </rdf:Description>
///     </rdf:RDF>"##,
/// );
/// assert_eq!(store.len(), 1);
/// assert!(importer.import_str("<rdf:RDF>").is_empty());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct RdfXmlImporter<'a> {
    registry: &'a NamespaceRegistry,
}

impl<'a> RdfXmlImporter<'a> {
    pub fn new(registry: &'a NamespaceRegistry) -> Self {
        Self { registry }
    }

    /// Imports an RDF block, returning an empty store if it cannot be read.
    pub fn import(&self, block: &Element) -> TripleStore {
        self.import_in_scope(block, &[])
    }

    /// Imports an RDF block nested in a host document, returning an empty store if it cannot be
    /// read.
    ///
    /// `scope` holds the `(prefix, namespace)` declarations of the host elements enclosing the
    /// block, innermost last.
    pub fn import_in_scope(&self, block: &Element, scope: &[(&str, &str)]) -> TripleStore {
        self.try_import_in_scope(block, scope)
            .unwrap_or_else(|error| {
                tracing::warn!(%error, block = block.name(), "Ignoring malformed RDF block");
                TripleStore::new()
            })
    }

    /// Imports an RDF block given as text, returning an empty store if it cannot be read.
    pub fn import_str(&self, text: &str) -> TripleStore {
        self.try_import_str(text).unwrap_or_else(|error| {
            tracing::warn!(%error, "Ignoring malformed RDF block");
            TripleStore::new()
        })
    }

    /// Imports an RDF block given as text.
    pub fn try_import_str(&self, text: &str) -> Result<TripleStore, ParseError> {
        self.try_import(&Element::parse(text)?)
    }

    /// Imports an RDF block.
    pub fn try_import(&self, block: &Element) -> Result<TripleStore, ParseError> {
        self.try_import_in_scope(block, &[])
    }

    /// Imports an RDF block nested in a host document.
    ///
    /// The block is handed to the RDF/XML parser, whose statements are then read back through the
    /// exchange syntax. Prefixes the block uses without declaring them are taken from `scope`
    /// and then from the registry.
    pub fn try_import_in_scope(
        &self,
        block: &Element,
        scope: &[(&str, &str)],
    ) -> Result<TripleStore, ParseError> {
        let block = self.declare_namespaces(block, scope);
        let text = block.write_to(Vec::new())?;

        let base_iri = self.registry.base_iri();
        let quads = RdfParser::from_format(RdfFormat::RdfXml)
            .with_base_iri(base_iri)
            .map_err(|error| ParseError::InvalidBaseIri {
                iri: base_iri.to_owned(),
                error,
            })?
            .for_reader(text.as_slice())
            .collect::<Result<Vec<Quad>, _>>()?;

        let mut serializer = RdfSerializer::from_format(RdfFormat::NQuads).for_writer(Vec::new());
        for quad in &quads {
            serializer.serialize_quad(quad)?;
        }
        let exchange_text = String::from_utf8(serializer.finish()?)?;
        Ok(from_exchange_text(&exchange_text)?)
    }

    /// Declares the prefixes that are used in `block` but not declared on its root.
    ///
    /// Host documents usually declare the namespaces on their own root element.
    fn declare_namespaces(&self, block: &Element, scope: &[(&str, &str)]) -> Element {
        let declarations = used_prefixes(block)
            .into_iter()
            .filter(|prefix| {
                !block
                    .namespace_declarations()
                    .any(|(declared, _)| declared == *prefix)
            })
            .filter_map(|prefix| {
                scope
                    .iter()
                    .rev()
                    .find(|(declared, _)| *declared == prefix)
                    .map(|(_, namespace)| *namespace)
                    .or_else(|| self.registry.resolve(prefix))
                    .map(|namespace| (prefix, namespace))
            })
            .collect::<Vec<_>>();

        let mut declared = block.clone();
        for (prefix, namespace) in declarations {
            tracing::debug!(prefix, namespace, "Declaring namespace of RDF block");
            declared.set_attribute(format!("xmlns:{prefix}"), namespace);
        }
        declared
    }
}

/// Returns the prefixes of all element and attribute names of `block`.
fn used_prefixes(block: &Element) -> Vec<&str> {
    let mut prefixes = Vec::new();
    for element in block.descendants() {
        let names = std::iter::once(element.name())
            .chain(element.attributes().map(|(name, _)| name));
        for name in names {
            let Some((prefix, _)) = name.split_once(':') else {
                continue;
            };
            if prefix != "xmlns" && prefix != "xml" && !prefixes.contains(&prefix) {
                prefixes.push(prefix);
            }
        }
    }
    prefixes
}

#[cfg(test)]
mod tests {
    use super::*;
    use sbgnml_rdf_model::vocab::{bqmodel, rdf, sio};
    use sbgnml_rdf_model::{Literal, NamedNode, Term};

    const SCENARIO: &str = r##"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#" xmlns:bqmodel="http://biomodels.net/model-qualifiers/" xmlns:bqbiol="http://biomodels.net/biology-qualifiers/" xmlns:sio="http://semanticscience.org/resource/" xmlns:eisbm="http://www.eisbm.org/">
  <rdf:Description rdf:about="#_000001">
    <bqmodel:is>
      <rdf:Bag>
        <rdf:li rdf:resource="http://identifiers.org/biomodels.db/BIOMD0000000004"/>
      </rdf:Bag>
    </bqmodel:is>
    <eisbm:hasProperty>
      <rdf:Bag>
        <rdf:li sio:SIO_000116="data" rdf:value="42"/>
      </rdf:Bag>
    </eisbm:hasProperty>
  </rdf:Description>
</rdf:RDF>"##;

    #[test]
    fn import_compact_annotation() {
        let registry = NamespaceRegistry::default();
        let store = RdfXmlImporter::new(&registry).import_str(SCENARIO);
        assert_eq!(store.len(), 8);

        let subject = registry.document_iri("_000001").unwrap();
        let model = NamedNode::new("http://identifiers.org/biomodels.db/BIOMD0000000004").unwrap();
        assert_eq!(
            store
                .quads_for_pattern(Some(subject.as_ref().into()), Some(bqmodel::IS), None)
                .count(),
            1
        );
        assert_eq!(
            store
                .quads_for_pattern(None, Some(rdf::TYPE), Some(rdf::BAG.into()))
                .count(),
            2
        );
        assert_eq!(
            store
                .quads_for_pattern(None, None, Some(model.as_ref().into()))
                .count(),
            1
        );
        let key = Term::from(Literal::new_simple_literal("data"));
        assert_eq!(
            store
                .quads_for_pattern(None, Some(sio::HAS_VALUE), Some(key.as_ref()))
                .count(),
            1
        );
        let value = Term::from(Literal::new_simple_literal("42"));
        assert_eq!(
            store
                .quads_for_pattern(None, Some(rdf::VALUE), Some(value.as_ref()))
                .count(),
            1
        );
    }

    #[test]
    fn import_declares_namespaces_of_host_document() {
        let host = Element::parse(
            r##"<sbgn xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#" xmlns:bqbiol="http://biomodels.net/biology-qualifiers/">
  <rdf:RDF>
    <rdf:Description rdf:about="#glyph1">
      <bqbiol:isVersionOf rdf:resource="http://identifiers.org/GO:0005737"/>
    </rdf:Description>
  </rdf:RDF>
</sbgn>"##,
        )
        .unwrap();
        let block = host.find_child("rdf:RDF").unwrap();

        let registry = NamespaceRegistry::default();
        let store = RdfXmlImporter::new(&registry).try_import(block).unwrap();
        assert_eq!(store.len(), 1);
        let quad = store.iter().next().unwrap();
        assert_eq!(quad.subject.to_string(), "<http://sbgn.org/document#glyph1>");
    }

    #[test]
    fn import_degrades_to_empty_store() {
        let registry = NamespaceRegistry::default();
        let importer = RdfXmlImporter::new(&registry);

        let unterminated = r##"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#">
  <rdf:Description rdf:about="#_000001">"##;
        assert!(importer.import_str(unterminated).is_empty());
        assert!(matches!(
            importer.try_import_str(unterminated),
            Err(ParseError::Xml(_))
        ));

        let unknown_prefix = Element::parse(
            r##"<rdf:RDF><rdf:Description rdf:about="#a"><dc:title>x</dc:title></rdf:Description></rdf:RDF>"##,
        )
        .unwrap();
        assert!(importer.import(&unknown_prefix).is_empty());
        assert!(importer.try_import(&unknown_prefix).is_err());
    }

    #[test]
    fn import_in_scope_prefers_host_declarations() {
        let host = Element::parse(
            r##"<annotation xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#" xmlns:bqbiol="http://example.com/qualifiers/" xmlns:dc="http://purl.org/dc/terms/">
  <rdf:RDF>
    <rdf:Description rdf:about="#glyph1">
      <dc:title>Glucose</dc:title>
      <bqbiol:is rdf:resource="http://identifiers.org/CHEBI:17234"/>
    </rdf:Description>
  </rdf:RDF>
</annotation>"##,
        )
        .unwrap();
        let block = host.find_child("rdf:RDF").unwrap();
        let scope = host.namespace_declarations().collect::<Vec<_>>();

        let registry = NamespaceRegistry::default();
        let importer = RdfXmlImporter::new(&registry);
        assert!(importer.import(block).is_empty());

        let store = importer.import_in_scope(block, &scope);
        let predicates = store
            .iter()
            .map(|quad| quad.predicate.as_str())
            .collect::<Vec<_>>();
        assert_eq!(
            predicates,
            ["http://purl.org/dc/terms/title", "http://example.com/qualifiers/is"]
        );
    }

    #[test]
    fn used_prefixes_skip_namespace_declarations() {
        let element = Element::parse(
            r#"<rdf:RDF xmlns:rdf="x" xml:lang="en"><sio:SIO_000116 rdf:value="1"/></rdf:RDF>"#,
        )
        .unwrap();
        assert_eq!(used_prefixes(&element), ["rdf", "sio"]);
    }
}
