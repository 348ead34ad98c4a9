use crate::error::{AnnotationError, StructureError};
use crate::AnnotationConfig;
use sbgnml_rdf_io::{ExportError, RdfXmlExporter, RdfXmlImporter};
use sbgnml_rdf_storage::TripleStore;
use sbgnml_rdf_xml::Element;
use std::slice;

/// The annotation graphs attached to an element of an SBGN-ML document.
///
/// Each `rdf:RDF` block below the annotation wrapper is one independent graph. Graphs keep their
/// document order when read and written.
///
/// ```
/// use sbgnml_rdf::{Annotation, AnnotationConfig};
///
/// let config = AnnotationConfig::default();
/// let text = r##"<annotation>
///   <rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#" xmlns:bqmodel="http://biomodels.net/model-qualifiers/" xmlns:bqbiol="http://biomodels.net/biology-qualifiers/" xmlns:sio="http://semanticscience.org/resource/" xmlns:eisbm="http://www.eisbm.org/">
///     <rdf:Description rdf:about="#glyph1">
///       <bqbiol:is>
///         <rdf:Bag>
///           <rdf:li rdf:resource="http://identifiers.org/CHEBI:15422"/>
///         </rdf:Bag>
///       </bqbiol:is>
///     </rdf:Description>
///   </rdf:RDF>
/// </annotation>"##;
///
/// let annotation = Annotation::from_xml_str(text, &config)?;
/// assert_eq!(annotation.len(), 1);
/// assert_eq!(annotation.to_xml_string(&config)?, text);
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Annotation {
    graphs: Vec<TripleStore>,
}

impl Annotation {
    /// Creates an annotation without graphs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a graph.
    pub fn add_graph(&mut self, graph: TripleStore) {
        self.graphs.push(graph);
    }

    pub fn graphs(&self) -> &[TripleStore] {
        &self.graphs
    }

    pub fn iter(&self) -> slice::Iter<'_, TripleStore> {
        self.graphs.iter()
    }

    pub fn len(&self) -> usize {
        self.graphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graphs.is_empty()
    }

    /// Reads the annotation wrapper `element`.
    ///
    /// Fails if `element` is not the configured wrapper. Namespaces declared on the wrapper are
    /// visible to the RDF blocks. RDF blocks that cannot be read become empty graphs and other
    /// children are skipped.
    pub fn from_xml(element: &Element, config: &AnnotationConfig) -> Result<Self, StructureError> {
        if element.name() != config.wrapper_tag() {
            return Err(StructureError {
                expected: config.wrapper_tag().to_owned(),
                found: element.name().to_owned(),
            });
        }

        let importer = RdfXmlImporter::new(config.registry());
        let scope = element.namespace_declarations().collect::<Vec<_>>();
        let mut annotation = Self::new();
        for child in element.child_elements() {
            if child.name() == config.rdf_block_tag() {
                annotation.add_graph(importer.import_in_scope(child, &scope));
            } else {
                tracing::debug!(element = child.name(), "Skipping non-RDF annotation content");
            }
        }
        Ok(annotation)
    }

    /// Writes the annotation wrapper holding one RDF block per graph.
    pub fn to_xml(&self, config: &AnnotationConfig) -> Result<Element, ExportError> {
        let exporter = RdfXmlExporter::new(config.registry());
        let mut wrapper = Element::new(config.wrapper_tag());
        for graph in &self.graphs {
            let mut block = exporter.export_element(graph)?;
            block.set_name(config.rdf_block_tag());
            wrapper.push_child(block);
        }
        Ok(wrapper)
    }

    /// Reads an annotation wrapper given as text.
    pub fn from_xml_str(text: &str, config: &AnnotationConfig) -> Result<Self, AnnotationError> {
        Ok(Self::from_xml(&Element::parse(text)?, config)?)
    }

    /// Writes the annotation wrapper as indented text.
    pub fn to_xml_string(&self, config: &AnnotationConfig) -> Result<String, AnnotationError> {
        let buffer = self.to_xml(config)?.write_to(Vec::new())?;
        Ok(String::from_utf8(buffer)?)
    }
}

impl<'a> IntoIterator for &'a Annotation {
    type Item = &'a TripleStore;
    type IntoIter = slice::Iter<'a, TripleStore>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<TripleStore> for Annotation {
    fn from_iter<T: IntoIterator<Item = TripleStore>>(iter: T) -> Self {
        Self {
            graphs: iter.into_iter().collect(),
        }
    }
}
