//! Rearranges RDF/XML into the striped layout the fixup passes work on.
//!
//! The RDF/XML writer emits one node element per subject and links blank nodes with
//! `rdf:nodeID`. This module reads the statements of such a document back with the RDF/XML parser
//! and writes them again with every blank node that is referenced exactly once nested under the
//! property that references it:
//!
//! - a typed blank node becomes a nested `rdf:Description` holding an `rdf:type` property,
//! - an untyped blank node becomes a `rdf:parseType="Resource"` property element,
//! - container membership properties `rdf:_1` to `rdf:_n` become `rdf:li`.
//!
//! Names are qualified with the [`NamespaceRegistry`], whose prefixes are all declared on the root.

use crate::LayoutError;
use oxrdfio::{RdfFormat, RdfParser};
use sbgnml_rdf_model::vocab::{rdf, xsd};
use sbgnml_rdf_model::{
    is_ncname, BlankNode, Literal, NamespaceRegistry, Quad, SubjectRef, TermRef,
};
use sbgnml_rdf_xml::Element;
use std::collections::HashMap;

/// Returns the root of an empty RDF/XML document declaring the registry prefixes.
pub fn empty_document(registry: &NamespaceRegistry) -> Element {
    let mut root = Element::new(qualified_rdf("RDF"));
    for (prefix, namespace) in registry.entries() {
        root.set_attribute(format!("xmlns:{prefix}"), namespace);
    }
    root
}

/// Reads an RDF/XML document and writes it in the striped layout.
///
/// Blank nodes are renumbered in order of first appearance, so shared blank nodes get the same
/// `rdf:nodeID` whatever labels the document used.
pub fn stripe(document: &[u8], registry: &NamespaceRegistry) -> Result<Element, LayoutError> {
    let base_iri = registry.base_iri();
    let quads = RdfParser::from_format(RdfFormat::RdfXml)
        .with_base_iri(base_iri)
        .map_err(|error| LayoutError::InvalidIri {
            iri: base_iri.to_owned(),
            error,
        })?
        .for_reader(document)
        .collect::<Result<Vec<Quad>, _>>()?;

    let mut graph = FlatGraph::default();
    for quad in &quads {
        graph.insert(quad)?;
    }
    StripedWriter::new(registry, &graph.descriptions).write()
}

/// A blank node, numbered in order of first appearance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct BlankId(usize);

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum NodeId {
    Iri(String),
    Blank(BlankId),
}

#[derive(Clone, Debug)]
enum Object {
    Resource(String),
    Blank(BlankId),
    Literal(Literal),
}

#[derive(Debug)]
struct Description {
    subject: NodeId,
    properties: Vec<(String, Object)>,
}

impl Description {
    fn is_typed(&self) -> bool {
        self.properties
            .iter()
            .any(|(predicate, _)| predicate == rdf::TYPE.as_str())
    }
}

fn qualified_rdf(local_name: &str) -> String {
    format!("{}:{local_name}", rdf::PREFIX)
}

/// Node descriptions without nesting, one per subject in order of first appearance.
#[derive(Default)]
struct FlatGraph {
    descriptions: Vec<Description>,
    positions: HashMap<NodeId, usize>,
    blanks: HashMap<BlankNode, BlankId>,
}

impl FlatGraph {
    fn insert(&mut self, quad: &Quad) -> Result<(), LayoutError> {
        let subject = self.subject(quad.subject.as_ref())?;
        let object = self.object(quad.object.as_ref())?;
        let position = self.position(subject);
        self.descriptions[position]
            .properties
            .push((quad.predicate.as_str().to_owned(), object));
        Ok(())
    }

    fn subject(&mut self, subject: SubjectRef<'_>) -> Result<NodeId, LayoutError> {
        if let SubjectRef::NamedNode(node) = subject {
            return Ok(NodeId::Iri(node.as_str().to_owned()));
        }
        if let SubjectRef::BlankNode(node) = subject {
            return Ok(NodeId::Blank(self.blank(node.into_owned())));
        }
        Err(LayoutError::UnsupportedTerm(subject.to_string()))
    }

    fn object(&mut self, object: TermRef<'_>) -> Result<Object, LayoutError> {
        if let TermRef::NamedNode(node) = object {
            return Ok(Object::Resource(node.as_str().to_owned()));
        }
        if let TermRef::BlankNode(node) = object {
            return Ok(Object::Blank(self.blank(node.into_owned())));
        }
        if let TermRef::Literal(literal) = object {
            return Ok(Object::Literal(literal.into_owned()));
        }
        Err(LayoutError::UnsupportedTerm(object.to_string()))
    }

    fn blank(&mut self, node: BlankNode) -> BlankId {
        let next = BlankId(self.blanks.len());
        *self.blanks.entry(node).or_insert(next)
    }

    fn position(&mut self, subject: NodeId) -> usize {
        if let Some(position) = self.positions.get(&subject) {
            return *position;
        }
        let position = self.descriptions.len();
        self.positions.insert(subject.clone(), position);
        self.descriptions.push(Description {
            subject,
            properties: Vec::new(),
        });
        position
    }
}

struct StripedWriter<'a> {
    registry: &'a NamespaceRegistry,
    descriptions: &'a [Description],
    blanks: HashMap<&'a BlankId, usize>,
    references: HashMap<&'a BlankId, usize>,
    written: Vec<bool>,
}

impl<'a> StripedWriter<'a> {
    fn new(registry: &'a NamespaceRegistry, descriptions: &'a [Description]) -> Self {
        let mut blanks = HashMap::new();
        for (position, description) in descriptions.iter().enumerate() {
            if let NodeId::Blank(id) = &description.subject {
                blanks.insert(id, position);
            }
        }
        let mut references = HashMap::new();
        for (_, object) in descriptions.iter().flat_map(|d| &d.properties) {
            if let Object::Blank(id) = object {
                *references.entry(id).or_insert(0) += 1;
            }
        }
        Self {
            registry,
            descriptions,
            blanks,
            references,
            written: vec![false; descriptions.len()],
        }
    }

    fn write(mut self) -> Result<Element, LayoutError> {
        let mut root = empty_document(self.registry);
        for position in 0..self.descriptions.len() {
            if !self.written[position] && !self.is_nested(&self.descriptions[position].subject) {
                root.push_child(self.write_node(position)?);
            }
        }
        // Blank nodes that only reference each other in a cycle.
        for position in 0..self.descriptions.len() {
            if !self.written[position] {
                root.push_child(self.write_node(position)?);
            }
        }
        Ok(root)
    }

    fn reference_count(&self, id: &BlankId) -> usize {
        self.references.get(id).copied().unwrap_or(0)
    }

    fn is_nested(&self, subject: &NodeId) -> bool {
        matches!(subject, NodeId::Blank(id) if self.reference_count(id) == 1)
    }

    fn write_node(&mut self, position: usize) -> Result<Element, LayoutError> {
        self.written[position] = true;
        let descriptions = self.descriptions;
        let description = &descriptions[position];
        let mut element = Element::new(qualified_rdf("Description"));
        match &description.subject {
            NodeId::Iri(iri) => {
                element.set_attribute(qualified_rdf("about"), self.registry.relativize(iri));
            }
            NodeId::Blank(id) if self.reference_count(id) > 0 => {
                element.set_attribute(qualified_rdf("nodeID"), node_id(id));
            }
            NodeId::Blank(_) => {}
        }
        self.write_properties(description, &mut element)?;
        Ok(element)
    }

    fn write_properties(
        &mut self,
        description: &'a Description,
        element: &mut Element,
    ) -> Result<(), LayoutError> {
        for (predicate, object, is_item) in order_items(&description.properties) {
            let mut property = if is_item {
                Element::new(qualified_rdf("li"))
            } else {
                self.property_element(predicate)?
            };
            match object {
                Object::Resource(iri) => {
                    property.set_attribute(qualified_rdf("resource"), self.registry.relativize(iri));
                }
                Object::Blank(id) => self.write_blank(id, &mut property)?,
                Object::Literal(literal) => {
                    if let Some(language) = literal.language() {
                        property.set_attribute("xml:lang", language);
                    } else if literal.datatype() != xsd::STRING {
                        property.set_attribute(qualified_rdf("datatype"), literal.datatype().as_str());
                    }
                    if !literal.value().is_empty() {
                        property.push_child(literal.value());
                    }
                }
            }
            element.push_child(property);
        }
        Ok(())
    }

    fn write_blank(&mut self, id: &'a BlankId, property: &mut Element) -> Result<(), LayoutError> {
        if self.reference_count(id) != 1 {
            property.set_attribute(qualified_rdf("nodeID"), node_id(id));
            return Ok(());
        }
        let Some(&position) = self.blanks.get(id) else {
            property.set_attribute(qualified_rdf("parseType"), "Resource");
            return Ok(());
        };
        if self.written[position] {
            property.set_attribute(qualified_rdf("nodeID"), node_id(id));
            return Ok(());
        }

        self.written[position] = true;
        let descriptions = self.descriptions;
        let description = &descriptions[position];
        if description.is_typed() {
            let mut nested = Element::new(qualified_rdf("Description"));
            self.write_properties(description, &mut nested)?;
            property.push_child(nested);
        } else {
            property.set_attribute(qualified_rdf("parseType"), "Resource");
            self.write_properties(description, property)?;
        }
        Ok(())
    }

    /// Creates the element of a property, declaring its namespace inline if no prefix covers it.
    fn property_element(&self, predicate: &str) -> Result<Element, LayoutError> {
        if let Some(name) = self.registry.compact(predicate) {
            return Ok(Element::new(name));
        }
        let split = predicate
            .rfind(|c: char| c == '#' || c == '/')
            .map_or(0, |position| position + 1);
        let (namespace, local_name) = predicate.split_at(split);
        if namespace.is_empty() || !is_ncname(local_name) {
            return Err(LayoutError::UnrepresentableIri(predicate.to_owned()));
        }
        Ok(Element::new(local_name).with_attribute("xmlns", namespace))
    }
}

fn node_id(id: &BlankId) -> String {
    format!("b{}", id.0)
}

/// Orders the container membership properties by index and marks them as list items.
///
/// Only contiguous indices starting at one are written as `rdf:li`. They take the place of the
/// first membership property.
fn order_items(properties: &[(String, Object)]) -> Vec<(&str, &Object, bool)> {
    let mut items = properties
        .iter()
        .filter_map(|(predicate, object)| {
            rdf::membership_index(predicate).map(|index| (index, predicate.as_str(), object))
        })
        .collect::<Vec<_>>();
    items.sort_by_key(|(index, _, _)| *index);
    let contiguous = items
        .iter()
        .zip(1..)
        .all(|((index, _, _), expected)| *index == expected);

    if items.is_empty() || !contiguous {
        return properties
            .iter()
            .map(|(predicate, object)| (predicate.as_str(), object, false))
            .collect();
    }

    let mut items = Some(items);
    let mut ordered = Vec::with_capacity(properties.len());
    for (predicate, object) in properties {
        if rdf::membership_index(predicate).is_none() {
            ordered.push((predicate.as_str(), object, false));
        } else if let Some(items) = items.take() {
            ordered.extend(
                items
                    .into_iter()
                    .map(|(_, predicate, object)| (predicate, object, true)),
            );
        }
    }
    ordered
}
