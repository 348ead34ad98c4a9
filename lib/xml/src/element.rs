use crate::{reader, writer, XmlError};
use std::fmt;
use std::io::Write;
use std::str::FromStr;

/// A child of an [`Element`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum XmlNode {
    Element(Element),
    Text(String),
}

impl XmlNode {
    /// Returns the element if this node is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) => None,
        }
    }

    /// Returns the text if this node is a text node.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Element(_) => None,
            Self::Text(text) => Some(text),
        }
    }
}

impl From<Element> for XmlNode {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<String> for XmlNode {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for XmlNode {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

/// An XML element with its attributes and children.
///
/// Names are qualified names as written in the document (`rdf:Description`). Attributes keep their
/// insertion order, which is also the order they are serialized in.
///
/// ```
/// use sbgnml_rdf_xml::Element;
///
/// let element = Element::new("rdf:li")
///     .with_attribute("rdf:resource", "http://identifiers.org/taxonomy/9606");
/// assert_eq!(
///     element.to_string(),
///     r#"<rdf:li rdf:resource="http://identifiers.org/taxonomy/9606"/>"#
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<XmlNode>,
}

impl Element {
    /// Creates an element without attributes and children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Parses the root element of an XML document.
    ///
    /// The XML declaration, comments and processing instructions are skipped. Whitespace-only text
    /// between child elements is dropped.
    pub fn parse(text: &str) -> Result<Self, XmlError> {
        reader::parse(text)
    }

    /// The qualified name of the element.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the element.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// The prefix of the qualified name, if any.
    pub fn prefix(&self) -> Option<&str> {
        self.name.split_once(':').map(|(prefix, _)| prefix)
    }

    /// The name without its prefix.
    pub fn local_name(&self) -> &str {
        self.name
            .split_once(':')
            .map_or(self.name.as_str(), |(_, local_name)| local_name)
    }

    /// Returns the value of the attribute `name`.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Iterates over the `(name, value)` pairs of the attributes.
    pub fn attributes(&self) -> impl ExactSizeIterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Sets an attribute, replacing the value in place if it already exists.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(key, _)| *key == name) {
            Some((_, current)) => *current = value,
            None => self.attributes.push((name, value)),
        }
    }

    /// Sets an attribute and returns the element.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Removes the attribute `name` and returns its value.
    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        let position = self.attributes.iter().position(|(key, _)| key == name)?;
        Some(self.attributes.remove(position).1)
    }

    /// Returns the namespace declarations of this element as `(prefix, IRI)` pairs.
    ///
    /// The default namespace is returned with an empty prefix.
    pub fn namespace_declarations(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes().filter_map(|(key, value)| {
            if key == "xmlns" {
                Some(("", value))
            } else {
                key.strip_prefix("xmlns:").map(|prefix| (prefix, value))
            }
        })
    }

    pub fn children(&self) -> &[XmlNode] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut Vec<XmlNode> {
        &mut self.children
    }

    /// Removes all children and returns them.
    pub fn take_children(&mut self) -> Vec<XmlNode> {
        std::mem::take(&mut self.children)
    }

    /// Appends a child.
    pub fn push_child(&mut self, child: impl Into<XmlNode>) {
        self.children.push(child.into());
    }

    /// Appends a child and returns the element.
    #[must_use]
    pub fn with_child(mut self, child: impl Into<XmlNode>) -> Self {
        self.push_child(child);
        self
    }

    /// Appends children and returns the element.
    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = XmlNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Keeps only the children for which `keep` returns `true`.
    pub fn retain_children(&mut self, keep: impl FnMut(&XmlNode) -> bool) {
        self.children.retain(keep);
    }

    /// Iterates over the element children, skipping text.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(XmlNode::as_element)
    }

    /// Iterates mutably over the element children, skipping text.
    pub fn child_elements_mut(&mut self) -> impl Iterator<Item = &mut Element> {
        self.children.iter_mut().filter_map(|child| match child {
            XmlNode::Element(element) => Some(element),
            XmlNode::Text(_) => None,
        })
    }

    /// Returns the first element child named `name`.
    pub fn find_child(&self, name: &str) -> Option<&Element> {
        self.child_elements().find(|child| child.name == name)
    }

    /// Returns the concatenated text if the element has no element children.
    ///
    /// An element without any child has the empty text.
    pub fn text(&self) -> Option<String> {
        self.children
            .iter()
            .map(XmlNode::as_text)
            .collect::<Option<Vec<_>>>()
            .map(|texts| texts.concat())
    }

    /// Writes the element to `output` indented by two spaces per level.
    pub fn write_to<W: Write>(&self, output: W) -> Result<W, XmlError> {
        writer::write(self, output)
    }

    /// Iterates over this element and all its descendant elements in document order.
    pub fn descendants(&self) -> impl Iterator<Item = &Element> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let element = stack.pop()?;
            stack.extend(element.child_elements().collect::<Vec<_>>().into_iter().rev());
            Some(element)
        })
    }
}

impl FromStr for Element {
    type Err = XmlError;

    fn from_str(text: &str) -> Result<Self, XmlError> {
        Self::parse(text)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let buffer = self.write_to(Vec::new()).map_err(|_| fmt::Error)?;
        f.write_str(std::str::from_utf8(&buffer).map_err(|_| fmt::Error)?)
    }
}
