//! Structural rewrites restoring the compact idioms of annotation documents.
//!
//! The passes must run in the order of [`FixupPass::ORDERED`]: list items are only compacted
//! inside containers restored by the first pass, and `rdf:parseType` markers are only removed
//! once the items that carry them have been compacted.

use sbgnml_rdf_model::vocab::{rdf, sio};
use sbgnml_rdf_model::NamedNodeRef;
use sbgnml_rdf_xml::{Element, XmlNode};

const DESCRIPTION: &str = "rdf:Description";
const TYPE: &str = "rdf:type";
const RESOURCE: &str = "rdf:resource";
const ITEM: &str = "rdf:li";
const VALUE: &str = "rdf:value";
const PARSE_TYPE: &str = "rdf:parseType";
const CONTAINERS: [(&str, NamedNodeRef<'_>); 3] = [
    ("rdf:Bag", rdf::BAG),
    ("rdf:Seq", rdf::SEQ),
    ("rdf:Alt", rdf::ALT),
];

/// A rewrite pass over an RDF/XML element tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FixupPass {
    /// Turns an `rdf:Description` typed as `rdf:Bag`, `rdf:Seq` or `rdf:Alt` into a container
    /// element.
    RestoreContainers,
    /// Turns a container item holding a `SIO_000116` key and an `rdf:value` into one empty item
    /// carrying both as attributes.
    CompactItems,
    /// Removes `rdf:parseType="Resource"`, nesting the element content in an `rdf:Description`.
    ElideParseType,
}

impl FixupPass {
    /// All passes in the order they have to run in.
    pub const ORDERED: [Self; 3] = [
        Self::RestoreContainers,
        Self::CompactItems,
        Self::ElideParseType,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::RestoreContainers => "restore-containers",
            Self::CompactItems => "compact-items",
            Self::ElideParseType => "elide-parse-type",
        }
    }

    /// Applies the pass to `root` and its descendants, returning the number of rewritten elements.
    ///
    /// Applying a pass to its own output rewrites nothing.
    pub fn apply(self, root: &mut Element) -> usize {
        match self {
            Self::RestoreContainers => restore_containers(root),
            Self::CompactItems => compact_items(root),
            Self::ElideParseType => elide_parse_type(root),
        }
    }
}

/// Applies all passes in order and returns the total number of rewritten elements.
pub fn apply_fixups(root: &mut Element) -> usize {
    FixupPass::ORDERED
        .into_iter()
        .map(|pass| {
            let rewritten = pass.apply(root);
            tracing::debug!(pass = pass.name(), rewritten, "Applied RDF/XML fixup");
            rewritten
        })
        .sum()
}

fn restore_containers(element: &mut Element) -> usize {
    let mut rewritten = 0;
    if element.name() == DESCRIPTION {
        if let Some((position, container)) = find_container_type(element) {
            element.children_mut().remove(position);
            element.set_name(container);
            rewritten += 1;
        }
    }
    rewritten
        + element
            .child_elements_mut()
            .map(restore_containers)
            .sum::<usize>()
}

/// Returns the position of an `rdf:type` child naming a container class and the container name.
fn find_container_type(description: &Element) -> Option<(usize, &'static str)> {
    description
        .children()
        .iter()
        .enumerate()
        .find_map(|(position, child)| {
            let child = child.as_element()?;
            if child.name() != TYPE || !child.children().is_empty() {
                return None;
            }
            let mut attributes = child.attributes();
            let (name, class) = attributes.next()?;
            if name != RESOURCE || attributes.next().is_some() {
                return None;
            }
            CONTAINERS
                .iter()
                .find(|(_, iri)| iri.as_str() == class)
                .map(|(name, _)| (position, *name))
        })
}

fn compact_items(element: &mut Element) -> usize {
    let mut rewritten = 0;
    if is_container(element) {
        for item in element.child_elements_mut() {
            if let Some(compacted) = compact_item(item) {
                *item = compacted;
                rewritten += 1;
            }
        }
    }
    rewritten
        + element
            .child_elements_mut()
            .map(compact_items)
            .sum::<usize>()
}

fn is_container(element: &Element) -> bool {
    CONTAINERS.iter().any(|(name, _)| *name == element.name())
}

/// Returns the compact form of a list item holding exactly one key and one value.
fn compact_item(item: &Element) -> Option<Element> {
    if item.name() != ITEM
        || !item
            .attributes()
            .all(|attribute| attribute == (PARSE_TYPE, "Resource"))
    {
        return None;
    }
    let [XmlNode::Element(first), XmlNode::Element(second)] = item.children() else {
        return None;
    };
    let (key, value) = if first.name() == VALUE {
        (second, first)
    } else {
        (first, second)
    };
    if key.prefix().is_none()
        || key.local_name() != sio::HAS_VALUE_LOCAL_NAME
        || value.name() != VALUE
        || key.attributes().next().is_some()
        || value.attributes().next().is_some()
    {
        return None;
    }
    Some(
        Element::new(ITEM)
            .with_attribute(key.name(), key.text()?)
            .with_attribute(VALUE, value.text()?),
    )
}

fn elide_parse_type(element: &mut Element) -> usize {
    let mut rewritten = 0;
    if element.attribute(PARSE_TYPE) == Some("Resource") {
        element.remove_attribute(PARSE_TYPE);
        let content = element.take_children();
        element.push_child(Element::new(DESCRIPTION).with_children(content));
        rewritten += 1;
    }
    rewritten
        + element
            .child_elements_mut()
            .map(elide_parse_type)
            .sum::<usize>()
}
