use sbgnml_rdf_model::{GraphName, NamedNodeRef, Quad, QuadRef, SubjectRef, TermRef, Triple};
use std::slice;
use std::vec;

/// An ordered sequence of statements scoped to one RDF block.
///
/// Statements keep their insertion order, which makes serialization deterministic. Duplicates are
/// kept as well.
///
/// ```
/// use sbgnml_rdf_model::{vocab::bqmodel, NamedNode, Triple};
/// use sbgnml_rdf_storage::TripleStore;
///
/// let mut store = TripleStore::new();
/// store.add_triple(Triple::new(
///     NamedNode::new("http://sbgn.org/document#_000001")?,
///     bqmodel::IS,
///     NamedNode::new("http://identifiers.org/biomodels.db/BIOMD0000000004")?,
/// ));
/// assert_eq!(store.len(), 1);
/// assert_eq!(store.quads_for_pattern(None, Some(bqmodel::IS), None).count(), 1);
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TripleStore {
    quads: Vec<Quad>,
}

impl TripleStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a statement.
    pub fn add(&mut self, quad: impl Into<Quad>) {
        self.quads.push(quad.into());
    }

    /// Appends a statement of the default graph.
    pub fn add_triple(&mut self, triple: impl Into<Triple>) {
        self.quads
            .push(triple.into().in_graph(GraphName::DefaultGraph));
    }

    /// Returns the statements matching the given terms in insertion order.
    ///
    /// [`None`] matches any term. The scan is linear.
    pub fn quads_for_pattern<'a>(
        &'a self,
        subject: Option<SubjectRef<'a>>,
        predicate: Option<NamedNodeRef<'a>>,
        object: Option<TermRef<'a>>,
    ) -> impl Iterator<Item = &'a Quad> + 'a {
        self.quads.iter().filter(move |quad| {
            matches_term(subject, quad.subject.as_ref())
                && matches_term(predicate, quad.predicate.as_ref())
                && matches_term(object, quad.object.as_ref())
        })
    }

    /// Returns all statements in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, Quad> {
        self.quads.iter()
    }

    pub fn len(&self) -> usize {
        self.quads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quads.is_empty()
    }

    /// Returns whether the store holds the statement at least once.
    pub fn contains<'a>(&self, quad: impl Into<QuadRef<'a>>) -> bool {
        let quad = quad.into();
        self.quads.iter().any(|candidate| candidate.as_ref() == quad)
    }
}

fn matches_term<T: PartialEq>(pattern: Option<T>, term: T) -> bool {
    pattern.is_none() || pattern == Some(term)
}

impl Extend<Quad> for TripleStore {
    fn extend<T: IntoIterator<Item = Quad>>(&mut self, iter: T) {
        self.quads.extend(iter);
    }
}

impl FromIterator<Quad> for TripleStore {
    fn from_iter<T: IntoIterator<Item = Quad>>(iter: T) -> Self {
        Self {
            quads: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for TripleStore {
    type Item = Quad;
    type IntoIter = vec::IntoIter<Quad>;

    fn into_iter(self) -> Self::IntoIter {
        self.quads.into_iter()
    }
}

impl<'a> IntoIterator for &'a TripleStore {
    type Item = &'a Quad;
    type IntoIter = slice::Iter<'a, Quad>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
