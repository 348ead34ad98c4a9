use crate::vocab::{bqbiol, bqmodel, eisbm, rdf, sio};
use crate::RegistryError;
use oxiri::Iri;
use oxrdf::{IriParseError, NamedNode};

/// The base IRI document-local references such as `#_000001` are resolved against.
pub const DEFAULT_BASE_IRI: &str = "http://sbgn.org/document";

/// An immutable table of namespace prefixes shared by annotation import and export.
///
/// The registry determines the prefixed names written to RDF/XML and the base IRI used to resolve
/// document-local references. It is passed explicitly to the importer and exporter, so alternate
/// prefix sets can be used without touching their logic.
///
/// The `rdf` prefix is always bound to the RDF namespace.
///
/// ```
/// use sbgnml_rdf_model::NamespaceRegistry;
///
/// let registry = NamespaceRegistry::default();
/// assert_eq!(
///     registry.resolve("bqmodel"),
///     Some("http://biomodels.net/model-qualifiers/")
/// );
/// assert_eq!(
///     registry.compact("http://biomodels.net/model-qualifiers/is").as_deref(),
///     Some("bqmodel:is")
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamespaceRegistry {
    entries: Vec<(String, String)>,
    base_iri: String,
}

impl Default for NamespaceRegistry {
    /// Returns the registry of SBGN-ML annotations: `rdf`, `bqmodel`, `bqbiol`, `sio` and `eisbm`.
    fn default() -> Self {
        let entries = [
            (rdf::PREFIX, rdf::NAMESPACE),
            (bqmodel::PREFIX, bqmodel::NAMESPACE),
            (bqbiol::PREFIX, bqbiol::NAMESPACE),
            (sio::PREFIX, sio::NAMESPACE),
            (eisbm::PREFIX, eisbm::NAMESPACE),
        ];
        Self {
            entries: entries
                .into_iter()
                .map(|(prefix, iri)| (prefix.to_owned(), iri.to_owned()))
                .collect(),
            base_iri: DEFAULT_BASE_IRI.to_owned(),
        }
    }
}

impl NamespaceRegistry {
    /// Creates a builder that only knows the `rdf` prefix.
    pub fn builder() -> NamespaceRegistryBuilder {
        NamespaceRegistryBuilder {
            entries: vec![(rdf::PREFIX.to_owned(), rdf::NAMESPACE.to_owned())],
            base_iri: DEFAULT_BASE_IRI.to_owned(),
        }
    }

    /// Returns the namespace IRI bound to `prefix`.
    pub fn resolve(&self, prefix: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == prefix)
            .map(|(_, iri)| iri.as_str())
    }

    /// Returns the `(prefix, namespace)` entries in registration order.
    pub fn entries(&self) -> impl ExactSizeIterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(prefix, iri)| (prefix.as_str(), iri.as_str()))
    }

    /// Returns the prefix bound to exactly `namespace`.
    pub fn prefix_for(&self, namespace: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, iri)| iri == namespace)
            .map(|(prefix, _)| prefix.as_str())
    }

    /// Expands a prefixed name such as `bqmodel:is` into an IRI.
    pub fn expand(&self, qualified_name: &str) -> Option<String> {
        let (prefix, local_name) = qualified_name.split_once(':')?;
        self.resolve(prefix)
            .map(|namespace| format!("{namespace}{local_name}"))
    }

    /// Writes `iri` as a prefixed name.
    ///
    /// The longest matching namespace wins. Returns [`None`] if no namespace matches or the
    /// remaining local name is not a valid XML name.
    pub fn compact(&self, iri: &str) -> Option<String> {
        self.entries
            .iter()
            .filter_map(|(prefix, namespace)| {
                let local_name = iri.strip_prefix(namespace.as_str())?;
                is_ncname(local_name).then_some((prefix, namespace.len(), local_name))
            })
            .max_by_key(|(_, namespace_len, _)| *namespace_len)
            .map(|(prefix, _, local_name)| format!("{prefix}:{local_name}"))
    }

    /// The base IRI document-local references are resolved against.
    pub fn base_iri(&self) -> &str {
        &self.base_iri
    }

    /// Returns the IRI of the document-local reference `#fragment`.
    pub fn document_iri(&self, fragment: &str) -> Result<NamedNode, IriParseError> {
        NamedNode::new(format!("{}#{fragment}", self.base_iri))
    }

    /// Writes `iri` relative to the base IRI if it is the document itself or a document-local
    /// reference.
    ///
    /// Other IRIs are returned unchanged.
    pub fn relativize<'a>(&self, iri: &'a str) -> &'a str {
        match iri.strip_prefix(self.base_iri.as_str()) {
            Some(reference) if reference.is_empty() || reference.starts_with('#') => reference,
            _ => iri,
        }
    }
}

/// Builds a custom [`NamespaceRegistry`].
///
/// ```
/// use sbgnml_rdf_model::NamespaceRegistry;
///
/// let registry = NamespaceRegistry::builder()
///     .with_prefix("ex", "http://example.com/")
///     .with_base_iri("http://example.com/document")
///     .build()?;
/// assert_eq!(registry.entries().len(), 2);
/// assert_eq!(registry.relativize("http://example.com/document#a"), "#a");
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Clone, Debug)]
pub struct NamespaceRegistryBuilder {
    entries: Vec<(String, String)>,
    base_iri: String,
}

impl NamespaceRegistryBuilder {
    /// Binds `prefix` to the namespace `iri`.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>, iri: impl Into<String>) -> Self {
        self.entries.push((prefix.into(), iri.into()));
        self
    }

    /// Sets the base IRI of document-local references.
    #[must_use]
    pub fn with_base_iri(mut self, base_iri: impl Into<String>) -> Self {
        self.base_iri = base_iri.into();
        self
    }

    /// Validates the prefixes and IRIs and builds the registry.
    pub fn build(self) -> Result<NamespaceRegistry, RegistryError> {
        for (index, (prefix, iri)) in self.entries.iter().enumerate() {
            if !is_ncname(prefix) {
                return Err(RegistryError::InvalidPrefix(prefix.clone()));
            }
            if self.entries[..index].iter().any(|(other, _)| other == prefix) {
                return Err(RegistryError::DuplicatePrefix(prefix.clone()));
            }
            validate_iri(iri)?;
        }
        validate_iri(&self.base_iri)?;
        Ok(NamespaceRegistry {
            entries: self.entries,
            base_iri: self.base_iri,
        })
    }
}

fn validate_iri(iri: &str) -> Result<(), RegistryError> {
    Iri::parse(iri)
        .map(|_| ())
        .map_err(|error| RegistryError::InvalidIri {
            iri: iri.to_owned(),
            error,
        })
}

/// Returns whether `name` is an XML name without a colon.
pub fn is_ncname(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(is_name_start_char) && chars.all(is_name_char)
}

fn is_name_start_char(c: char) -> bool {
    matches!(c,
        'A'..='Z'
        | '_'
        | 'a'..='z'
        | '\u{C0}'..='\u{D6}'
        | '\u{D8}'..='\u{F6}'
        | '\u{F8}'..='\u{2FF}'
        | '\u{370}'..='\u{37D}'
        | '\u{37F}'..='\u{1FFF}'
        | '\u{200C}'..='\u{200D}'
        | '\u{2070}'..='\u{218F}'
        | '\u{2C00}'..='\u{2FEF}'
        | '\u{3001}'..='\u{D7FF}'
        | '\u{F900}'..='\u{FDCF}'
        | '\u{FDF0}'..='\u{FFFD}'
        | '\u{10000}'..='\u{EFFFF}')
}

fn is_name_char(c: char) -> bool {
    is_name_start_char(c)
        || matches!(c, '-' | '.' | '0'..='9' | '\u{B7}' | '\u{0300}'..='\u{036F}' | '\u{203F}'..='\u{2040}')
}
