use sbgnml_rdf_model::NamespaceRegistry;

/// Where annotations live in the host document and which namespaces they use.
///
/// ```
/// use sbgnml_rdf::AnnotationConfig;
///
/// let config = AnnotationConfig::default().with_wrapper_tag("sbgn:annotation");
/// assert_eq!(config.wrapper_tag(), "sbgn:annotation");
/// assert_eq!(config.rdf_block_tag(), "rdf:RDF");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnnotationConfig {
    registry: NamespaceRegistry,
    wrapper_tag: String,
    rdf_block_tag: String,
}

impl Default for AnnotationConfig {
    fn default() -> Self {
        Self {
            registry: NamespaceRegistry::default(),
            wrapper_tag: "annotation".to_owned(),
            rdf_block_tag: "rdf:RDF".to_owned(),
        }
    }
}

impl AnnotationConfig {
    /// Uses `registry` to import and export the RDF blocks.
    #[must_use]
    pub fn with_namespaces(mut self, registry: NamespaceRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Sets the tag of the element wrapping the RDF blocks.
    #[must_use]
    pub fn with_wrapper_tag(mut self, tag: impl Into<String>) -> Self {
        self.wrapper_tag = tag.into();
        self
    }

    /// Sets the tag of the RDF blocks inside the wrapper.
    #[must_use]
    pub fn with_rdf_block_tag(mut self, tag: impl Into<String>) -> Self {
        self.rdf_block_tag = tag.into();
        self
    }

    pub fn registry(&self) -> &NamespaceRegistry {
        &self.registry
    }

    pub fn wrapper_tag(&self) -> &str {
        &self.wrapper_tag
    }

    pub fn rdf_block_tag(&self) -> &str {
        &self.rdf_block_tag
    }
}
