use oxiri::IriParseError;

/// An error raised while building a [`NamespaceRegistry`](crate::NamespaceRegistry).
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// The IRI bound to a prefix, or the base IRI, is not a valid absolute IRI.
    #[error("Invalid IRI '{iri}': {error}")]
    InvalidIri {
        /// The IRI itself.
        iri: String,
        /// The parsing error.
        #[source]
        error: IriParseError,
    },
    /// The prefix is not a valid XML name without a colon.
    #[error("Invalid namespace prefix '{0}'")]
    InvalidPrefix(String),
    /// The prefix is bound more than once.
    #[error("The namespace prefix '{0}' is bound more than once")]
    DuplicatePrefix(String),
}
