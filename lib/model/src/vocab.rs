//! Namespaces and terms used by SBGN-ML annotations.

pub mod rdf {
    //! [RDF](https://www.w3.org/TR/rdf11-concepts/) vocabulary.
    pub use oxrdf::vocab::rdf::{ALT, BAG, SEQ, TYPE, VALUE};

    pub const PREFIX: &str = "rdf";
    pub const NAMESPACE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

    /// Returns the index `n` if `iri` is the container membership property `rdf:_n`.
    pub fn membership_index(iri: &str) -> Option<u32> {
        let digits = iri.strip_prefix(NAMESPACE)?.strip_prefix('_')?;
        if digits.is_empty() || digits.starts_with('0') || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok()
    }
}

pub use oxrdf::vocab::xsd;

pub mod bqmodel {
    //! [BioModels.net](http://co.mbine.org/standards/qualifiers) model qualifiers.
    use oxrdf::NamedNodeRef;

    pub const PREFIX: &str = "bqmodel";
    pub const NAMESPACE: &str = "http://biomodels.net/model-qualifiers/";

    pub const IS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://biomodels.net/model-qualifiers/is");
}

pub mod bqbiol {
    //! [BioModels.net](http://co.mbine.org/standards/qualifiers) biology qualifiers.
    use oxrdf::NamedNodeRef;

    pub const PREFIX: &str = "bqbiol";
    pub const NAMESPACE: &str = "http://biomodels.net/biology-qualifiers/";

    pub const IS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://biomodels.net/biology-qualifiers/is");
    pub const IS_VERSION_OF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://biomodels.net/biology-qualifiers/isVersionOf");
}

pub mod sio {
    //! [Semanticscience Integrated Ontology](http://semanticscience.org/) terms.
    use oxrdf::NamedNodeRef;

    pub const PREFIX: &str = "sio";
    pub const NAMESPACE: &str = "http://semanticscience.org/resource/";

    /// Local name of the "has value" predicate. Compact key/value items use it as key designator.
    pub const HAS_VALUE_LOCAL_NAME: &str = "SIO_000116";
    /// `sio:SIO_000116`, "has value".
    pub const HAS_VALUE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://semanticscience.org/resource/SIO_000116");
}

pub mod eisbm {
    //! [EISBM](http://www.eisbm.org/) annotation terms.
    use oxrdf::NamedNodeRef;

    pub const PREFIX: &str = "eisbm";
    pub const NAMESPACE: &str = "http://www.eisbm.org/";

    pub const HAS_PROPERTY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.eisbm.org/hasProperty");
}
