#![doc = include_str!("../README.md")]
#![doc(test(attr(deny(warnings))))]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod annotation;
mod config;
pub mod error;

pub use annotation::Annotation;
pub use config::AnnotationConfig;

pub mod model {
    pub use sbgnml_rdf_model::*;
}

pub mod xml {
    pub use sbgnml_rdf_xml::*;
}

pub mod storage {
    pub use sbgnml_rdf_storage::*;
}

pub mod io {
    pub use sbgnml_rdf_io::*;
}
