//! Contains the in-memory [`TripleStore`] holding the statements of one annotation graph.

mod triple_store;

pub use triple_store::TripleStore;
