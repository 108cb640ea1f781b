//! Taxonomy graph of synsets
//!
//! Synsets linked by hypernym/hyponym edges (plus same-POS "similar" edges),
//! with precomputed minimum depths, one root per part of speech and a literal
//! index. Built once at start-up and shared read-only afterwards.

mod builder;
mod graph;
mod loader;

pub use builder::{TaxonomyBuilder, SYNTHETIC_ROOT_PREFIX};
pub use graph::{SynsetIdx, TaxonomyGraph};
pub use loader::{load_frequencies, load_records, load_taxonomy, parse_records, FrequencyRecord};
