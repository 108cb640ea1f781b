//! Lookup tools over the taxonomy and the algorithm catalogue

mod list_algorithms;
mod lookup_synsets;

pub use list_algorithms::ListAlgorithmsTool;
pub use lookup_synsets::LookupSynsetsTool;
