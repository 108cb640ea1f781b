//! Hirst-St-Onge: `C - len - k * direction_changes` over the cheapest
//! bounded path

use crate::search::{AncestorSearch, PathLimits};
use crate::taxonomy::{SynsetIdx, TaxonomyGraph};

use super::SynsetScore;

pub const HSO_C: f64 = 16.0;
pub const HSO_K: u32 = 1;
/// Longest accepted path in edges. The bound is inclusive: an 8-edge path
/// scores, a 9-edge path does not. Searches that keep expanding paths which
/// already have 8 edges accept a 9th; this one does not.
pub const HSO_MAX_PATH_LENGTH: u32 = 8;
pub const HSO_MAX_DIRECTION_CHANGES: u32 = 5;

/// Search bounds matching the HSO constants
pub fn limits() -> PathLimits {
    PathLimits {
        max_length: HSO_MAX_PATH_LENGTH,
        max_changes: HSO_MAX_DIRECTION_CHANGES,
        change_penalty: HSO_K,
    }
}

pub fn hso(graph: &TaxonomyGraph, s1: SynsetIdx, s2: SynsetIdx) -> SynsetScore {
    if s1 == s2 {
        return SynsetScore::new(HSO_C, None);
    }
    match AncestorSearch::new(graph).path_edges(s1, s2, &limits()) {
        Some(path) => {
            let cost = path.len() as f64 + (HSO_K * path.direction_changes) as f64;
            SynsetScore::new((HSO_C - cost).max(0.0), None)
        }
        None => SynsetScore::ZERO,
    }
}
