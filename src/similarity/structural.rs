//! Path- and depth-based measures: PATH, WUP, LCH

use crate::search::AncestorSearch;
use crate::taxonomy::{SynsetIdx, TaxonomyGraph};

use super::SynsetScore;

/// `1 / (len + 1)` over the shortest path through a common subsumer
pub fn path(graph: &TaxonomyGraph, s1: SynsetIdx, s2: SynsetIdx) -> SynsetScore {
    if s1 == s2 {
        return SynsetScore::new(1.0, Some(s1));
    }
    match AncestorSearch::new(graph).connection(s1, s2) {
        Some(c) => SynsetScore::new(1.0 / (c.path_length as f64 + 1.0), Some(c.lcs.synset)),
        None => SynsetScore::ZERO,
    }
}

/// Wu-Palmer: `2 * depth(lcs) / (depth(s1) + depth(s2))`
pub fn wup(graph: &TaxonomyGraph, s1: SynsetIdx, s2: SynsetIdx) -> SynsetScore {
    if s1 == s2 {
        return SynsetScore::new(1.0, Some(s1));
    }
    let Some(lcs) = AncestorSearch::new(graph).lcs(s1, s2) else {
        return SynsetScore::ZERO;
    };
    let depths = graph.depth_of(s1) + graph.depth_of(s2);
    if depths == 0 {
        return SynsetScore::new(1.0, Some(lcs.synset));
    }
    let value = 2.0 * lcs.depth as f64 / depths as f64;
    SynsetScore::new(value, Some(lcs.synset))
}

/// Leacock-Chodorow: `ln((2D + 1) / (len + 1))` with `D` the deepest level of
/// the part of speech; 0 once the path is as long as the taxonomy allows
pub fn lch(graph: &TaxonomyGraph, s1: SynsetIdx, s2: SynsetIdx) -> SynsetScore {
    let scale = 2.0 * graph.max_depth(graph.pos_of(s1)) as f64 + 1.0;
    if s1 == s2 {
        return SynsetScore::new(scale.ln(), Some(s1));
    }
    let Some(c) = AncestorSearch::new(graph).connection(s1, s2) else {
        return SynsetScore::ZERO;
    };
    let steps = c.path_length as f64 + 1.0;
    if steps >= scale {
        return SynsetScore::new(0.0, Some(c.lcs.synset));
    }
    SynsetScore::new((scale / steps).ln(), Some(c.lcs.synset))
}
