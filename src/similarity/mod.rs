//! Synset similarity measures
//!
//! Eight measures over one taxonomy, dispatched through the closed
//! [`Algorithm`] enum:
//!
//! - structural: PATH, WUP, LCH
//! - information content: RES, JCN, LIN
//! - gloss overlap: LESK
//! - directed paths: HSO
//!
//! Synsets of different parts of speech always score 0 with no subsumer.

mod algorithm;
mod cache;
mod content;
mod hso;
mod lesk;
mod structural;

pub use algorithm::Algorithm;
pub use cache::{CacheStats, ScoreCache};
pub use content::JCN_MAX;
pub use hso::{HSO_C, HSO_K, HSO_MAX_DIRECTION_CHANGES, HSO_MAX_PATH_LENGTH};
pub use lesk::{extended_gloss, RELATED_GLOSS_LIMIT};

use crate::information::InformationContent;
use crate::taxonomy::{SynsetIdx, TaxonomyGraph};

/// Score of one synset pair with the subsumer it was derived from, if any
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SynsetScore {
    pub value: f64,
    pub lcs: Option<SynsetIdx>,
}

impl SynsetScore {
    pub const ZERO: SynsetScore = SynsetScore {
        value: 0.0,
        lcs: None,
    };

    pub fn new(value: f64, lcs: Option<SynsetIdx>) -> Self {
        Self { value, lcs }
    }
}

/// The measures bound to one graph and its information-content model
#[derive(Debug, Clone, Copy)]
pub struct Measures<'a> {
    graph: &'a TaxonomyGraph,
    ic: &'a InformationContent,
}

impl<'a> Measures<'a> {
    pub fn new(graph: &'a TaxonomyGraph, ic: &'a InformationContent) -> Self {
        Self { graph, ic }
    }

    pub fn graph(&self) -> &'a TaxonomyGraph {
        self.graph
    }

    pub fn information_content(&self) -> &'a InformationContent {
        self.ic
    }

    /// Score a synset pair with one measure
    pub fn score(&self, algorithm: Algorithm, s1: SynsetIdx, s2: SynsetIdx) -> SynsetScore {
        if self.graph.pos_of(s1) != self.graph.pos_of(s2) {
            return SynsetScore::ZERO;
        }
        match algorithm {
            Algorithm::Path => structural::path(self.graph, s1, s2),
            Algorithm::Wup => structural::wup(self.graph, s1, s2),
            Algorithm::Lch => structural::lch(self.graph, s1, s2),
            Algorithm::Res => content::res(self.graph, self.ic, s1, s2),
            Algorithm::Jcn => content::jcn(self.graph, self.ic, s1, s2),
            Algorithm::Lin => content::lin(self.graph, self.ic, s1, s2),
            Algorithm::Lesk => lesk::lesk(self.graph, s1, s2),
            Algorithm::Hso => hso::hso(self.graph, s1, s2),
        }
    }

    /// Score a pair of synsets given by identifier
    pub fn score_ids(&self, algorithm: Algorithm, id1: &str, id2: &str) -> crate::Result<f64> {
        let s1 = self.graph.lookup(id1)?;
        let s2 = self.graph.lookup(id2)?;
        Ok(self.score(algorithm, s1, s2).value)
    }
}
