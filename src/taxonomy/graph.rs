//! Immutable taxonomy graph

use std::collections::BTreeMap;
use std::collections::HashMap;

use crate::error::{Result, SimilarityError};
use crate::search::{IndexStats, LiteralIndex};
use crate::types::{PartOfSpeech, Synset};

/// Dense index of a synset inside one [`TaxonomyGraph`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SynsetIdx(pub(crate) u32);

impl SynsetIdx {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Synsets with hypernym/hyponym and similar edges, minimum depths, one root
/// per part of speech and a literal index.
///
/// Built once by [`TaxonomyBuilder`](super::TaxonomyBuilder); read-only afterwards.
#[derive(Debug)]
pub struct TaxonomyGraph {
    pub(crate) synsets: Vec<Synset>,
    pub(crate) ids: HashMap<String, SynsetIdx>,
    pub(crate) hypernyms: Vec<Vec<SynsetIdx>>,
    pub(crate) hyponyms: Vec<Vec<SynsetIdx>>,
    pub(crate) similar: Vec<Vec<SynsetIdx>>,
    pub(crate) depths: Vec<u32>,
    pub(crate) roots: BTreeMap<PartOfSpeech, SynsetIdx>,
    pub(crate) max_depths: BTreeMap<PartOfSpeech, u32>,
    /// Parents before children
    pub(crate) topo_order: Vec<SynsetIdx>,
    pub(crate) index: LiteralIndex,
}

impl TaxonomyGraph {
    // Identifier-based API

    /// Synsets containing `literal`, optionally restricted to one part of speech
    pub fn synsets_for_literal(&self, literal: &str, pos: Option<PartOfSpeech>) -> Vec<&Synset> {
        self.candidates(literal, pos)
            .into_iter()
            .map(|idx| self.get(idx))
            .collect()
    }

    /// Look up a synset by identifier
    pub fn synset(&self, id: &str) -> Result<&Synset> {
        Ok(self.get(self.lookup(id)?))
    }

    /// Direct parents of a synset
    pub fn hypernyms(&self, id: &str) -> Result<Vec<&Synset>> {
        let idx = self.lookup(id)?;
        Ok(self.parents(idx).iter().map(|&p| self.get(p)).collect())
    }

    /// Direct children of a synset
    pub fn hyponyms(&self, id: &str) -> Result<Vec<&Synset>> {
        let idx = self.lookup(id)?;
        Ok(self.children(idx).iter().map(|&c| self.get(c)).collect())
    }

    /// Horizontal (same part of speech) neighbours of a synset
    pub fn similar(&self, id: &str) -> Result<Vec<&Synset>> {
        let idx = self.lookup(id)?;
        Ok(self.similar_of(idx).iter().map(|&s| self.get(s)).collect())
    }

    /// Minimum number of hypernym edges to the root
    pub fn depth(&self, id: &str) -> Result<u32> {
        Ok(self.depth_of(self.lookup(id)?))
    }

    /// Root synset of a part of speech
    pub fn root(&self, pos: PartOfSpeech) -> Result<&Synset> {
        self.root_of(pos)
            .map(|idx| self.get(idx))
            .ok_or(SimilarityError::MissingRoot(pos))
    }

    /// Greatest depth observed for a part of speech (0 if the part of speech is absent)
    pub fn max_depth(&self, pos: PartOfSpeech) -> u32 {
        self.max_depths.get(&pos).copied().unwrap_or(0)
    }

    /// Parts of speech present in the graph
    pub fn parts_of_speech(&self) -> Vec<PartOfSpeech> {
        self.roots.keys().copied().collect()
    }

    /// Number of synsets
    pub fn len(&self) -> usize {
        self.synsets.len()
    }

    /// Check if graph is empty
    pub fn is_empty(&self) -> bool {
        self.synsets.is_empty()
    }

    /// Literal index statistics
    pub fn index_stats(&self) -> IndexStats {
        self.index.stats()
    }

    // Index-based API used by the algorithms

    pub fn lookup(&self, id: &str) -> Result<SynsetIdx> {
        self.ids
            .get(id)
            .copied()
            .ok_or_else(|| SimilarityError::UnknownSynset(id.to_string()))
    }

    pub fn get(&self, idx: SynsetIdx) -> &Synset {
        &self.synsets[idx.index()]
    }

    pub fn pos_of(&self, idx: SynsetIdx) -> PartOfSpeech {
        self.synsets[idx.index()].pos
    }

    pub fn parents(&self, idx: SynsetIdx) -> &[SynsetIdx] {
        &self.hypernyms[idx.index()]
    }

    pub fn children(&self, idx: SynsetIdx) -> &[SynsetIdx] {
        &self.hyponyms[idx.index()]
    }

    pub fn similar_of(&self, idx: SynsetIdx) -> &[SynsetIdx] {
        &self.similar[idx.index()]
    }

    pub fn depth_of(&self, idx: SynsetIdx) -> u32 {
        self.depths[idx.index()]
    }

    pub fn root_of(&self, pos: PartOfSpeech) -> Option<SynsetIdx> {
        self.roots.get(&pos).copied()
    }

    /// Candidate synsets for a literal in canonical rank order
    pub fn candidates(&self, literal: &str, pos: Option<PartOfSpeech>) -> Vec<SynsetIdx> {
        let mut found = self.index.lookup(literal);
        if let Some(pos) = pos {
            found.retain(|&idx| self.pos_of(idx) == pos);
        }
        found
    }

    /// Check if any synset carries the literal
    pub fn has_literal(&self, literal: &str) -> bool {
        self.index.contains(literal)
    }

    /// Number of synsets sharing a literal
    pub fn sense_count(&self, literal: &str) -> usize {
        self.index.sense_count(literal)
    }

    /// All synsets, parents before children
    pub fn topological_order(&self) -> &[SynsetIdx] {
        &self.topo_order
    }

    /// Iterate over every synset index
    pub fn indices(&self) -> impl Iterator<Item = SynsetIdx> + '_ {
        (0..self.synsets.len() as u32).map(SynsetIdx)
    }
}
