//! Information content from subsumption frequencies
//!
//! `ic(s) = ln(freq(root) / freq(s))` where `freq(s)` sums the weights of the
//! distinct synsets subsumed by `s` (itself included). Weights are uniform
//! unless literal corpus counts are supplied.

use std::collections::{HashMap, HashSet, VecDeque};

use tracing::debug;

use crate::error::Result;
use crate::taxonomy::{SynsetIdx, TaxonomyGraph};

/// Per-synset subsumption frequency and information content
#[derive(Debug, Clone)]
pub struct InformationContent {
    frequencies: Vec<f64>,
    values: Vec<f64>,
}

impl InformationContent {
    /// Every synset weighs 1, so `freq(s)` is 1 + number of descendants
    pub fn uniform(graph: &TaxonomyGraph) -> Self {
        Self::from_weights(graph, vec![1.0; graph.len()])
    }

    /// Weight each synset by `1 + Σ count(literal) / senses(literal)`: a literal's
    /// corpus count is shared evenly among the synsets carrying it.
    pub fn with_literal_counts(graph: &TaxonomyGraph, counts: &HashMap<String, f64>) -> Self {
        let weights = graph
            .indices()
            .map(|idx| {
                let corpus: f64 = graph
                    .get(idx)
                    .literals
                    .iter()
                    .filter_map(|literal| {
                        let count = counts.get(&literal.to_lowercase())?;
                        let senses = graph.sense_count(literal).max(1);
                        Some(count / senses as f64)
                    })
                    .sum();
                1.0 + corpus
            })
            .collect();
        Self::from_weights(graph, weights)
    }

    /// Single bottom-up pass in reverse topological order.
    ///
    /// A node whose descendants include no multiply-inherited synset is the
    /// root of a tree, so its frequency is its weight plus its children's.
    /// Otherwise the descendant set is enumerated so shared nodes count once.
    fn from_weights(graph: &TaxonomyGraph, weights: Vec<f64>) -> Self {
        let n = graph.len();
        let mut frequencies = vec![0.0; n];
        let mut has_shared = vec![false; n];
        let mut enumerated = 0usize;

        for &node in graph.topological_order().iter().rev() {
            let children = graph.children(node);
            let shared = children
                .iter()
                .any(|&c| graph.parents(c).len() > 1 || has_shared[c.index()]);
            has_shared[node.index()] = shared;

            frequencies[node.index()] = if shared {
                enumerated += 1;
                descendants_or_self(graph, node)
                    .into_iter()
                    .map(|d| weights[d.index()])
                    .sum()
            } else {
                weights[node.index()]
                    + children
                        .iter()
                        .map(|c| frequencies[c.index()])
                        .sum::<f64>()
            };
        }

        let values = graph
            .indices()
            .map(|idx| {
                let root = graph
                    .root_of(graph.pos_of(idx))
                    .map(|r| frequencies[r.index()])
                    .unwrap_or(frequencies[idx.index()]);
                (root / frequencies[idx.index()]).ln().max(0.0)
            })
            .collect();

        debug!(synsets = n, enumerated, "information content computed");
        Self {
            frequencies,
            values,
        }
    }

    /// Information content of a synset by identifier
    pub fn ic(&self, graph: &TaxonomyGraph, id: &str) -> Result<f64> {
        Ok(self.ic_of(graph.lookup(id)?))
    }

    /// Subsumption frequency of a synset by identifier
    pub fn frequency(&self, graph: &TaxonomyGraph, id: &str) -> Result<f64> {
        Ok(self.frequency_of(graph.lookup(id)?))
    }

    pub fn ic_of(&self, idx: SynsetIdx) -> f64 {
        self.values[idx.index()]
    }

    pub fn frequency_of(&self, idx: SynsetIdx) -> f64 {
        self.frequencies[idx.index()]
    }

    /// Largest information content in the model
    pub fn max_ic(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }
}

fn descendants_or_self(graph: &TaxonomyGraph, start: SynsetIdx) -> HashSet<SynsetIdx> {
    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    while let Some(node) = queue.pop_front() {
        for &child in graph.children(node) {
            if seen.insert(child) {
                queue.push_back(child);
            }
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::TaxonomyBuilder;
    use crate::types::{PartOfSpeech, SynsetRecord};

    fn build(edges: &[(&str, &[&str])]) -> TaxonomyGraph {
        let records = edges
            .iter()
            .map(|(id, parents)| {
                SynsetRecord::new(id, PartOfSpeech::Noun, &[id]).with_hypernyms(parents)
            })
            .collect();
        TaxonomyBuilder::with_records(records).build().unwrap()
    }

    fn three_level() -> TaxonomyGraph {
        build(&[
            ("root", &[]),
            ("A", &["root"]),
            ("B", &["root"]),
            ("A1", &["A"]),
            ("A2", &["A"]),
        ])
    }

    #[test]
    fn test_uniform_frequencies_and_ic() {
        let graph = three_level();
        let ic = InformationContent::uniform(&graph);

        assert_eq!(ic.frequency(&graph, "root").unwrap(), 5.0);
        assert_eq!(ic.frequency(&graph, "A").unwrap(), 3.0);
        assert_eq!(ic.frequency(&graph, "A1").unwrap(), 1.0);
        assert_eq!(ic.ic(&graph, "root").unwrap(), 0.0);
        assert!((ic.ic(&graph, "A").unwrap() - (5.0f64 / 3.0).ln()).abs() < 1e-12);
        assert!((ic.ic(&graph, "A1").unwrap() - 5.0f64.ln()).abs() < 1e-12);
        assert!((ic.ic(&graph, "A").unwrap() - 0.51).abs() < 0.01);
        assert!((ic.ic(&graph, "A1").unwrap() - 1.61).abs() < 0.01);
    }

    #[test]
    fn test_diamond_is_not_double_counted() {
        let graph = build(&[
            ("root", &[]),
            ("A", &["root"]),
            ("B", &["root"]),
            ("D", &["A", "B"]),
            ("E", &["D"]),
        ]);
        let ic = InformationContent::uniform(&graph);

        assert_eq!(ic.frequency(&graph, "root").unwrap(), 5.0);
        assert_eq!(ic.frequency(&graph, "A").unwrap(), 3.0);
        assert_eq!(ic.frequency(&graph, "D").unwrap(), 2.0);
    }

    #[test]
    fn test_ic_monotone_along_hypernym_chains() {
        let graph = build(&[
            ("root", &[]),
            ("A", &["root"]),
            ("B", &["root"]),
            ("C", &["A", "B"]),
            ("D", &["C"]),
            ("E", &["D", "B"]),
        ]);
        let ic = InformationContent::uniform(&graph);

        for idx in graph.indices() {
            for &parent in graph.parents(idx) {
                assert!(ic.ic_of(parent) <= ic.ic_of(idx));
            }
        }
    }

    #[test]
    fn test_literal_counts_shift_weights() {
        let graph = three_level();
        let mut counts = HashMap::new();
        counts.insert("a1".to_string(), 4.0);
        let ic = InformationContent::with_literal_counts(&graph, &counts);

        // A1 weighs 5, every other synset 1
        assert_eq!(ic.frequency(&graph, "A1").unwrap(), 5.0);
        assert_eq!(ic.frequency(&graph, "A").unwrap(), 7.0);
        assert_eq!(ic.frequency(&graph, "root").unwrap(), 9.0);
        assert_eq!(ic.ic(&graph, "root").unwrap(), 0.0);
        assert!(ic.ic(&graph, "A2").unwrap() > ic.ic(&graph, "A1").unwrap());
    }
}
