//! Common-ancestor search
//!
//! Breadth-first expansion along hypernym edges from both synsets; the common
//! subsumers are the intersection of the two ancestor maps.

use std::collections::{HashMap, VecDeque};

use crate::taxonomy::{SynsetIdx, TaxonomyGraph};

use super::path::{connecting_path, ConnectingPath, PathLimits};

/// A common ancestor of two synsets with its distance from each
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subsumer {
    pub synset: SynsetIdx,
    pub depth: u32,
    pub distance1: u32,
    pub distance2: u32,
}

impl Subsumer {
    /// Edges on the path `s1 -> subsumer -> s2`
    pub fn path_length(&self) -> u32 {
        self.distance1 + self.distance2
    }
}

/// Selected LCS plus the shortest path length through any common ancestor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connection {
    pub lcs: Subsumer,
    pub path_length: u32,
}

/// Ancestor queries over one taxonomy
#[derive(Debug, Clone, Copy)]
pub struct AncestorSearch<'g> {
    graph: &'g TaxonomyGraph,
}

impl<'g> AncestorSearch<'g> {
    pub fn new(graph: &'g TaxonomyGraph) -> Self {
        Self { graph }
    }

    /// Every ancestor of `start` (itself included, at distance 0) with the
    /// minimum number of hypernym edges to reach it
    pub fn ancestors_with_distance(&self, start: SynsetIdx) -> HashMap<SynsetIdx, u32> {
        let mut distances = HashMap::from([(start, 0)]);
        let mut queue = VecDeque::from([start]);
        while let Some(node) = queue.pop_front() {
            let next = distances[&node] + 1;
            for &parent in self.graph.parents(node) {
                if !distances.contains_key(&parent) {
                    distances.insert(parent, next);
                    queue.push_back(parent);
                }
            }
        }
        distances
    }

    /// Every common ancestor of the pair; empty across parts of speech
    pub fn common_subsumers(&self, s1: SynsetIdx, s2: SynsetIdx) -> Vec<Subsumer> {
        if self.graph.pos_of(s1) != self.graph.pos_of(s2) {
            return Vec::new();
        }
        let up1 = self.ancestors_with_distance(s1);
        let up2 = self.ancestors_with_distance(s2);
        let (smaller, larger, swapped) = if up1.len() <= up2.len() {
            (&up1, &up2, false)
        } else {
            (&up2, &up1, true)
        };

        smaller
            .iter()
            .filter_map(|(&synset, &d_small)| {
                let d_large = *larger.get(&synset)?;
                let (distance1, distance2) = if swapped {
                    (d_large, d_small)
                } else {
                    (d_small, d_large)
                };
                Some(Subsumer {
                    synset,
                    depth: self.graph.depth_of(synset),
                    distance1,
                    distance2,
                })
            })
            .collect()
    }

    /// Deepest common ancestors, ordered by combined distance then identifier
    pub fn least_common_subsumers(&self, s1: SynsetIdx, s2: SynsetIdx) -> Vec<Subsumer> {
        let common = self.common_subsumers(s1, s2);
        let Some(max_depth) = common.iter().map(|s| s.depth).max() else {
            return Vec::new();
        };
        let mut deepest: Vec<Subsumer> = common
            .into_iter()
            .filter(|s| s.depth == max_depth)
            .collect();
        deepest.sort_by(|a, b| {
            a.path_length()
                .cmp(&b.path_length())
                .then_with(|| self.graph.get(a.synset).id.cmp(&self.graph.get(b.synset).id))
        });
        deepest
    }

    /// The selected LCS: maximum depth, then minimum `d1 + d2`, then identifier order
    pub fn lcs(&self, s1: SynsetIdx, s2: SynsetIdx) -> Option<Subsumer> {
        self.least_common_subsumers(s1, s2).into_iter().next()
    }

    /// Edges on the shortest path through a common ancestor; `None` if disconnected
    pub fn shortest_path_length(&self, s1: SynsetIdx, s2: SynsetIdx) -> Option<u32> {
        self.connection(s1, s2).map(|c| c.path_length)
    }

    /// LCS and shortest path length from a single pair of expansions
    pub fn connection(&self, s1: SynsetIdx, s2: SynsetIdx) -> Option<Connection> {
        let common = self.common_subsumers(s1, s2);
        let path_length = common.iter().map(Subsumer::path_length).min()?;
        let lcs = common.into_iter().min_by(|a, b| {
            b.depth
                .cmp(&a.depth)
                .then_with(|| a.path_length().cmp(&b.path_length()))
                .then_with(|| self.graph.get(a.synset).id.cmp(&self.graph.get(b.synset).id))
        })?;
        Some(Connection { lcs, path_length })
    }

    /// Connecting path with its direction of travel, as walked by HSO
    pub fn path_edges(
        &self,
        s1: SynsetIdx,
        s2: SynsetIdx,
        limits: &PathLimits,
    ) -> Option<ConnectingPath> {
        connecting_path(self.graph, s1, s2, limits)
    }
}
