//! Directed connecting paths for Hirst-St-Onge
//!
//! Layered breadth-first search over `(synset, last direction)` states. A path
//! costs its length plus `change_penalty` per direction change; the cheapest
//! path within the limits wins, the first found among equals.

use std::collections::HashMap;

use serde::Serialize;

use crate::taxonomy::{SynsetIdx, TaxonomyGraph};

/// Direction of one step along a connecting path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// To a hypernym
    Up,
    /// To a hyponym
    Down,
    /// To a similar synset
    Horizontal,
}

/// One step: the synset reached and how it was reached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathEdge {
    pub synset: SynsetIdx,
    pub direction: Direction,
}

/// A path between two synsets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectingPath {
    pub edges: Vec<PathEdge>,
    pub direction_changes: u32,
}

impl ConnectingPath {
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Bounds on the paths considered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathLimits {
    pub max_length: u32,
    pub max_changes: u32,
    pub change_penalty: u32,
}

impl Default for PathLimits {
    fn default() -> Self {
        Self {
            max_length: 8,
            max_changes: 5,
            change_penalty: 1,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Step {
    synset: SynsetIdx,
    direction: Option<Direction>,
    changes: u32,
    prev: Option<usize>,
}

fn neighbours(graph: &TaxonomyGraph, node: SynsetIdx) -> impl Iterator<Item = (SynsetIdx, Direction)> + '_ {
    let up = graph.parents(node).iter().map(|&p| (p, Direction::Up));
    let down = graph.children(node).iter().map(|&c| (c, Direction::Down));
    let side = graph
        .similar_of(node)
        .iter()
        .map(|&s| (s, Direction::Horizontal));
    up.chain(down).chain(side)
}

/// Cheapest path from `from` to `to` within `limits`.
///
/// Identical synsets yield an empty path. `None` when the synsets differ in
/// part of speech or no path fits the limits.
pub fn connecting_path(
    graph: &TaxonomyGraph,
    from: SynsetIdx,
    to: SynsetIdx,
    limits: &PathLimits,
) -> Option<ConnectingPath> {
    if from == to {
        return Some(ConnectingPath {
            edges: Vec::new(),
            direction_changes: 0,
        });
    }
    if graph.pos_of(from) != graph.pos_of(to) {
        return None;
    }

    let mut arena = vec![Step {
        synset: from,
        direction: None,
        changes: 0,
        prev: None,
    }];
    // Fewest changes seen per (synset, arriving direction); an equal or
    // better earlier visit dominates any later one.
    let mut visited: HashMap<(SynsetIdx, Option<Direction>), u32> = HashMap::new();
    visited.insert((from, None), 0);

    let mut frontier = vec![0usize];
    let mut best: Option<(u32, usize)> = None;

    for length in 1..=limits.max_length {
        if matches!(best, Some((cost, _)) if cost <= length) {
            break;
        }
        let mut next = Vec::new();
        for &slot in &frontier {
            let current = arena[slot];
            for (neighbour, direction) in neighbours(graph, current.synset) {
                let changes = match current.direction {
                    Some(last) if last != direction => current.changes + 1,
                    _ => current.changes,
                };
                if changes > limits.max_changes {
                    continue;
                }
                let step = Step {
                    synset: neighbour,
                    direction: Some(direction),
                    changes,
                    prev: Some(slot),
                };

                if neighbour == to {
                    let cost = length + limits.change_penalty * changes;
                    if best.map_or(true, |(found, _)| cost < found) {
                        arena.push(step);
                        best = Some((cost, arena.len() - 1));
                    }
                    continue;
                }

                let key = (neighbour, Some(direction));
                if visited.get(&key).is_some_and(|&seen| seen <= changes) {
                    continue;
                }
                visited.insert(key, changes);
                arena.push(step);
                next.push(arena.len() - 1);
            }
        }
        if next.is_empty() {
            break;
        }
        frontier = next;
    }

    let (_, last) = best?;
    let direction_changes = arena[last].changes;
    let mut edges = Vec::new();
    let mut cursor = Some(last);
    while let Some(slot) = cursor {
        let step = arena[slot];
        if let Some(direction) = step.direction {
            edges.push(PathEdge {
                synset: step.synset,
                direction,
            });
        }
        cursor = step.prev;
    }
    edges.reverse();

    Some(ConnectingPath {
        edges,
        direction_changes,
    })
}
