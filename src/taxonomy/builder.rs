//! Taxonomy construction and validation

use std::collections::{BTreeMap, HashMap, VecDeque};

use tracing::{debug, info, warn};

use crate::error::{Result, SimilarityError};
use crate::search::LiteralIndex;
use crate::types::{PartOfSpeech, Synset, SynsetRecord};

use super::{SynsetIdx, TaxonomyGraph};

/// Prefix of synthesized root identifiers (`__root__n`, `__root__v`, ...)
pub const SYNTHETIC_ROOT_PREFIX: &str = "__root__";

/// Collects raw synset records and builds a validated [`TaxonomyGraph`]
#[derive(Debug, Clone)]
pub struct TaxonomyBuilder {
    records: Vec<SynsetRecord>,
    synthesize_roots: bool,
}

impl TaxonomyBuilder {
    /// Create an empty builder; root synthesis is enabled by default
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            synthesize_roots: true,
        }
    }

    /// Create a builder from records
    pub fn with_records(records: Vec<SynsetRecord>) -> Self {
        Self {
            records,
            synthesize_roots: true,
        }
    }

    /// When several synsets of one part of speech have no hypernym, adopt them
    /// under a synthesized root instead of failing with `MultipleRoots`.
    pub fn synthesize_roots(mut self, enabled: bool) -> Self {
        self.synthesize_roots = enabled;
        self
    }

    /// Add a record
    pub fn add(&mut self, record: SynsetRecord) -> &mut Self {
        self.records.push(record);
        self
    }

    /// Number of records collected so far
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if no records were added
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Validate the records and build the graph.
    ///
    /// Fails on duplicate ids, dangling references, cross part-of-speech edges,
    /// hypernym cycles and missing or ambiguous roots.
    pub fn build(self) -> Result<TaxonomyGraph> {
        let TaxonomyBuilder {
            records,
            synthesize_roots,
        } = self;

        let mut edges = Edges::with_records(&records)?;
        for (i, record) in records.iter().enumerate() {
            let this = SynsetIdx(i as u32);
            for parent_id in &record.hypernyms {
                let parent = edges.resolve(parent_id)?;
                edges.link(this, parent)?;
            }
            for child_id in &record.hyponyms {
                let child = edges.resolve(child_id)?;
                edges.link(child, this)?;
            }
            for other_id in &record.similar {
                let other = edges.resolve(other_id)?;
                edges.link_similar(this, other)?;
            }
        }

        let roots = assign_roots(&mut edges, &records, synthesize_roots)?;
        let topo_order = topological_order(&edges)?;
        let depths = minimum_depths(&edges, &roots)?;

        let mut max_depths = BTreeMap::new();
        for (i, &depth) in depths.iter().enumerate() {
            let entry = max_depths.entry(edges.synsets[i].pos).or_insert(0);
            *entry = (*entry).max(depth);
        }

        let mut index = LiteralIndex::new();
        for (i, record) in records.iter().enumerate() {
            for literal in &record.literals {
                index.insert(literal.word(), SynsetIdx(i as u32), literal.sense());
            }
        }
        index.finalize();

        let Edges {
            synsets,
            ids,
            hypernyms,
            hyponyms,
            similar,
        } = edges;

        info!(
            synsets = synsets.len(),
            literals = index.len(),
            roots = roots.len(),
            "taxonomy built"
        );
        for (pos, depth) in &max_depths {
            debug!(pos = %pos, max_depth = depth, "part of speech depth");
        }

        Ok(TaxonomyGraph {
            synsets,
            ids,
            hypernyms,
            hyponyms,
            similar,
            depths,
            roots,
            max_depths,
            topo_order,
            index,
        })
    }
}

impl Default for TaxonomyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Adjacency under construction
struct Edges {
    synsets: Vec<Synset>,
    ids: HashMap<String, SynsetIdx>,
    hypernyms: Vec<Vec<SynsetIdx>>,
    hyponyms: Vec<Vec<SynsetIdx>>,
    similar: Vec<Vec<SynsetIdx>>,
}

impl Edges {
    fn with_records(records: &[SynsetRecord]) -> Result<Self> {
        let mut edges = Self {
            synsets: Vec::with_capacity(records.len()),
            ids: HashMap::with_capacity(records.len()),
            hypernyms: Vec::with_capacity(records.len()),
            hyponyms: Vec::with_capacity(records.len()),
            similar: Vec::with_capacity(records.len()),
        };
        for record in records {
            let literals = record
                .literals
                .iter()
                .map(|l| l.word().to_string())
                .collect();
            let mut synset = Synset::new(record.id.clone(), record.pos, literals);
            synset.gloss = record.gloss.clone();
            edges.push(synset)?;
        }
        Ok(edges)
    }

    fn push(&mut self, synset: Synset) -> Result<SynsetIdx> {
        let idx = SynsetIdx(self.synsets.len() as u32);
        if self.ids.insert(synset.id.clone(), idx).is_some() {
            return Err(SimilarityError::DuplicateSynset(synset.id));
        }
        self.synsets.push(synset);
        self.hypernyms.push(Vec::new());
        self.hyponyms.push(Vec::new());
        self.similar.push(Vec::new());
        Ok(idx)
    }

    fn resolve(&self, id: &str) -> Result<SynsetIdx> {
        self.ids
            .get(id)
            .copied()
            .ok_or_else(|| SimilarityError::UnknownSynset(id.to_string()))
    }

    fn check_same_pos(&self, a: SynsetIdx, b: SynsetIdx) -> Result<()> {
        if self.synsets[a.index()].pos != self.synsets[b.index()].pos {
            return Err(SimilarityError::CrossPosEdge {
                from: self.synsets[a.index()].id.clone(),
                to: self.synsets[b.index()].id.clone(),
            });
        }
        Ok(())
    }

    /// Add the hypernym edge `child -> parent` and its hyponym inverse
    fn link(&mut self, child: SynsetIdx, parent: SynsetIdx) -> Result<()> {
        if child == parent {
            return Err(SimilarityError::CyclicHypernyms(
                self.synsets[child.index()].id.clone(),
            ));
        }
        self.check_same_pos(child, parent)?;
        push_unique(&mut self.hypernyms[child.index()], parent);
        push_unique(&mut self.hyponyms[parent.index()], child);
        Ok(())
    }

    fn link_similar(&mut self, a: SynsetIdx, b: SynsetIdx) -> Result<()> {
        if a == b {
            return Ok(());
        }
        self.check_same_pos(a, b)?;
        push_unique(&mut self.similar[a.index()], b);
        push_unique(&mut self.similar[b.index()], a);
        Ok(())
    }
}

fn push_unique(list: &mut Vec<SynsetIdx>, idx: SynsetIdx) {
    if !list.contains(&idx) {
        list.push(idx);
    }
}

/// Pick (or synthesize) the single root of every part of speech
fn assign_roots(
    edges: &mut Edges,
    records: &[SynsetRecord],
    synthesize: bool,
) -> Result<BTreeMap<PartOfSpeech, SynsetIdx>> {
    let mut roots = BTreeMap::new();

    for pos in PartOfSpeech::ALL {
        let members: Vec<SynsetIdx> = (0..records.len() as u32)
            .map(SynsetIdx)
            .filter(|idx| records[idx.index()].pos == pos)
            .collect();
        if members.is_empty() {
            continue;
        }

        let declared: Vec<SynsetIdx> = members
            .iter()
            .copied()
            .filter(|idx| records[idx.index()].root)
            .collect();
        if declared.len() > 1 {
            return Err(SimilarityError::MultipleRoots {
                pos,
                count: declared.len(),
            });
        }
        let declared = declared.first().copied();
        if let Some(root) = declared {
            if !edges.hypernyms[root.index()].is_empty() {
                return Err(SimilarityError::RootHasHypernyms(
                    edges.synsets[root.index()].id.clone(),
                ));
            }
        }

        let orphans: Vec<SynsetIdx> = members
            .iter()
            .copied()
            .filter(|&idx| edges.hypernyms[idx.index()].is_empty() && Some(idx) != declared)
            .collect();

        let root = match (declared, orphans.len()) {
            (Some(root), 0) => root,
            (None, 0) => continue, // every member sits on a cycle; reported by the topological sort
            (None, 1) => orphans[0],
            (declared, count) => {
                if !synthesize {
                    return Err(SimilarityError::MultipleRoots {
                        pos,
                        count: count + usize::from(declared.is_some()),
                    });
                }
                let root = match declared {
                    Some(root) => root,
                    None => {
                        let id = format!("{}{}", SYNTHETIC_ROOT_PREFIX, pos.code());
                        edges.push(Synset::new(id, pos, Vec::new()))?
                    }
                };
                warn!(
                    pos = %pos,
                    adopted = count,
                    root = %edges.synsets[root.index()].id,
                    "parentless synsets adopted under a single root"
                );
                for orphan in orphans {
                    edges.link(orphan, root)?;
                }
                root
            }
        };
        roots.insert(pos, root);
    }

    Ok(roots)
}

/// Kahn's algorithm over hypernym edges: parents before children
fn topological_order(edges: &Edges) -> Result<Vec<SynsetIdx>> {
    let total = edges.synsets.len();
    let mut pending: Vec<usize> = edges.hypernyms.iter().map(Vec::len).collect();
    let mut queue: VecDeque<SynsetIdx> = (0..total as u32)
        .map(SynsetIdx)
        .filter(|idx| pending[idx.index()] == 0)
        .collect();

    let mut order = Vec::with_capacity(total);
    while let Some(node) = queue.pop_front() {
        order.push(node);
        for &child in &edges.hyponyms[node.index()] {
            pending[child.index()] -= 1;
            if pending[child.index()] == 0 {
                queue.push_back(child);
            }
        }
    }

    if order.len() < total {
        let stuck = pending
            .iter()
            .position(|&p| p > 0)
            .unwrap_or_default();
        return Err(SimilarityError::CyclicHypernyms(
            edges.synsets[stuck].id.clone(),
        ));
    }
    Ok(order)
}

/// Breadth-first search from each root along hyponym edges. The first visit
/// of a node is along a shortest path, so the depth recorded is the minimum.
fn minimum_depths(edges: &Edges, roots: &BTreeMap<PartOfSpeech, SynsetIdx>) -> Result<Vec<u32>> {
    let mut depths = vec![u32::MAX; edges.synsets.len()];

    for &root in roots.values() {
        depths[root.index()] = 0;
        let mut queue = VecDeque::from([root]);
        while let Some(node) = queue.pop_front() {
            let next = depths[node.index()] + 1;
            for &child in &edges.hyponyms[node.index()] {
                if depths[child.index()] == u32::MAX {
                    depths[child.index()] = next;
                    queue.push_back(child);
                }
            }
        }
    }

    if let Some(unreached) = depths.iter().position(|&d| d == u32::MAX) {
        return Err(SimilarityError::MissingRoot(edges.synsets[unreached].pos));
    }
    Ok(depths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PartOfSpeech::{Noun, Verb};

    fn record(id: &str, parents: &[&str]) -> SynsetRecord {
        SynsetRecord::new(id, Noun, &[id]).with_hypernyms(parents)
    }

    fn three_level() -> Vec<SynsetRecord> {
        vec![
            record("root", &[]),
            record("A", &["root"]),
            record("B", &["root"]),
            record("A1", &["A"]),
            record("A2", &["A"]),
        ]
    }

    #[test]
    fn test_depths_in_three_level_taxonomy() {
        let graph = TaxonomyBuilder::with_records(three_level()).build().unwrap();

        assert_eq!(graph.depth("root").unwrap(), 0);
        assert_eq!(graph.depth("A").unwrap(), 1);
        assert_eq!(graph.depth("A1").unwrap(), 2);
        assert_eq!(graph.max_depth(Noun), 2);
        assert_eq!(graph.root(Noun).unwrap().id, "root");
        assert_eq!(graph.hyponyms("A").unwrap().len(), 2);
        assert_eq!(graph.hypernyms("A2").unwrap()[0].id, "A");
    }

    #[test]
    fn test_minimum_depth_under_multiple_inheritance() {
        let records = vec![
            record("root", &[]),
            record("X", &["root"]),
            record("Y", &["X"]),
            record("Z", &["Y"]),
            record("M", &["Z", "root"]),
        ];
        let graph = TaxonomyBuilder::with_records(records).build().unwrap();

        assert_eq!(graph.depth("M").unwrap(), 1);
        assert_eq!(graph.max_depth(Noun), 3);
    }

    #[test]
    fn test_topological_order_puts_parents_first() {
        let graph = TaxonomyBuilder::with_records(three_level()).build().unwrap();
        let order = graph.topological_order();
        let position = |id: &str| {
            let idx = graph.lookup(id).unwrap();
            order.iter().position(|&o| o == idx).unwrap()
        };

        assert!(position("root") < position("A"));
        assert!(position("A") < position("A1"));
        assert!(position("A") < position("A2"));
    }

    #[test]
    fn test_unknown_reference_fails() {
        let records = vec![record("root", &[]), record("A", &["ghost"])];
        let err = TaxonomyBuilder::with_records(records).build().unwrap_err();
        assert!(matches!(err, SimilarityError::UnknownSynset(id) if id == "ghost"));
    }

    #[test]
    fn test_duplicate_id_fails() {
        let records = vec![record("root", &[]), record("root", &[])];
        let err = TaxonomyBuilder::with_records(records).build().unwrap_err();
        assert!(matches!(err, SimilarityError::DuplicateSynset(_)));
    }

    #[test]
    fn test_cycle_fails() {
        let records = vec![
            record("root", &[]),
            record("A", &["root", "C"]),
            record("B", &["A"]),
            record("C", &["B"]),
        ];
        let err = TaxonomyBuilder::with_records(records).build().unwrap_err();
        assert!(matches!(err, SimilarityError::CyclicHypernyms(_)));
    }

    #[test]
    fn test_self_loop_fails() {
        let records = vec![record("root", &[]), record("A", &["A"])];
        let err = TaxonomyBuilder::with_records(records).build().unwrap_err();
        assert!(matches!(err, SimilarityError::CyclicHypernyms(_)));
    }

    #[test]
    fn test_cross_pos_hypernym_fails() {
        let records = vec![
            record("root", &[]),
            SynsetRecord::new("run", Verb, &["run"]).with_hypernyms(&["root"]),
        ];
        let err = TaxonomyBuilder::with_records(records).build().unwrap_err();
        assert!(matches!(err, SimilarityError::CrossPosEdge { .. }));
    }

    #[test]
    fn test_multiple_orphans_get_synthetic_root() {
        let records = vec![record("A", &[]), record("B", &[]), record("A1", &["A"])];
        let graph = TaxonomyBuilder::with_records(records).build().unwrap();

        let root = graph.root(Noun).unwrap();
        assert_eq!(root.id, "__root__n");
        assert!(root.literals.is_empty());
        assert_eq!(graph.depth("A").unwrap(), 1);
        assert_eq!(graph.depth("A1").unwrap(), 2);
        assert!(graph.synsets_for_literal("__root__n", None).is_empty());
    }

    #[test]
    fn test_multiple_orphans_without_synthesis_fail() {
        let records = vec![record("A", &[]), record("B", &[])];
        let err = TaxonomyBuilder::with_records(records)
            .synthesize_roots(false)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            SimilarityError::MultipleRoots { pos: Noun, count: 2 }
        ));
    }

    #[test]
    fn test_declared_root_adopts_orphans() {
        let records = vec![
            record("entity", &[]).as_root(),
            record("A", &[]),
            record("A1", &["A"]),
        ];
        let graph = TaxonomyBuilder::with_records(records).build().unwrap();

        assert_eq!(graph.root(Noun).unwrap().id, "entity");
        assert_eq!(graph.depth("A1").unwrap(), 2);
    }

    #[test]
    fn test_declared_root_with_parent_fails() {
        let records = vec![record("top", &[]), record("entity", &["top"]).as_root()];
        let err = TaxonomyBuilder::with_records(records).build().unwrap_err();
        assert!(matches!(err, SimilarityError::RootHasHypernyms(_)));
    }

    #[test]
    fn test_hyponym_field_adds_inverse_edge() {
        let mut root = record("root", &[]);
        root.hyponyms = vec!["A".to_string()];
        let records = vec![root, record("A", &[])];
        let graph = TaxonomyBuilder::with_records(records).build().unwrap();

        assert_eq!(graph.depth("A").unwrap(), 1);
        assert_eq!(graph.hypernyms("A").unwrap()[0].id, "root");
    }

    #[test]
    fn test_similar_edges_are_symmetric() {
        let records = vec![
            record("root", &[]),
            record("A", &["root"]).with_similar(&["B"]),
            record("B", &["root"]),
        ];
        let graph = TaxonomyBuilder::with_records(records).build().unwrap();

        assert_eq!(graph.similar("A").unwrap()[0].id, "B");
        assert_eq!(graph.similar("B").unwrap()[0].id, "A");
    }

    #[test]
    fn test_separate_roots_per_pos() {
        let records = vec![
            record("entity", &[]),
            SynsetRecord::new("act", Verb, &["face"]),
            SynsetRecord::new("run", Verb, &["alerga"]).with_hypernyms(&["act"]),
        ];
        let graph = TaxonomyBuilder::with_records(records).build().unwrap();

        assert_eq!(graph.root(Noun).unwrap().id, "entity");
        assert_eq!(graph.root(Verb).unwrap().id, "act");
        assert_eq!(graph.parts_of_speech(), vec![Noun, Verb]);
        assert!(graph.root(PartOfSpeech::Adverb).is_err());
    }

    #[test]
    fn test_unknown_synset_lookup() {
        let graph = TaxonomyBuilder::with_records(three_level()).build().unwrap();
        assert!(matches!(
            graph.depth("nope"),
            Err(SimilarityError::UnknownSynset(_))
        ));
    }
}
