//! Literal index for synset lookups
//!
//! Maps every lowercased literal to the synsets containing it, ordered by
//! canonical sense rank, so lookups are a single hash access.

use std::collections::HashMap;

use crate::taxonomy::SynsetIdx;

/// Inverted index: literal (lowercased) → synsets in sense-rank order
#[derive(Debug, Default, Clone)]
pub struct LiteralIndex {
    /// literal → [(rank, insertion order, synset)]
    postings: HashMap<String, Vec<(u32, usize, SynsetIdx)>>,

    /// Total postings inserted
    posting_count: usize,
}

impl LiteralIndex {
    /// Create a new empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Index one literal of a synset.
    ///
    /// Literals without an explicit sense number rank after numbered ones,
    /// in insertion order.
    pub fn insert(&mut self, literal: &str, synset: SynsetIdx, sense: Option<u32>) {
        let key = normalize(literal);
        if key.is_empty() {
            return;
        }
        let list = self.postings.entry(key).or_default();
        if list.iter().any(|(_, _, s)| *s == synset) {
            return;
        }
        list.push((sense.unwrap_or(u32::MAX), self.posting_count, synset));
        self.posting_count += 1;
    }

    /// Sort every posting list by (rank, insertion order). Call once after loading.
    pub fn finalize(&mut self) {
        for list in self.postings.values_mut() {
            list.sort_by_key(|(rank, order, _)| (*rank, *order));
        }
    }

    /// Synsets containing the literal, in canonical rank order
    pub fn lookup(&self, literal: &str) -> Vec<SynsetIdx> {
        self.postings
            .get(&normalize(literal))
            .map(|list| list.iter().map(|(_, _, s)| *s).collect())
            .unwrap_or_default()
    }

    /// Number of synsets sharing the literal
    pub fn sense_count(&self, literal: &str) -> usize {
        self.postings
            .get(&normalize(literal))
            .map(Vec::len)
            .unwrap_or(0)
    }

    /// Check if a literal is indexed
    pub fn contains(&self, literal: &str) -> bool {
        self.postings.contains_key(&normalize(literal))
    }

    /// Number of distinct literals
    pub fn len(&self) -> usize {
        self.postings.len()
    }

    /// Check if index is empty
    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    /// Get index statistics
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            unique_literals: self.postings.len(),
            postings: self.posting_count,
        }
    }
}

/// Index statistics
#[derive(Debug, Clone)]
pub struct IndexStats {
    pub unique_literals: usize,
    pub postings: usize,
}

fn normalize(literal: &str) -> String {
    literal.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let mut index = LiteralIndex::new();
        index.insert("Câine", SynsetIdx(3), None);
        index.finalize();

        assert_eq!(index.lookup("câine"), vec![SynsetIdx(3)]);
        assert_eq!(index.lookup("  CÂINE "), vec![SynsetIdx(3)]);
        assert!(index.lookup("pisică").is_empty());
    }

    #[test]
    fn test_rank_then_insertion_order() {
        let mut index = LiteralIndex::new();
        index.insert("bancă", SynsetIdx(0), None);
        index.insert("bancă", SynsetIdx(1), Some(2));
        index.insert("bancă", SynsetIdx(2), Some(1));
        index.insert("bancă", SynsetIdx(3), None);
        index.finalize();

        assert_eq!(
            index.lookup("bancă"),
            vec![SynsetIdx(2), SynsetIdx(1), SynsetIdx(0), SynsetIdx(3)]
        );
        assert_eq!(index.sense_count("bancă"), 4);
    }

    #[test]
    fn test_duplicate_literal_in_same_synset() {
        let mut index = LiteralIndex::new();
        index.insert("om", SynsetIdx(0), None);
        index.insert("Om", SynsetIdx(0), Some(1));
        index.finalize();

        assert_eq!(index.lookup("om"), vec![SynsetIdx(0)]);
        let stats = index.stats();
        assert_eq!(stats.unique_literals, 1);
        assert_eq!(stats.postings, 1);
    }
}
