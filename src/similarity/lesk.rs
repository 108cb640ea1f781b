//! Extended gloss overlap (LESK)

use std::collections::HashSet;

use crate::search::gloss_tokens;
use crate::taxonomy::{SynsetIdx, TaxonomyGraph};

use super::SynsetScore;

/// Related synsets whose glosses extend a synset's own
pub const RELATED_GLOSS_LIMIT: usize = 5;

/// Tokens of the synset's gloss and literals, plus the glosses of its first
/// few hypernyms and hyponyms
pub fn extended_gloss(graph: &TaxonomyGraph, idx: SynsetIdx) -> HashSet<String> {
    let synset = graph.get(idx);
    let mut tokens = gloss_tokens(synset.gloss_text());
    for literal in &synset.literals {
        tokens.extend(gloss_tokens(literal));
    }

    let related = graph
        .parents(idx)
        .iter()
        .chain(graph.children(idx))
        .take(RELATED_GLOSS_LIMIT);
    for &other in related {
        tokens.extend(gloss_tokens(graph.get(other).gloss_text()));
    }
    tokens
}

/// Number of tokens the two extended glosses share
pub fn lesk(graph: &TaxonomyGraph, s1: SynsetIdx, s2: SynsetIdx) -> SynsetScore {
    let g1 = extended_gloss(graph, s1);
    if s1 == s2 {
        return SynsetScore::new(g1.len() as f64, None);
    }
    let g2 = extended_gloss(graph, s2);
    if g1.is_empty() || g2.is_empty() {
        return SynsetScore::ZERO;
    }
    SynsetScore::new(g1.intersection(&g2).count() as f64, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::TaxonomyBuilder;
    use crate::types::{PartOfSpeech, SynsetRecord};

    fn graph() -> TaxonomyGraph {
        use PartOfSpeech::Noun;
        let records = vec![
            SynsetRecord::new("animal", Noun, &["animal"])
                .with_gloss("living organism that feeds on organic matter"),
            SynsetRecord::new("dog", Noun, &["dog"])
                .with_gloss("domesticated carnivore kept by people")
                .with_hypernyms(&["animal"]),
            SynsetRecord::new("cat", Noun, &["cat"])
                .with_gloss("small domesticated carnivore")
                .with_hypernyms(&["animal"]),
        ];
        TaxonomyBuilder::with_records(records).build().unwrap()
    }

    #[test]
    fn test_extended_gloss_includes_hypernym_gloss() {
        let graph = graph();
        let dog = graph.lookup("dog").unwrap();
        let tokens = extended_gloss(&graph, dog);

        assert!(tokens.contains("dog"));
        assert!(tokens.contains("carnivore"));
        assert!(tokens.contains("organism"));
        assert!(!tokens.contains("by"));
    }

    #[test]
    fn test_overlap_counts_shared_tokens() {
        let graph = graph();
        let dog = graph.lookup("dog").unwrap();
        let cat = graph.lookup("cat").unwrap();

        // domesticated, carnivore and the five animal gloss tokens
        let score = lesk(&graph, dog, cat);
        assert_eq!(score.value, 7.0);
        assert_eq!(score.value, lesk(&graph, cat, dog).value);
        assert_eq!(score.lcs, None);
    }

    #[test]
    fn test_self_overlap_is_gloss_size() {
        let graph = graph();
        let dog = graph.lookup("dog").unwrap();
        let expected = extended_gloss(&graph, dog).len() as f64;
        assert_eq!(lesk(&graph, dog, dog).value, expected);
        let cat = graph.lookup("cat").unwrap();
        assert!(lesk(&graph, dog, dog).value >= lesk(&graph, dog, cat).value);
    }
}
