//! Word-pair similarity across every algorithm

use tracing::debug;

use crate::error::Result;
use crate::similarity::Algorithm;
use crate::taxonomy::SynsetIdx;
use crate::types::{round_to, AlgorithmResult, SynsetInfo, WordSimilarity};

use super::SimilarityEngine;

/// Decimals kept in word-level scores
const WORD_SCORE_DECIMALS: i32 = 6;

/// Score two words with all eight algorithms
pub fn word_similarity(
    engine: &SimilarityEngine,
    word1: &str,
    word2: &str,
) -> Result<WordSimilarity> {
    let resolver = engine.resolver();
    let graph = engine.graph();
    let candidates1 = resolver.resolve(word1)?;
    let candidates2 = resolver.resolve(word2)?;

    let id = |idx: Option<SynsetIdx>| idx.map(|s| graph.get(s).id.clone());
    let results = Algorithm::all()
        .iter()
        .map(|&algorithm| {
            let best = resolver.best_pair(&candidates1, &candidates2, algorithm);
            AlgorithmResult {
                algorithm: algorithm.label(),
                similarity: round_to(best.score, WORD_SCORE_DECIMALS),
                synset1: id(best.synset1),
                synset2: id(best.synset2),
            }
        })
        .collect();

    debug!(
        word1,
        word2,
        candidates1 = candidates1.len(),
        candidates2 = candidates2.len(),
        "word similarity"
    );

    Ok(WordSimilarity {
        word1: word1.to_string(),
        word2: word2.to_string(),
        results,
        synsets1: synset_infos(engine, &candidates1),
        synsets2: synset_infos(engine, &candidates2),
    })
}

/// Unrounded best-pair score of two words under one algorithm
pub fn word_score(
    engine: &SimilarityEngine,
    word1: &str,
    word2: &str,
    algorithm: &str,
) -> Result<f64> {
    let algorithm = Algorithm::parse(algorithm)?;
    let resolver = engine.resolver();
    let candidates1 = resolver.resolve(word1)?;
    let candidates2 = resolver.resolve(word2)?;
    Ok(resolver.best_pair(&candidates1, &candidates2, algorithm).score)
}

pub(super) fn synset_infos(engine: &SimilarityEngine, synsets: &[SynsetIdx]) -> Vec<SynsetInfo> {
    let config = engine.config();
    synsets
        .iter()
        .take(config.max_candidates)
        .map(|&idx| SynsetInfo::from_synset(engine.graph().get(idx), config.gloss_preview))
        .collect()
}
