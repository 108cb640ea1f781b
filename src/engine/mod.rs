//! Similarity engine
//!
//! Owns one immutable taxonomy, its information content, a lemmatizer and a
//! score cache. Several engines can coexist; nothing here is global.

mod lookup;
mod sentence;
mod word;

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::config::EngineConfig;
use crate::error::Result;
use crate::information::InformationContent;
use crate::resolver::{Lemmatizer, SuffixLemmatizer, WordResolver};
use crate::similarity::{Algorithm, CacheStats, Measures, ScoreCache};
use crate::taxonomy::{load_frequencies, load_taxonomy, TaxonomyGraph};
use crate::types::{AlgorithmInfo, SentenceSimilarity, WordSimilarity, WordSynsets};

/// Size and cache counters reported by health endpoints
#[derive(Debug, Clone, Serialize)]
pub struct EngineStats {
    pub synsets: usize,
    pub literals: usize,
    pub parts_of_speech: Vec<String>,
    pub cache: CacheStats,
}

/// The similarity engine
pub struct SimilarityEngine {
    pub(crate) graph: Arc<TaxonomyGraph>,
    pub(crate) ic: Arc<InformationContent>,
    pub(crate) lemmatizer: Arc<dyn Lemmatizer>,
    pub(crate) cache: ScoreCache,
    pub(crate) config: EngineConfig,
}

impl SimilarityEngine {
    /// Engine over `graph` with uniform IC and the Romanian suffix lemmatizer
    pub fn from_graph(graph: TaxonomyGraph) -> Self {
        Self::with_config(graph, EngineConfig::default())
    }

    pub fn with_config(graph: TaxonomyGraph, config: EngineConfig) -> Self {
        let ic = InformationContent::uniform(&graph);
        Self::with_parts(
            Arc::new(graph),
            Arc::new(ic),
            Arc::new(SuffixLemmatizer::new()),
            config,
        )
    }

    pub fn with_parts(
        graph: Arc<TaxonomyGraph>,
        ic: Arc<InformationContent>,
        lemmatizer: Arc<dyn Lemmatizer>,
        config: EngineConfig,
    ) -> Self {
        Self {
            cache: ScoreCache::new(config.cache_capacity),
            graph,
            ic,
            lemmatizer,
            config,
        }
    }

    /// Read the taxonomy (and frequencies, when configured) from disk
    pub fn load(config: &EngineConfig) -> Result<Self> {
        let graph = load_taxonomy(&config.taxonomy_path, config.synthesize_roots)?;

        let ic = match &config.frequency_path {
            Some(path) => {
                let counts = load_frequencies(path)?;
                let unknown = counts.keys().filter(|l| !graph.has_literal(l)).count();
                if unknown > 0 {
                    warn!(unknown, "frequency literals absent from the taxonomy were ignored");
                }
                InformationContent::with_literal_counts(&graph, &counts)
            }
            None => InformationContent::uniform(&graph),
        };

        let stats = graph.index_stats();
        info!(
            synsets = graph.len(),
            literals = stats.unique_literals,
            max_ic = ic.max_ic(),
            "similarity engine ready"
        );

        Ok(Self::with_parts(
            Arc::new(graph),
            Arc::new(ic),
            Arc::new(SuffixLemmatizer::new()),
            config.clone(),
        ))
    }

    pub fn graph(&self) -> &TaxonomyGraph {
        &self.graph
    }

    pub fn information_content(&self) -> &InformationContent {
        &self.ic
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn measures(&self) -> Measures<'_> {
        Measures::new(&self.graph, &self.ic)
    }

    /// Resolver sharing this engine's lemmatizer and cache
    pub fn resolver(&self) -> WordResolver<'_> {
        WordResolver::new(self.measures(), self.lemmatizer.as_ref()).with_cache(&self.cache)
    }

    pub fn algorithms(&self) -> Vec<AlgorithmInfo> {
        Algorithm::all().iter().map(|a| a.info()).collect()
    }

    pub fn stats(&self) -> EngineStats {
        EngineStats {
            synsets: self.graph.len(),
            literals: self.graph.index_stats().unique_literals,
            parts_of_speech: self
                .graph
                .parts_of_speech()
                .into_iter()
                .map(|pos| pos.to_string())
                .collect(),
            cache: self.cache.stats(),
        }
    }

    // Word operations (from word.rs)
    pub fn word_similarity(&self, word1: &str, word2: &str) -> Result<WordSimilarity> {
        word::word_similarity(self, word1, word2)
    }

    pub fn word_score(&self, word1: &str, word2: &str, algorithm: &str) -> Result<f64> {
        word::word_score(self, word1, word2, algorithm)
    }

    // Sentence operations (from sentence.rs)
    pub fn sentence_similarity(
        &self,
        sentence1: &str,
        sentence2: &str,
        algorithm: &str,
    ) -> Result<SentenceSimilarity> {
        sentence::sentence_similarity(self, sentence1, sentence2, algorithm)
    }

    pub fn token_similarity(
        &self,
        tokens1: &[String],
        tokens2: &[String],
        algorithm: &str,
    ) -> Result<SentenceSimilarity> {
        sentence::token_similarity(self, tokens1, tokens2, algorithm)
    }

    // Lookup operations (from lookup.rs)
    pub fn lookup_synsets(&self, word: &str) -> Result<WordSynsets> {
        lookup::lookup_synsets(self, word)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::types::{PartOfSpeech, SynsetRecord};

    pub(crate) fn engine() -> SimilarityEngine {
        use PartOfSpeech::{Noun, Verb};
        let records = vec![
            SynsetRecord::new("entity", Noun, &["entitate"]).with_gloss("ceea ce există"),
            SynsetRecord::new("animal", Noun, &["animal"])
                .with_gloss("ființă vie care se mișcă")
                .with_hypernyms(&["entity"]),
            SynsetRecord::new("dog", Noun, &["câine"])
                .with_gloss("animal domestic care latră")
                .with_hypernyms(&["animal"]),
            SynsetRecord::new("cat", Noun, &["pisică"])
                .with_gloss("animal domestic care miaună")
                .with_hypernyms(&["animal"]),
            SynsetRecord::new("house", Noun, &["casă"])
                .with_gloss("clădire pentru locuit")
                .with_hypernyms(&["entity"]),
            SynsetRecord::new("act", Verb, &["acționa"]),
            SynsetRecord::new("bark", Verb, &["lătra"]).with_hypernyms(&["act"]),
        ];
        let graph = crate::taxonomy::TaxonomyBuilder::with_records(records)
            .build()
            .unwrap();
        SimilarityEngine::from_graph(graph)
    }

    #[test]
    fn test_stats() {
        let engine = engine();
        let stats = engine.stats();
        assert_eq!(stats.synsets, 7);
        assert_eq!(stats.literals, 7);
        assert_eq!(stats.parts_of_speech.len(), 2);
        assert_eq!(stats.cache.entries, 0);
    }

    #[test]
    fn test_algorithms_catalogue() {
        let names: Vec<String> = engine().algorithms().into_iter().map(|a| a.name).collect();
        assert_eq!(names, vec!["PATH", "WUP", "LCH", "RES", "JCN", "LIN", "LESK", "HSO"]);
    }

    #[test]
    fn test_engines_are_independent() {
        let a = engine();
        let b = engine();
        a.word_similarity("câine", "pisică").unwrap();
        assert!(a.stats().cache.entries > 0);
        assert_eq!(b.stats().cache.entries, 0);
    }
}
