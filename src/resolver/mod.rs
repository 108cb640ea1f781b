//! Word resolution and best-pair selection
//!
//! Tokens (optionally annotated as `lemma#pos#sense`) resolve to ordered
//! candidate synsets; `best_pair` scores the Cartesian product of two
//! candidate lists and keeps the first maximum.

mod annotation;
mod lemmatizer;

pub use annotation::{parse_annotation, WordQuery};
pub use lemmatizer::{IdentityLemmatizer, Lemmatizer, SuffixLemmatizer};

use tracing::debug;

use crate::error::{Result, SimilarityError};
use crate::similarity::{Algorithm, Measures, ScoreCache, SynsetScore};
use crate::taxonomy::{SynsetIdx, TaxonomyGraph};

/// Candidates for one query and the form that produced them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub lemma: String,
    pub synsets: Vec<SynsetIdx>,
}

/// Highest-scoring same-POS pair of two candidate lists
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BestPair {
    pub synset1: Option<SynsetIdx>,
    pub synset2: Option<SynsetIdx>,
    pub score: f64,
}

impl BestPair {
    pub const NONE: BestPair = BestPair {
        synset1: None,
        synset2: None,
        score: 0.0,
    };
}

/// Resolves tokens against one taxonomy and scores candidate pairs
#[derive(Clone, Copy)]
pub struct WordResolver<'a> {
    measures: Measures<'a>,
    lemmatizer: &'a dyn Lemmatizer,
    cache: Option<&'a ScoreCache>,
}

impl<'a> WordResolver<'a> {
    pub fn new(measures: Measures<'a>, lemmatizer: &'a dyn Lemmatizer) -> Self {
        Self {
            measures,
            lemmatizer,
            cache: None,
        }
    }

    /// Memoize pair scores in `cache`
    pub fn with_cache(mut self, cache: &'a ScoreCache) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn graph(&self) -> &'a TaxonomyGraph {
        self.measures.graph()
    }

    /// Candidate synsets for a token or `lemma#pos#sense` annotation
    pub fn resolve(&self, token: &str) -> Result<Vec<SynsetIdx>> {
        let query = WordQuery::parse(token)?;
        Ok(self.resolve_query(&query)?.synsets)
    }

    /// Surface form first, then the lemmatizer's candidates; the first form
    /// with synsets of the requested part of speech wins. A sense rank then
    /// selects a single candidate.
    pub fn resolve_query(&self, query: &WordQuery) -> Result<Resolution> {
        let graph = self.graph();
        let forms = std::iter::once(query.lemma.clone())
            .chain(self.lemmatizer.candidates(&query.lemma));

        let mut found = None;
        for form in forms {
            let synsets = graph.candidates(&form, query.pos);
            if !synsets.is_empty() {
                found = Some(Resolution {
                    lemma: form,
                    synsets,
                });
                break;
            }
        }
        let Some(mut resolution) = found else {
            debug!(query = %query, "no synsets");
            return Err(SimilarityError::WordNotFound(query.lemma.clone()));
        };

        if let Some(sense) = query.sense {
            let available = resolution.synsets.len();
            if sense == 0 || sense > available {
                return Err(SimilarityError::InvalidSenseIndex {
                    word: query.lemma.clone(),
                    sense,
                    available,
                });
            }
            resolution.synsets = vec![resolution.synsets[sense - 1]];
        }

        debug!(
            query = %query,
            lemma = %resolution.lemma,
            candidates = resolution.synsets.len(),
            "resolved"
        );
        Ok(resolution)
    }

    /// Score one pair, through the cache when present
    pub fn score(&self, algorithm: Algorithm, s1: SynsetIdx, s2: SynsetIdx) -> SynsetScore {
        match self.cache {
            Some(cache) => cache.get_or_insert_with(s1, s2, algorithm, || {
                self.measures.score(algorithm, s1, s2)
            }),
            None => self.measures.score(algorithm, s1, s2),
        }
    }

    /// Exhaustive search over `c1 × c2`, skipping cross-POS pairs.
    ///
    /// A later pair must score strictly higher to replace the current best,
    /// so ties go to the earliest pair in candidate rank order.
    pub fn best_pair(&self, c1: &[SynsetIdx], c2: &[SynsetIdx], algorithm: Algorithm) -> BestPair {
        let graph = self.graph();
        let mut best: Option<BestPair> = None;

        for &s1 in c1 {
            for &s2 in c2 {
                if graph.pos_of(s1) != graph.pos_of(s2) {
                    continue;
                }
                let score = self.score(algorithm, s1, s2).value;
                if best.map_or(true, |b| score > b.score) {
                    best = Some(BestPair {
                        synset1: Some(s1),
                        synset2: Some(s2),
                        score,
                    });
                }
            }
        }
        best.unwrap_or(BestPair::NONE)
    }
}
