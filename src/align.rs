//! Sentence alignment
//!
//! Every token of one sentence is scored against every token of the other
//! with `best_pair`; the sentence score averages the best match of each row
//! and of each column.

use std::sync::LazyLock;

use rayon::prelude::*;
use regex::Regex;
use tracing::debug;

use crate::resolver::WordResolver;
use crate::similarity::Algorithm;
use crate::taxonomy::SynsetIdx;

/// Matrix size (cells) above which rows are scored in parallel
const PARALLEL_ALIGN_THRESHOLD: usize = 64;

/// A run of letters, optionally carrying a `#pos`, `#pos#sense` or `##sense`
/// annotation
static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{L}+(?:#\p{L}*#\d+|#\p{L}+)?").unwrap());

/// Lowercased runs of letters; `lemma#pos#sense` annotations stay whole
pub fn tokenize_sentence(text: &str) -> Vec<String> {
    WORD_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

/// Token-by-token similarity matrix and its aggregate
#[derive(Debug, Clone, PartialEq)]
pub struct Alignment {
    pub resolved1: Vec<bool>,
    pub resolved2: Vec<bool>,
    /// `matrix[i][j]` is `None` when token `i` or token `j` is unresolved
    pub matrix: Vec<Vec<Option<f64>>>,
    pub score: f64,
}

impl Alignment {
    fn empty(resolved1: Vec<bool>, resolved2: Vec<bool>) -> Self {
        Self {
            resolved1,
            resolved2,
            matrix: Vec::new(),
            score: 0.0,
        }
    }
}

/// Aligns token sequences through a [`WordResolver`]
#[derive(Clone, Copy)]
pub struct SentenceAligner<'a> {
    resolver: WordResolver<'a>,
}

impl<'a> SentenceAligner<'a> {
    pub fn new(resolver: WordResolver<'a>) -> Self {
        Self { resolver }
    }

    fn candidates(&self, tokens: &[String]) -> Vec<Option<Vec<SynsetIdx>>> {
        tokens
            .iter()
            .map(|token| match self.resolver.resolve(token) {
                Ok(synsets) => Some(synsets),
                Err(err) => {
                    debug!(token = %token, error = %err, "token left unaligned");
                    None
                }
            })
            .collect()
    }

    pub fn align(&self, tokens1: &[String], tokens2: &[String], algorithm: Algorithm) -> Alignment {
        let candidates1 = self.candidates(tokens1);
        let candidates2 = self.candidates(tokens2);
        let resolved1: Vec<bool> = candidates1.iter().map(Option::is_some).collect();
        let resolved2: Vec<bool> = candidates2.iter().map(Option::is_some).collect();

        if !resolved1.contains(&true) || !resolved2.contains(&true) {
            return Alignment::empty(resolved1, resolved2);
        }

        let row = |c1: &Option<Vec<SynsetIdx>>| -> Vec<Option<f64>> {
            candidates2
                .iter()
                .map(|c2| match (c1, c2) {
                    (Some(c1), Some(c2)) => Some(self.resolver.best_pair(c1, c2, algorithm).score),
                    _ => None,
                })
                .collect()
        };
        let matrix: Vec<Vec<Option<f64>>> =
            if tokens1.len() * tokens2.len() > PARALLEL_ALIGN_THRESHOLD {
                candidates1.par_iter().map(row).collect()
            } else {
                candidates1.iter().map(row).collect()
            };

        let score = aggregate(&matrix, tokens2.len());
        Alignment {
            resolved1,
            resolved2,
            matrix,
            score,
        }
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

fn max_defined(values: impl Iterator<Item = Option<f64>>) -> Option<f64> {
    values.flatten().reduce(f64::max)
}

/// `(mean of row maxima + mean of column maxima) / 2`, over rows and columns
/// holding at least one defined value
pub fn aggregate(matrix: &[Vec<Option<f64>>], columns: usize) -> f64 {
    let row_best: Vec<f64> = matrix
        .iter()
        .filter_map(|row| max_defined(row.iter().copied()))
        .collect();
    let column_best: Vec<f64> = (0..columns)
        .filter_map(|j| max_defined(matrix.iter().map(|row| row.get(j).copied().flatten())))
        .collect();
    if row_best.is_empty() || column_best.is_empty() {
        return 0.0;
    }
    (mean(&row_best) + mean(&column_best)) / 2.0
}
