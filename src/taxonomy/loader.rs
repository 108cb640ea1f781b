//! JSON Lines data sources for the taxonomy and literal frequencies
//!
//! One JSON object per line; blank lines are skipped. Any malformed record
//! aborts loading with the offending line number.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{info, warn};

use crate::error::{Result, SimilarityError};
use crate::types::SynsetRecord;

use super::{TaxonomyBuilder, TaxonomyGraph};

/// Corpus occurrence count of one literal
#[derive(Debug, Clone, Deserialize)]
pub struct FrequencyRecord {
    #[serde(alias = "word")]
    pub literal: String,
    pub count: f64,
}

/// Parse synset records from JSON Lines text
pub fn parse_records(content: &str) -> Result<Vec<SynsetRecord>> {
    parse_lines(content)
}

/// Read synset records from a JSON Lines file
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<SynsetRecord>> {
    let content = fs::read_to_string(path.as_ref())?;
    parse_records(&content)
}

/// Load and build a taxonomy graph from a JSON Lines file
pub fn load_taxonomy(path: impl AsRef<Path>, synthesize_roots: bool) -> Result<TaxonomyGraph> {
    let path = path.as_ref();
    let records = load_records(path)?;
    info!(path = %path.display(), records = records.len(), "taxonomy records read");

    TaxonomyBuilder::with_records(records)
        .synthesize_roots(synthesize_roots)
        .build()
}

/// Read literal frequencies; counts for repeated literals are summed
pub fn load_frequencies(path: impl AsRef<Path>) -> Result<HashMap<String, f64>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let records: Vec<FrequencyRecord> = parse_lines(&content)?;

    let (counts, skipped) = accumulate_counts(records);
    if skipped > 0 {
        warn!(
            path = %path.display(),
            skipped,
            "frequency lines with an empty literal or a non-positive count were skipped"
        );
    }
    info!(path = %path.display(), literals = counts.len(), "literal frequencies read");
    Ok(counts)
}

/// Sum counts per lowercased literal; returns the number of unusable records
fn accumulate_counts(records: Vec<FrequencyRecord>) -> (HashMap<String, f64>, usize) {
    let mut counts = HashMap::with_capacity(records.len());
    let mut skipped = 0;
    for record in records {
        let literal = record.literal.trim().to_lowercase();
        if literal.is_empty() || !record.count.is_finite() || record.count <= 0.0 {
            skipped += 1;
            continue;
        }
        *counts.entry(literal).or_insert(0.0) += record.count;
    }
    (counts, skipped)
}

fn parse_lines<T: DeserializeOwned>(content: &str) -> Result<Vec<T>> {
    let mut items = Vec::new();
    for (number, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let item = serde_json::from_str(line).map_err(|source| SimilarityError::Parse {
            line: number + 1,
            source,
        })?;
        items.push(item);
    }
    Ok(items)
}
