//! Response types shared by the MCP tools and the HTTP API

use serde::{Deserialize, Serialize};

use super::{PartOfSpeech, Synset};

/// Candidate synset shown alongside a result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynsetInfo {
    pub id: String,
    pub literals: Vec<String>,
    pub pos: PartOfSpeech,
    pub definition: String,
}

impl SynsetInfo {
    /// Build display info, truncating the definition to `preview_chars` characters
    pub fn from_synset(synset: &Synset, preview_chars: usize) -> Self {
        Self {
            id: synset.id.clone(),
            literals: synset.literals.clone(),
            pos: synset.pos,
            definition: synset.gloss_text().chars().take(preview_chars).collect(),
        }
    }
}

/// Score of one algorithm for a word pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlgorithmResult {
    pub algorithm: String,
    pub similarity: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synset1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synset2: Option<String>,
}

/// Result of a word-similarity request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordSimilarity {
    pub word1: String,
    pub word2: String,
    pub results: Vec<AlgorithmResult>,
    pub synsets1: Vec<SynsetInfo>,
    pub synsets2: Vec<SynsetInfo>,
}

/// Result of a synset lookup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordSynsets {
    pub word: String,
    pub synsets: Vec<SynsetInfo>,
}

/// Result of a sentence-similarity request
///
/// `matrix[i][j]` is `None` when token `i` or token `j` did not resolve.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentenceSimilarity {
    pub algorithm: String,
    pub similarity: f64,
    pub words1: Vec<String>,
    pub words2: Vec<String>,
    pub resolved1: Vec<bool>,
    pub resolved2: Vec<bool>,
    pub matrix: Vec<Vec<Option<f64>>>,
}

/// Catalogue entry describing one algorithm
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlgorithmInfo {
    pub name: String,
    pub description: String,
    pub range: String,
}
