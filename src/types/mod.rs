//! Data types for the similarity engine
//!
//! Synsets and raw taxonomy records, plus the response shapes returned by the
//! MCP tools and HTTP endpoints.

mod response;
mod synset;

pub use response::{
    AlgorithmInfo, AlgorithmResult, SentenceSimilarity, SynsetInfo, WordSimilarity, WordSynsets,
};
pub use synset::{LiteralEntry, PartOfSpeech, Synset, SynsetRecord};

/// Result type for MCP operations
pub type McpResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Round a score for presentation
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
