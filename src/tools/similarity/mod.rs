//! Similarity tools for word pairs and sentence pairs

mod sentence_similarity;
mod word_similarity;

pub use sentence_similarity::SentenceSimilarityTool;
pub use word_similarity::WordSimilarityTool;
