//! Synset Similarity
//!
//! Semantic similarity between words and sentences over a WordNet-style
//! taxonomy of synsets, served over MCP (JSON-RPC on stdio) or HTTP.
//!
//! # Features
//!
//! - **8 Algorithms**: PATH, WUP, LCH (structure), RES, JCN, LIN (information
//!   content), LESK (gloss overlap), HSO (directed paths)
//! - **Word Resolution**: `lemma#pos#sense` annotations and a Romanian
//!   suffix lemmatizer
//! - **Sentence Alignment**: bidirectional best-match averaging
//! - **Thread-Safe**: immutable shared graph, bounded LRU score cache
//!
//! # Modules
//!
//! - `taxonomy`: Synset graph, builder and JSON Lines loader
//! - `information`: Information content from subsumption frequencies
//! - `search`: Common ancestors, directed paths, gloss tokens, literal index
//! - `similarity`: The eight measures and the score cache
//! - `resolver`: Word annotations, lemmatizers and best-pair selection
//! - `align`: Sentence tokenization and alignment
//! - `engine`: `SimilarityEngine` tying everything together
//! - `protocol`, `server`, `tools`: MCP surface
//! - `api`: HTTP surface
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use synset_similarity::config::EngineConfig;
//! use synset_similarity::tools::register_all_tools;
//! use synset_similarity::{McpServer, SimilarityEngine};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//!     let engine = Arc::new(SimilarityEngine::load(&EngineConfig::default())?);
//!     println!("{:?}", engine.word_similarity("câine", "pisică")?.results);
//!
//!     let mut server = McpServer::new();
//!     register_all_tools(&mut server, engine);
//!     server.run()
//! }
//! ```

pub mod align;
pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod information;
pub mod protocol;
pub mod resolver;
pub mod search;
pub mod server;
pub mod similarity;
pub mod taxonomy;
pub mod tools;
pub mod types;

// Re-export commonly used items at crate root
pub use align::{tokenize_sentence, Alignment, SentenceAligner};
pub use engine::{EngineStats, SimilarityEngine};
pub use error::{Result, SimilarityError};
pub use information::InformationContent;
pub use protocol::{McpTool, ServerInfo, Tool};
pub use resolver::{Lemmatizer, WordQuery, WordResolver};
pub use server::McpServer;
pub use similarity::{Algorithm, Measures, ScoreCache, SynsetScore};
pub use taxonomy::{SynsetIdx, TaxonomyBuilder, TaxonomyGraph};
pub use types::{
    McpResult, PartOfSpeech, SentenceSimilarity, Synset, SynsetRecord, WordSimilarity,
    WordSynsets,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
