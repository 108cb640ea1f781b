//! Error types for the similarity engine.

use thiserror::Error;

use crate::types::PartOfSpeech;

/// Top-level error type for taxonomy construction and similarity queries.
///
/// Graph-construction variants (`MissingRoot`, `MultipleRoots`,
/// `CyclicHypernyms`, `CrossPosEdge`, `DuplicateSynset`, `UnknownSynset`,
/// `Parse`) are fatal at start-up. Request-time variants (`WordNotFound`,
/// `InvalidSenseIndex`, `InvalidAnnotation`, `UnknownAlgorithm`) are
/// recoverable and surfaced to the caller.
#[derive(Debug, Error)]
pub enum SimilarityError {
    /// Token resolves to no candidate synsets.
    #[error("word '{0}' not found in the taxonomy")]
    WordNotFound(String),

    /// Synset identifier not present in the graph.
    #[error("unknown synset '{0}'")]
    UnknownSynset(String),

    /// `lemma#pos#sense` asked for a sense rank that does not exist.
    #[error("sense {sense} requested for '{word}' but only {available} candidate(s) exist")]
    InvalidSenseIndex {
        word: String,
        sense: usize,
        available: usize,
    },

    /// Malformed `lemma#pos#sense` annotation.
    #[error("invalid word annotation: {0}")]
    InvalidAnnotation(String),

    /// Algorithm name not recognised.
    #[error("unknown algorithm '{0}'")]
    UnknownAlgorithm(String),

    /// A part of speech has synsets but no usable root.
    #[error("no root synset for part of speech '{0}'")]
    MissingRoot(PartOfSpeech),

    /// Several parentless synsets and root synthesis disabled.
    #[error("{count} parentless synsets for part of speech '{pos}' and no declared root")]
    MultipleRoots { pos: PartOfSpeech, count: usize },

    /// A synset declared as root has hypernyms of its own.
    #[error("declared root '{0}' has hypernyms")]
    RootHasHypernyms(String),

    /// Hypernym chain loops back on itself.
    #[error("hypernym cycle detected through synset '{0}'")]
    CyclicHypernyms(String),

    /// Hypernym or similar edge joining two parts of speech.
    #[error("edge {from} -> {to} crosses parts of speech")]
    CrossPosEdge { from: String, to: String },

    /// Two records share an identifier.
    #[error("duplicate synset '{0}'")]
    DuplicateSynset(String),

    /// Malformed record in a JSON Lines source.
    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// I/O error wrapper.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serde serialization/deserialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, SimilarityError>;
