//! Command line and environment configuration

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Engine settings independent of the serving surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// JSON Lines taxonomy
    pub taxonomy_path: PathBuf,
    /// Optional JSON Lines literal counts for corpus-weighted IC
    pub frequency_path: Option<PathBuf>,
    /// Score cache entries; 0 disables caching
    pub cache_capacity: usize,
    /// Candidate synsets listed per word in responses
    pub max_candidates: usize,
    /// Characters of gloss shown per candidate
    pub gloss_preview: usize,
    /// Adopt parentless synsets under a synthetic root
    pub synthesize_roots: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            taxonomy_path: PathBuf::from("taxonomy.jsonl"),
            frequency_path: None,
            cache_capacity: 10_000,
            max_candidates: 20,
            gloss_preview: 200,
            synthesize_roots: true,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "similarity-server",
    version,
    about = "Semantic similarity over a synset taxonomy"
)]
pub struct Cli {
    /// Taxonomy file (JSON Lines, one synset per line)
    #[arg(long = "taxonomy", env = "SIMILARITY_TAXONOMY_PATH", default_value = "taxonomy.jsonl")]
    pub taxonomy_path: PathBuf,

    /// Literal frequency file (JSON Lines)
    #[arg(long = "frequencies", env = "SIMILARITY_FREQUENCY_PATH")]
    pub frequency_path: Option<PathBuf>,

    /// Score cache capacity (0 disables the cache)
    #[arg(long, env = "SIMILARITY_CACHE_CAPACITY", default_value_t = 10_000)]
    pub cache_capacity: usize,

    /// Candidate synsets listed per word
    #[arg(long, env = "SIMILARITY_MAX_CANDIDATES", default_value_t = 20)]
    pub max_candidates: usize,

    /// Gloss characters shown per candidate
    #[arg(long, env = "SIMILARITY_GLOSS_PREVIEW", default_value_t = 200)]
    pub gloss_preview: usize,

    /// Fail instead of adopting parentless synsets under a synthetic root
    #[arg(long)]
    pub no_synthetic_roots: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// JSON-RPC 2.0 (MCP) over stdin/stdout
    Mcp,
    /// HTTP/JSON API
    Serve {
        /// Listen address
        #[arg(long, env = "SIMILARITY_HTTP_ADDR", default_value = "0.0.0.0:8000")]
        addr: SocketAddr,
    },
}

impl Cli {
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            taxonomy_path: self.taxonomy_path.clone(),
            frequency_path: self.frequency_path.clone(),
            cache_capacity: self.cache_capacity,
            max_candidates: self.max_candidates,
            gloss_preview: self.gloss_preview,
            synthesize_roots: !self.no_synthetic_roots,
        }
    }

    /// Subcommand to run; MCP over stdio when none is given
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Mcp)
    }
}
