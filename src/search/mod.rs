//! Lookup and traversal over the taxonomy
//!
//! - Inverted literal index for candidate synsets
//! - Common-ancestor search (LCS, shortest path through a subsumer)
//! - Directed connecting paths for HSO
//! - Gloss tokenization for overlap measures

mod ancestors;
mod gloss;
mod index;
mod path;

pub use ancestors::{AncestorSearch, Connection, Subsumer};
pub use gloss::{gloss_tokens, is_stop_word, MIN_TOKEN_CHARS, STOP_WORDS};
pub use index::{IndexStats, LiteralIndex};
pub use path::{connecting_path, ConnectingPath, Direction, PathEdge, PathLimits};
