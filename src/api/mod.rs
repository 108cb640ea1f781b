//! HTTP/JSON API over the similarity engine

pub mod http;
pub mod rest;
pub mod state;

pub use http::create_router;
pub use state::AppState;
