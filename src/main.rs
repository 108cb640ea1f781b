//! Synset Similarity Server - Binary Entry Point
//!
//! Loads the taxonomy once, then serves MCP over stdio (default) or the
//! HTTP/JSON API.

use std::net::SocketAddr;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use synset_similarity::api::{create_router, AppState};
use synset_similarity::config::{Cli, Command};
use synset_similarity::protocol::ServerInfo;
use synset_similarity::server::McpServer;
use synset_similarity::tools::register_all_tools;
use synset_similarity::types::McpResult;
use synset_similarity::SimilarityEngine;

fn main() -> ExitCode {
    // stdout carries MCP traffic, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.engine_config();

    let engine = match SimilarityEngine::load(&config) {
        Ok(engine) => Arc::new(engine),
        Err(e) => {
            error!(path = %config.taxonomy_path.display(), error = %e, "failed to load taxonomy");
            return ExitCode::FAILURE;
        }
    };

    let outcome = match cli.command() {
        Command::Mcp => run_mcp(engine),
        Command::Serve { addr } => run_http(engine, addr),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "server stopped with an error");
            ExitCode::FAILURE
        }
    }
}

fn run_mcp(engine: Arc<SimilarityEngine>) -> McpResult<()> {
    let server_info = ServerInfo::new(
        synset_similarity::NAME.to_string(),
        synset_similarity::VERSION.to_string(),
    );
    let mut server = McpServer::with_info(server_info);

    // Register all 4 tools
    register_all_tools(&mut server, engine);

    server.run()
}

fn run_http(engine: Arc<SimilarityEngine>, addr: SocketAddr) -> McpResult<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(serve_http(engine, addr))
}

async fn serve_http(engine: Arc<SimilarityEngine>, addr: SocketAddr) -> McpResult<()> {
    let app = create_router(Arc::new(AppState::new(engine)));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "http api listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("shutdown signal received");
        })
        .await?;
    Ok(())
}
