//! Climate API HTTP server binary.
//!
//! Initializes the repository, sets up the HTTP router, and starts serving
//! requests.
//!
//! # Usage
//!
//! ```bash
//! # Run with the in-memory repository (default)
//! cargo run --bin climate-server
//!
//! # Run against the SQLite dataset
//! DATABASE_URL=Resources/hawaii.sqlite \
//!   cargo run --bin climate-server --features "sqlite-repo,http-server"
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `DATABASE_URL`: Path to the SQLite dataset (required for sqlite-repo)
//! - `REPOSITORY_TYPE`: `sqlite` or `local` (default: inferred from DATABASE_URL)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use climate_api::db::{RepositoryFactory, RepositoryType};
use climate_api::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting climate API server");

    // The repository is created once and injected into the query engine
    // through the application state.
    let repo_type = RepositoryType::from_env();
    let repository = RepositoryFactory::create(repo_type)
        .map_err(|e| anyhow::anyhow!("repository initialization failed: {e}"))?;
    info!("Repository initialized ({:?})", repo_type);

    let state = AppState::new(repository);
    let app = create_router(state);

    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
