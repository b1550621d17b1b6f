//! Wordle backend - HTTP service entry point
//!
//! Selects a target word (persisted, remote, or fallback, in that order)
//! and serves the guess-scoring API.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wordle_server::server::router;
use wordle_server::session::Session;
use wordle_server::source::WordSource;
use wordle_server::store::StateStore;

#[derive(Parser)]
#[command(
    name = "wordle_server",
    about = "Wordle game backend: scores guesses over HTTP against a persisted secret word",
    version,
    author
)]
struct Cli {
    /// Address to listen on
    #[arg(short, long, default_value = "127.0.0.1:5000")]
    addr: SocketAddr,

    /// File holding the current target word across restarts
    #[arg(short, long, default_value = "game_state.json")]
    state_file: PathBuf,

    /// Word provider endpoint, repeatable, tried in order
    /// (defaults to the built-in public providers)
    #[arg(short, long = "endpoint")]
    endpoints: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let source = if cli.endpoints.is_empty() {
        WordSource::new()
    } else {
        WordSource::with_endpoints(cli.endpoints)
    };
    let store = StateStore::new(cli.state_file);

    let session = Arc::new(Session::initialize(source, store).await);
    let app = router(session);

    let listener = tokio::net::TcpListener::bind(cli.addr).await?;
    info!(addr = %listener.local_addr()?, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
