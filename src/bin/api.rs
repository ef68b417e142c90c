//! OctoFit API Server
//!
//! Run with: cargo run --bin octofit-api
//!
//! # Configuration
//!
//! Settings come from the config file (see `octofit-cli config`), then
//! environment variables, then the flags below:
//! - `OCTOFIT_HOST`: Host to bind to (default: 0.0.0.0)
//! - `OCTOFIT_PORT`: Port to listen on (default: 8000)
//! - `OCTOFIT_PAGE_SIZE`: Serve paginated collections (default: off)
//! - `OCTOFIT_LOG_LEVEL` / `RUST_LOG`: Log level (default: info)

use std::path::PathBuf;

use clap::Parser;

use octofit::api::{serve, AppState};
use octofit::config::Config;
use octofit::store::Store;

#[derive(Parser)]
#[command(name = "octofit-api")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Read-only demo API for the OctoFit dashboard")]
struct Args {
    /// Config file (default: search the standard locations)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long)]
    host: Option<String>,

    #[arg(short, long)]
    port: Option<u16>,

    /// Paginate collections with this many records per page
    #[arg(long)]
    page_size: Option<usize>,

    /// Seed for the generated demo data
    #[arg(long)]
    seed: Option<u64>,

    /// Serve every collection empty
    #[arg(long)]
    empty: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(size) = args.page_size {
        config.server.page_size = (size > 0).then_some(size);
    }
    if let Some(seed) = args.seed {
        config.server.seed = seed;
    }

    octofit::logging::init(&config.logging);

    tracing::info!("Starting OctoFit API server v{}", env!("CARGO_PKG_VERSION"));

    let store = if args.empty {
        tracing::info!("Serving empty collections");
        Store::empty()
    } else {
        tracing::info!("Seeding demo data (seed {})", config.server.seed);
        Store::seeded(config.server.seed)
    };

    match config.server.page_size {
        Some(size) => tracing::info!("Paginating collections, {} per page", size),
        None => tracing::info!("Serving collections as bare arrays"),
    }

    serve(AppState::new(store, config.server)).await?;

    tracing::info!("OctoFit API server stopped");
    Ok(())
}
