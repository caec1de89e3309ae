//! MyndStrong Host
//!
//! Serves the built front-end bundle and the catalog JSON.
//!
//! Run with: cargo run --bin myndstrong -- --static-dir myndstrong-ui/dist
//!
//! # Configuration
//!
//! Settings come from the config file (see `myndstrong-cli config`), then
//! environment variables, then the flags below:
//! - `MYNDSTRONG_HOST`: Host to bind to (default: 127.0.0.1)
//! - `MYNDSTRONG_PORT`: Port to listen on (default: 8084)
//! - `MYNDSTRONG_STATIC_DIR`: Front-end bundle directory
//! - `MYNDSTRONG_LOG_LEVEL` / `MYNDSTRONG_LOG_FORMAT`
//! - `RUST_LOG`: Overrides the log filter entirely

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

use myndstrong::api::{serve, AppState};
use myndstrong::config::Config;

#[derive(Parser)]
#[command(name = "myndstrong")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Serve the MyndStrong front-end")]
struct Args {
    /// Config file (default: search the standard locations)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Directory with the built front-end
    #[arg(long)]
    static_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let (mut config, origin) = Config::resolve(args.config.as_deref())?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(dir) = args.static_dir {
        config.server.static_dir = dir;
    }

    myndstrong::logging::init(&config.logging).context("failed to initialise logging")?;
    origin.log();

    tracing::info!("Starting MyndStrong v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Static directory: {:?}", config.server.static_dir);

    let state = AppState::new(config.server);
    tracing::info!(entries = state.catalog.total_entries(), "content catalog loaded");

    serve(state).await?;

    tracing::info!("MyndStrong host stopped");
    Ok(())
}
