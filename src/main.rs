use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use newsdash_backend::{routes, AppState, Config};

#[derive(Debug, Parser)]
#[command(name = "newsdash-backend", about = "News search and summary dashboard backend")]
struct Cli {
    /// Address to bind; overrides the config file
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on; overrides the config file
    #[arg(long)]
    port: Option<u16>,

    /// Configuration file (YAML, JSON or TOML)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("newsdash_backend=debug,tower_http=debug")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = Config::discover(cli.config.as_deref())?;
    if let Some(host) = cli.host {
        config.system.host = host;
    }
    if let Some(port) = cli.port {
        config.system.port = port;
    }
    config.warn_missing_credentials();

    std::fs::create_dir_all(config.system.output_path())?;
    info!("Serving audio from {}", config.system.output_dir);

    let host = config.system.host.clone();
    let port = config.system.port;
    let app_state = AppState::new(config)?;
    let app = routes::create_app(app_state);

    let listener = tokio::net::TcpListener::bind((host.as_str(), port)).await?;
    info!("Starting server on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
