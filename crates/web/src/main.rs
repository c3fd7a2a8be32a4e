use anyhow::Result;
use clap::Parser;
use lmm_core::tracing::{InstrumentationConfig, init_tracing};
use lmm_web::{App, Settings, server};
use std::path::PathBuf;
use tracing::info;

/// LMM web - serves the blog or manager bundle
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Bundle to serve
    #[arg(long, value_enum, default_value = "manager")]
    app: App,

    /// Directory holding the built bundle, overriding the configured one
    #[arg(long)]
    dist: Option<PathBuf>,

    /// Configuration file path
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let instrumentation_config =
        InstrumentationConfig::for_service("lmm-web", env!("CARGO_PKG_VERSION")).with_env();
    init_tracing(&instrumentation_config)?;

    if let Some(path) = &cli.config {
        info!("Loading configuration from: {}", path.display());
    }
    let mut settings = Settings::load(cli.app, cli.config.as_deref())?;
    if let Some(dist) = cli.dist {
        settings.dist_dir = dist;
    }

    info!(app = ?cli.app, "Starting static server");
    server::serve(settings).await?;

    Ok(())
}
