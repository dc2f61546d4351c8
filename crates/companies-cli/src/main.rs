//! Companies Directory - main entry point.
//!
//! Loads configuration, reads the record collection once, then hands the
//! session to the terminal loop.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use companies_cli::run_repl;
use companies_core::{ConfigError, DirectoryConfig};
use companies_engine::DirectoryHandle;
use companies_source::{load_session, JsonFileSource};

/// Fallback data file when neither the flag nor the config names one.
const DEFAULT_DATA_FILE: &str = "companies.json";

#[derive(Parser)]
#[command(name = "companies")]
#[command(about = "Browse a directory of companies from the terminal")]
struct Args {
    /// JSON file with the company records
    #[arg(long)]
    data: Option<PathBuf>,

    /// Config file (defaults to <config dir>/companies/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Load timeout in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,
}

/// Initialize tracing. Logs go to stderr so stdout carries only the view.
///
/// Log levels can be controlled via the `RUST_LOG` environment variable.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing();

    let config = match &args.config {
        Some(path) => DirectoryConfig::load(path)?,
        None => match DirectoryConfig::load_default() {
            Err(ConfigError::NoConfigDir) => {
                tracing::warn!("No config directory found, using defaults");
                DirectoryConfig::default()
            }
            result => result?,
        },
    };

    let data_path = args
        .data
        .or_else(|| config.source.data_path.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));
    let timeout = args
        .timeout_ms
        .map(Duration::from_millis)
        .unwrap_or_else(|| config.source.load_timeout());

    let handle = DirectoryHandle::loading(config.view_options());
    let source = JsonFileSource::new(data_path);

    // The only async work is the one-time load
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;
    rt.block_on(load_session(&source, &handle, timeout))?;
    tracing::info!(
        "{} companies available",
        handle.read(|c| c.record_count())
    );

    let stdin = io::stdin();
    run_repl(&handle, stdin.lock(), io::stdout().lock())?;

    tracing::info!("Session ended");
    Ok(())
}
