//! Visit counter server entry point.
//!
//! Initializes tracing, builds the configuration from CLI arguments, opens
//! the file-backed counter store, registers the embedded templates, and
//! serves the counter page until shutdown.

use std::net::SocketAddr;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vestibule::config::{CounterConfig, DEFAULT_LOG_FILTER};
use vestibule::routes::counter_router;
use vestibule::serve;
use vestibule::state::CounterState;
use vestibule::store::FileCounterStore;
use vestibule::templates::init_templates;

/// Vestibule visit counter server
#[derive(Parser, Debug)]
#[command(name = "vestibule-counter", version, about)]
struct Args {
    /// Address to listen on
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Path of the counter file
    #[arg(short, long)]
    data_file: Option<String>,

    /// Log level filter (e.g., "vestibule=debug")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = CounterConfig::default();
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(data_file) = args.data_file {
        config.data_file = data_file.into();
    }

    // Open the store, creating the data directory if needed
    let store = FileCounterStore::open(&config.data_file)?;
    tracing::info!(
        path = %store.path().display(),
        count = store.load(),
        "Opened counter store"
    );

    let tera = init_templates()?;
    tracing::info!("Initialized templates");

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    let state = CounterState::new(config, tera, store);
    let app = counter_router(state);

    serve::run(app, addr).await?;

    Ok(())
}
