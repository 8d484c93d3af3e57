//! Landing page server entry point.
//!
//! Initializes tracing, builds the configuration once from the environment
//! (APP_VERSION, ENVIRONMENT) plus CLI overrides, registers the embedded
//! templates, and serves the landing page, health endpoint, and embedded
//! static assets until shutdown.

use std::net::SocketAddr;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vestibule::config::{DEFAULT_LOG_FILTER, LandingConfig};
use vestibule::routes::landing_router;
use vestibule::serve;
use vestibule::state::LandingState;
use vestibule::templates::init_templates;

/// Vestibule landing page server
#[derive(Parser, Debug)]
#[command(name = "vestibule-landing", version, about)]
struct Args {
    /// Address to listen on
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

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

    let mut config = LandingConfig::from_env();
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }

    tracing::info!(
        version = %config.version,
        environment = %config.environment,
        "Loaded configuration"
    );

    let tera = init_templates()?;
    tracing::info!("Initialized templates");

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    let state = LandingState::new(config, tera);
    let app = landing_router(state);

    serve::run(app, addr).await?;

    Ok(())
}
