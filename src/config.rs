//! Configuration and constants.
//!
//! Defines Cache-Control header values, default paths and strings, and the
//! per-binary configuration structs. Each binary builds its configuration
//! once at startup (environment, then CLI overrides) and hands an immutable
//! struct to the app state; handlers never read the environment.

use const_format::formatcp;
use std::path::PathBuf;

// =============================================================================
// HTTP Response Cache Control
// =============================================================================
// Cache-Control headers for upstream caches (Varnish, nginx, CDNs).
// All values are in seconds.

/// Landing page - content only changes when the process is redeployed
pub const HTTP_CACHE_PAGE_MAX_AGE: u32 = 60;
pub const HTTP_CACHE_PAGE_SWR: u32 = 30;

/// Embedded static assets (CSS, JS) - long cache with immutable hint
pub const HTTP_CACHE_STATIC_MAX_AGE: u32 = 86400;

// Pre-formatted Cache-Control header values (compile-time string concatenation)
pub const CACHE_CONTROL_PAGE: &str = formatcp!(
    "public, max-age={}, stale-while-revalidate={}",
    HTTP_CACHE_PAGE_MAX_AGE,
    HTTP_CACHE_PAGE_SWR
);

pub const CACHE_CONTROL_STATIC: &str =
    formatcp!("public, max-age={}, immutable", HTTP_CACHE_STATIC_MAX_AGE);

/// Counter page and health probes: every hit must reach the origin
pub const CACHE_CONTROL_NO_STORE: &str = "no-store";

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default listen address for both servers
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default listen port for both servers
pub const DEFAULT_PORT: u16 = 8080;

/// Default path of the counter file
pub const DEFAULT_COUNTER_FILE: &str = "/app/data/counter.txt";

/// Default application version when APP_VERSION is not set
pub const DEFAULT_APP_VERSION: &str = "1.0.0";

/// Default environment name when ENVIRONMENT is not set
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "vestibule=debug";

/// Environment variables read by the landing app
pub const ENV_APP_VERSION: &str = "APP_VERSION";
pub const ENV_ENVIRONMENT: &str = "ENVIRONMENT";

/// Configuration for the visit counter server
#[derive(Debug, Clone)]
pub struct CounterConfig {
    /// Listen address
    pub host: String,
    /// Listen port
    pub port: u16,
    /// Path of the counter file
    pub data_file: PathBuf,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            data_file: PathBuf::from(DEFAULT_COUNTER_FILE),
        }
    }
}

/// Configuration for the landing page server
#[derive(Debug, Clone)]
pub struct LandingConfig {
    /// Listen address
    pub host: String,
    /// Listen port
    pub port: u16,
    /// Version string shown on the page and in /health
    pub version: String,
    /// Environment name shown on the page
    pub environment: String,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl LandingConfig {
    /// Build the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source. An unset or
    /// empty variable falls back to the compiled default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            version: var_or(&lookup, ENV_APP_VERSION, DEFAULT_APP_VERSION),
            environment: var_or(&lookup, ENV_ENVIRONMENT, DEFAULT_ENVIRONMENT),
        }
    }
}

fn var_or(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    lookup(key)
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}
