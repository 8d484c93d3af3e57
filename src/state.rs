//! Shared application state for request handlers.

use std::sync::Arc;
use tera::Tera;

use crate::config::{CounterConfig, LandingConfig};
use crate::store::FileCounterStore;

/// State for the counter server, cloneable across handlers via Arc-wrapped fields.
///
/// Contains the configuration, the Tera template engine, and the file-backed
/// counter store.
#[derive(Clone)]
pub struct CounterState {
    pub config: Arc<CounterConfig>,
    pub tera: Arc<Tera>,
    pub store: Arc<FileCounterStore>,
}

impl CounterState {
    /// Creates a new counter state from the given configuration, templates, and store.
    pub fn new(config: CounterConfig, tera: Tera, store: FileCounterStore) -> Self {
        Self {
            config: Arc::new(config),
            tera: Arc::new(tera),
            store: Arc::new(store),
        }
    }
}

/// State for the landing page server.
#[derive(Clone)]
pub struct LandingState {
    pub config: Arc<LandingConfig>,
    pub tera: Arc<Tera>,
}

impl LandingState {
    /// Creates a new landing state from the given configuration and templates.
    pub fn new(config: LandingConfig, tera: Tera) -> Self {
        Self {
            config: Arc::new(config),
            tera: Arc::new(tera),
        }
    }
}
