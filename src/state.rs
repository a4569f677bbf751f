//! Application state management for surfsup.
//!
//! This module defines the shared state that is passed to all handlers:
//! the resolved configuration and the handle on the climate database.

use std::sync::Arc;

use crate::config::Config;
use crate::store::ClimateStore;

/// The main application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    /// Configuration
    pub config: Config,
    /// Query layer over the climate database
    pub store: ClimateStore,
}

impl AppState {
    /// Create a new AppState
    pub fn new(config: Config, store: ClimateStore) -> Self {
        Self { config, store }
    }

    /// Create a new AppState wrapped in an Arc for shared ownership
    pub fn new_shared(config: Config, store: ClimateStore) -> Arc<Self> {
        Arc::new(Self::new(config, store))
    }
}
