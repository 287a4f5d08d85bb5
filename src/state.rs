//! Application state shared by all handlers.
//!
//! The dataset accessor is constructed by the caller and handed in, so
//! tests can serve a fixture database through the same router.

use std::sync::Arc;

use crate::config::Config;
use crate::dataset::Dataset;

/// The main application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    /// Configuration
    pub config: Config,
    /// Pooled, read-only dataset access
    pub dataset: Dataset,
}

impl AppState {
    /// Create a new AppState
    pub fn new(config: Config, dataset: Dataset) -> Self {
        Self { config, dataset }
    }

    /// Create a new AppState wrapped in an Arc for shared ownership
    pub fn new_shared(config: Config, dataset: Dataset) -> Arc<Self> {
        Arc::new(Self::new(config, dataset))
    }
}
