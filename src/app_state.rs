//! Implements a struct that holds the state of the REST server.

use std::{path::PathBuf, sync::Arc};

use crate::catalog::ChartCatalog;

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The charts that can be requested by slug.
    pub catalog: Arc<ChartCatalog>,

    /// The directory that static files are served from.
    pub static_dir: PathBuf,
}

impl AppState {
    /// Create a new [AppState] serving `catalog`.
    pub fn new(catalog: ChartCatalog, static_dir: impl Into<PathBuf>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            static_dir: static_dir.into(),
        }
    }
}
