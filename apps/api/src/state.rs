use std::sync::Arc;

use tokio::sync::RwLock;

use crate::analysis::keywords::Taxonomy;
use crate::config::Config;
use crate::dataset::models::Dataset;
use crate::errors::AppError;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Fixed JD-R taxonomy, compiled once at startup.
    pub taxonomy: Arc<Taxonomy>,
    /// The currently loaded export. Requests take a snapshot and release the lock.
    dataset: Arc<RwLock<Option<Arc<Dataset>>>>,
}

impl AppState {
    pub fn new(config: Config, taxonomy: Taxonomy) -> Self {
        Self {
            config,
            taxonomy: Arc::new(taxonomy),
            dataset: Arc::new(RwLock::new(None)),
        }
    }

    /// Snapshot of the loaded dataset, or `NotFound` if nothing was loaded yet.
    pub async fn current_dataset(&self) -> Result<Arc<Dataset>, AppError> {
        self.dataset.read().await.clone().ok_or_else(|| {
            AppError::NotFound("No dataset loaded. Upload a CSV export first.".to_string())
        })
    }

    /// Replaces the loaded dataset and returns the new snapshot.
    pub async fn replace_dataset(&self, dataset: Dataset) -> Arc<Dataset> {
        let dataset = Arc::new(dataset);
        *self.dataset.write().await = Some(dataset.clone());
        dataset
    }
}
