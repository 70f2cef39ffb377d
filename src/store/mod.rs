pub mod sales;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::OnceCell;

use crate::models::Dataset;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("'{0}' file not found")]
    NotFound(PathBuf),

    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid JSON in '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Lazily loaded, process-lifetime copy of the sales document.
///
/// The first `load()` reads the file; every later call returns the same
/// `Arc`. A failed load is cached as an empty dataset, so callers never see
/// an error and there is no reload.
pub struct DataStore {
    path: PathBuf,
    cache: OnceCell<Arc<Dataset>>,
}

impl DataStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: OnceCell::new(),
        }
    }

    /// Store that is already populated (no file access)
    pub fn from_dataset(dataset: Dataset) -> Self {
        Self {
            path: PathBuf::new(),
            cache: OnceCell::new_with(Some(Arc::new(dataset))),
        }
    }

    pub async fn load(&self) -> Arc<Dataset> {
        self.cache
            .get_or_init(|| async {
                match read_dataset(&self.path).await {
                    Ok(dataset) => {
                        tracing::info!(
                            path = %self.path.display(),
                            sales_reps = dataset.sales_reps.len(),
                            "sales data loaded"
                        );
                        Arc::new(dataset)
                    }
                    Err(e) => {
                        tracing::error!("Error: {}; serving an empty dataset", e);
                        Arc::new(Dataset::default())
                    }
                }
            })
            .await
            .clone()
    }
}

async fn read_dataset(path: &Path) -> Result<Dataset, LoadError> {
    let bytes = tokio::fs::read(path).await.map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    serde_json::from_slice(&bytes).map_err(|e| LoadError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}
