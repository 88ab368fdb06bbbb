use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::fs;
use tokio::sync::RwLock;

use super::error::ProfileError;
use super::schema;
use super::types::Portfolio;

/// Loads the portfolio document and memoizes it for the process lifetime.
///
/// The cache is an `RwLock` over the current document rather than a process
/// global, so each store owns its state and tests stay independent. On a
/// cache miss the write guard is held across the whole read-parse-validate
/// sequence, so at most one in-flight load populates the cache.
pub struct ProfileStore {
    path: PathBuf,
    cached: RwLock<Option<Arc<Portfolio>>>,
}

impl ProfileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cached: RwLock::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a prior load has populated the cache.
    pub async fn is_loaded(&self) -> bool {
        self.cached.read().await.is_some()
    }

    /// Load the portfolio document.
    ///
    /// With `use_cache` set, a previously loaded document is returned without
    /// touching the source file. Otherwise the file is read, parsed, and
    /// validated, and the fresh document replaces the cached one. Failures
    /// propagate to the caller and leave any cached document untouched.
    pub async fn load(&self, use_cache: bool) -> Result<Arc<Portfolio>, ProfileError> {
        if use_cache {
            if let Some(cached) = self.cached.read().await.as_ref() {
                return Ok(Arc::clone(cached));
            }
        }

        let mut slot = self.cached.write().await;
        if use_cache {
            // A concurrent load may have filled the cache while we waited.
            if let Some(cached) = slot.as_ref() {
                return Ok(Arc::clone(cached));
            }
        }

        let portfolio = Arc::new(self.read_and_validate().await?);
        *slot = Some(Arc::clone(&portfolio));
        Ok(portfolio)
    }

    /// Force a fresh read, replacing the cached document on success.
    pub async fn reload(&self) -> Result<Arc<Portfolio>, ProfileError> {
        self.load(false).await
    }

    async fn read_and_validate(&self) -> Result<Portfolio, ProfileError> {
        let raw = fs::read_to_string(&self.path).await.map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                ProfileError::SourceNotFound {
                    path: self.path.clone(),
                }
            } else {
                ProfileError::Io(e)
            }
        })?;

        let doc: serde_yaml::Value = serde_yaml::from_str(&raw)?;
        let portfolio = schema::validate(&doc)?;

        tracing::info!(
            path = %self.path.display(),
            name = %portfolio.personal.name,
            "loaded portfolio data"
        );
        Ok(portfolio)
    }
}
