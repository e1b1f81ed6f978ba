//! Key-value store seam for visit counters.
//!
//! A store owns one table keyed by `path` with a `visit_count` attribute and
//! exposes exactly one mutation: an atomic "initialize to 0 if absent, then
//! add 1" that returns the post-update value. Handlers must never emulate it
//! with a read followed by a write.

pub mod memory;
pub mod sqlite;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use visitcount_core::count::StoreNumber;
use visitcount_core::error::{Result, VisitCountError};

use crate::config::{StoreBackend, StoreSection};

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Atomic per-path counter storage.
#[async_trait]
pub trait VisitStore: Send + Sync {
    /// Logical table name, used in logs and metric labels.
    fn table(&self) -> &str;

    /// Atomically increment the counter for `path` and return its new value.
    async fn increment(&self, path: &str) -> std::result::Result<StoreNumber, StoreError>;
}

/// Failure reported by a store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Backend-provided message, passed to callers verbatim.
    #[error("{0}")]
    Backend(String),
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("store task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl From<StoreError> for VisitCountError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Join(e) => VisitCountError::Unexpected(format!("store task failed: {e}")),
            other => VisitCountError::Store(other.to_string()),
        }
    }
}

/// Build the configured store. Called once at startup; the handle is shared.
pub async fn open(cfg: &StoreSection) -> Result<Arc<dyn VisitStore>> {
    match (cfg.backend, &cfg.sqlite_path) {
        (StoreBackend::Memory, _) => Ok(Arc::new(MemoryStore::new(cfg.table.clone()))),
        (StoreBackend::Sqlite, Some(path)) => {
            let store = SqliteStore::open(path.clone(), cfg.table.clone()).await?;
            Ok(Arc::new(store))
        }
        (StoreBackend::Sqlite, None) => Err(VisitCountError::InvalidInput(
            "store.sqlite_path is required when store.backend is sqlite".into(),
        )),
    }
}
