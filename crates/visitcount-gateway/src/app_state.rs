//! Shared application state.
//!
//! The store handle is built once at startup and shared read-only; nothing
//! in here changes per request.

use std::sync::Arc;

use visitcount_core::error::Result;

use crate::config::CounterConfig;
use crate::handler::VisitHandler;
use crate::obs::CounterMetrics;
use crate::store::{self, VisitStore};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: CounterConfig,
    handler: VisitHandler,
    metrics: Arc<CounterMetrics>,
}

impl AppState {
    /// Build state from config, opening the configured store.
    pub async fn new(cfg: CounterConfig) -> Result<Self> {
        let store = store::open(&cfg.store).await?;
        tracing::info!(table = %store.table(), backend = ?cfg.store.backend, "store ready");
        Ok(Self::with_store(cfg, store))
    }

    /// Build state around an existing store.
    pub fn with_store(cfg: CounterConfig, store: Arc<dyn VisitStore>) -> Self {
        let metrics = Arc::new(CounterMetrics::default());
        let handler = VisitHandler::new(store, Arc::clone(&metrics));
        Self {
            inner: Arc::new(AppStateInner { cfg, handler, metrics }),
        }
    }

    pub fn cfg(&self) -> &CounterConfig {
        &self.inner.cfg
    }

    pub fn handler(&self) -> &VisitHandler {
        &self.inner.handler
    }

    pub fn metrics(&self) -> &CounterMetrics {
        &self.inner.metrics
    }
}
