//! Visit counter handler.
//!
//! `handle` is the single response-construction point: every failure is
//! mapped to a status code here, so the host always gets a well-formed
//! response. One store mutation on success, none when validation fails.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Instant;

use futures_util::FutureExt;
use tracing::{error, info, warn};

use visitcount_core::error::{ClientCode, Result, VisitCountError};
use visitcount_core::path;
use visitcount_core::protocol::{InvocationEvent, InvocationResponse, VisitBody};

use crate::obs::CounterMetrics;
use crate::store::VisitStore;

#[derive(Clone)]
pub struct VisitHandler {
    store: Arc<dyn VisitStore>,
    metrics: Arc<CounterMetrics>,
}

impl VisitHandler {
    pub fn new(store: Arc<dyn VisitStore>, metrics: Arc<CounterMetrics>) -> Self {
        Self { store, metrics }
    }

    pub fn store(&self) -> &Arc<dyn VisitStore> {
        &self.store
    }

    /// Count one visit and build the response. Never fails.
    pub async fn handle(&self, event: &InvocationEvent) -> InvocationResponse {
        let outcome = AssertUnwindSafe(self.count_visit(event))
            .catch_unwind()
            .await
            .unwrap_or_else(|panic| Err(VisitCountError::Unexpected(panic_message(panic))));

        match outcome {
            Ok(visit) => {
                self.metrics.invocations.inc(&[("outcome", "ok")]);
                info!(path = %visit.path, visit_count = visit.visit_count, "visit counted");
                InvocationResponse::visit(&visit.path, visit.visit_count)
            }
            Err(err) => {
                let code = err.client_code();
                self.metrics.invocations.inc(&[("outcome", code.as_str())]);
                match code {
                    ClientCode::InvalidInput => warn!(error = %err, "rejected visit"),
                    ClientCode::StoreFailure => error!(table = %self.store.table(), error = %err, "store update failed"),
                    ClientCode::Unexpected => error!(error = %err, "visit failed"),
                }
                InvocationResponse::error(&err)
            }
        }
    }

    /// Normalize the path and perform the atomic increment.
    pub async fn count_visit(&self, event: &InvocationEvent) -> Result<VisitBody> {
        let body = event.request_body()?;
        let path = path::normalize(body.requested_path()?)?;

        let started = Instant::now();
        let updated = self.store.increment(&path).await;
        self.metrics
            .store_duration
            .observe(&[("table", self.store.table())], started.elapsed());

        let visit_count = updated?.to_count()?;
        Ok(VisitBody { path, visit_count })
    }
}

fn panic_message(panic: Box<dyn Any + Send>) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "handler panicked".to_string()
    }
}
