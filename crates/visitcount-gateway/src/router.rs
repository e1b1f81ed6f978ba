//! Axum router wiring.
//!
//! - `POST /v1/visits` : request body is the event body
//! - `POST /v1/invoke` : request body is a whole invocation event
//! - `/healthz`, `/metrics` : ops

use axum::{
    routing::{get, post},
    Router,
};

use crate::{app_state::AppState, ops, transport};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/v1/visits", post(transport::http::visit))
        .route("/v1/invoke", post(transport::http::invoke))
        .route("/healthz", get(ops::healthz))
        .route("/metrics", get(ops::metrics))
        .with_state(state)
}
