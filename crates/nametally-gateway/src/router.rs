//! Axum router wiring.
//!
//! Routes use `any()` because the handlers own method validation: every
//! method reaches the handler and non-accepted ones get the fixed 405 body.
//! Unmatched paths fall through to axum's default 404.

use axum::{routing::any, Router};

use crate::{app_state::AppState, handlers};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/hello/", any(handlers::greet::greet))
        .route("/hello/*name", any(handlers::greet::greet))
        .route("/health", any(handlers::health::health))
        .route("/counts", any(handlers::counts::counts))
        .with_state(state)
}
