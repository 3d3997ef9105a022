//! Axum router wiring. Every route is wrapped by the request monitor.

use axum::{routing::get, Router};

use crate::{app_state::AppState, middleware::with_request_monitor, ops};

pub fn build_router(state: AppState) -> Router {
    let recorder = state.recorder().clone();
    let app = Router::new()
        .route("/healthz", get(ops::healthz))
        .route("/readyz", get(ops::readyz))
        .with_state(state);
    with_request_monitor(app, recorder)
}
