//! Operational HTTP endpoints.
//!
//! - `/healthz` : liveness
//! - `/readyz`  : readiness, reports whether monitoring is enabled

use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::app_state::AppState;

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub async fn readyz(State(state): State<AppState>) -> impl IntoResponse {
    if state.recorder().is_enabled() {
        (StatusCode::OK, "monitoring enabled")
    } else {
        (StatusCode::OK, "monitoring disabled")
    }
}
