//! monit HTTP layer.
//!
//! Request instrumentation for axum (one `request` point per handled
//! request), plus the pieces of a small monitored service: config loading,
//! shared state, operational endpoints and router wiring. Consumed by the
//! binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod middleware;
pub mod ops;
pub mod router;

pub use middleware::{request_monitor, with_request_monitor};
