//! InfluxDB 1.x backend for monit.
//!
//! Parses an `INFLUXDB_URL`-style connection string once, then writes each
//! data point as a single line of line protocol over the HTTP API. Backend
//! trouble is logged and swallowed here; nothing propagates to recorders.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod config;
pub mod init;
pub mod line;
pub mod sink;

pub use config::InfluxConfig;
pub use init::{
    recorder_from_env, recorder_from_env_or, recorder_from_url, resolve_url, INFLUXDB_URL_ENV,
};
pub use sink::InfluxSink;
