//! Recorder setup from configuration.

use std::sync::Arc;

use monit_core::Recorder;

use crate::sink::InfluxSink;

/// Environment variable holding the InfluxDB connection URL.
pub const INFLUXDB_URL_ENV: &str = "INFLUXDB_URL";

/// Build a recorder backed by InfluxDB, or a disabled one when `raw` is
/// absent, empty or invalid.
pub async fn recorder_from_url(raw: Option<&str>) -> Recorder {
    let sink = match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(url) => InfluxSink::connect(url).await,
        None => None,
    };

    match sink {
        Some(sink) => Recorder::new(Arc::new(sink)),
        None => {
            tracing::warn!("no InfluxDB monitor configured; monitoring disabled");
            Recorder::disabled()
        }
    }
}

/// Same as [`recorder_from_url`] with the value of `INFLUXDB_URL`.
pub async fn recorder_from_env() -> Recorder {
    recorder_from_env_or(None).await
}

/// `INFLUXDB_URL` when set and non-empty, otherwise `fallback`.
pub async fn recorder_from_env_or(fallback: Option<&str>) -> Recorder {
    let env = std::env::var(INFLUXDB_URL_ENV).ok();
    let url = resolve_url(fallback, env.as_deref());
    recorder_from_url(url.as_deref()).await
}

/// Pick the InfluxDB URL: a non-empty `env` value wins over `fallback`.
pub fn resolve_url(fallback: Option<&str>, env: Option<&str>) -> Option<String> {
    env.map(str::trim)
        .filter(|s| !s.is_empty())
        .or_else(|| fallback.map(str::trim).filter(|s| !s.is_empty()))
        .map(str::to_string)
}
