//! InfluxDB sink: ping at startup, one HTTP write per point.

use async_trait::async_trait;
use serde::Deserialize;

use monit_core::error::{MonitError, Result};
use monit_core::{DataPoint, Sink};

use crate::config::InfluxConfig;
use crate::line;

#[derive(Debug, Clone)]
pub struct InfluxSink {
    cfg: InfluxConfig,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

impl InfluxSink {
    pub fn new(cfg: InfluxConfig) -> Self {
        Self { cfg }
    }

    /// Parse `raw` and build a sink.
    ///
    /// Returns `None` for an empty or invalid URL. The ping only feeds the
    /// log: an unreachable backend still yields a sink, since it may come up
    /// later.
    pub async fn connect(raw: &str) -> Option<Self> {
        let cfg = match InfluxConfig::parse(raw) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::warn!(error = %e, "InfluxDB url parse failed");
                return None;
            }
        };
        if cfg.database().is_empty() {
            tracing::warn!(endpoint = %cfg.redacted(), "InfluxDB url names no database; writes will be rejected");
        }

        let sink = Self::new(cfg);
        match sink.ping().await {
            Ok(()) => tracing::info!(
                database = %sink.cfg.database(),
                endpoint = %sink.cfg.redacted(),
                "logging operations to InfluxDB"
            ),
            Err(e) => tracing::warn!(
                endpoint = %sink.cfg.redacted(),
                error = %e,
                "InfluxDB ping failed; writes will still be attempted"
            ),
        }
        Some(sink)
    }

    pub fn config(&self) -> &InfluxConfig {
        &self.cfg
    }

    pub async fn ping(&self) -> Result<()> {
        let resp = self
            .cfg
            .client()?
            .get(self.cfg.ping_url())
            .send()
            .await
            .map_err(|e| MonitError::Transport(e.to_string()))?;

        if resp.status().is_success() {
            Ok(())
        } else {
            Err(MonitError::Rejected {
                status: resp.status().as_u16(),
                message: "ping failed".into(),
            })
        }
    }

    /// Write one point and report the outcome.
    pub async fn submit(&self, point: &DataPoint) -> Result<()> {
        let body = line::encode(point)?;
        let resp = self
            .cfg
            .client()?
            .post(self.cfg.write_url())
            .body(body)
            .send()
            .await
            .map_err(|e| MonitError::Transport(e.to_string()))?;

        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }

        let text = resp.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<ErrorBody>(&text) {
            Ok(b) => b.error,
            Err(_) => text.trim().to_string(),
        };
        Err(MonitError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl Sink for InfluxSink {
    fn name(&self) -> &'static str {
        "influxdb"
    }

    /// Failures stop here: they are logged and the call still reports success.
    async fn write(&self, point: DataPoint) -> Result<()> {
        if let Err(e) = self.submit(&point).await {
            tracing::warn!(
                database = %self.cfg.database(),
                measurement = %point.measurement(),
                kind = e.kind(),
                error = %e,
                "InfluxDB write failed"
            );
        }
        Ok(())
    }
}
