//! The recorder: application-facing entry point for measurements.
//!
//! A `Recorder` holds zero or one sink, decided once at startup. It is cheap to
//! clone and is handed to whatever needs to record (request hooks, services).
//! Every `record_*` call hands the point to a detached tokio task and returns
//! at once, so recording adds no latency to the caller and never fails it.
//!
//! There is no backpressure: each call spawns one task, and a slow backend
//! lets tasks pile up.

use std::fmt;
use std::sync::Arc;
use std::time::SystemTime;

use crate::point::{DataPoint, FieldValue, Tags};
use crate::sink::Sink;

#[derive(Clone, Default)]
pub struct Recorder {
    sink: Option<Arc<dyn Sink>>,
}

impl fmt::Debug for Recorder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Recorder")
            .field("sink", &self.sink.as_ref().map(|s| s.name()))
            .finish()
    }
}

impl Recorder {
    pub fn new(sink: Arc<dyn Sink>) -> Self {
        Self { sink: Some(sink) }
    }

    /// Recorder with no sink; every operation is a no-op.
    pub fn disabled() -> Self {
        Self { sink: None }
    }

    pub fn from_sink(sink: Option<Arc<dyn Sink>>) -> Self {
        Self { sink }
    }

    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    /// Record `value` under `measurement` with no tags.
    pub fn record_simple(&self, measurement: impl Into<String>, value: impl Into<FieldValue>) {
        self.record_with_tags(measurement, value, Tags::new());
    }

    /// Record `value` under `measurement`, tagged with `error = <err message>`.
    pub fn record_error<E>(&self, measurement: impl Into<String>, value: impl Into<FieldValue>, err: &E)
    where
        E: std::error::Error + ?Sized,
    {
        let mut tags = Tags::new();
        tags.insert("error".to_string(), err.to_string());
        self.record_with_tags(measurement, value, tags);
    }

    /// Record `value` under `measurement` with `tags`, stamped now.
    pub fn record_with_tags(
        &self,
        measurement: impl Into<String>,
        value: impl Into<FieldValue>,
        tags: Tags,
    ) {
        self.record_at(measurement, value, tags, SystemTime::now());
    }

    /// Record with an explicit timestamp.
    pub fn record_at(
        &self,
        measurement: impl Into<String>,
        value: impl Into<FieldValue>,
        tags: Tags,
        at: SystemTime,
    ) {
        if self.sink.is_none() {
            return;
        }
        self.dispatch(DataPoint::new(measurement, value, tags, at));
    }

    /// Fire-and-forget: spawn a detached task that writes `point`.
    ///
    /// Drops the point when no sink is installed or when called outside a
    /// tokio runtime.
    pub fn dispatch(&self, point: DataPoint) {
        let Some(sink) = self.sink.clone() else {
            return;
        };
        let handle = match tokio::runtime::Handle::try_current() {
            Ok(h) => h,
            Err(_) => {
                tracing::warn!(
                    measurement = %point.measurement(),
                    "no tokio runtime on this thread; dropping data point"
                );
                return;
            }
        };
        handle.spawn(async move {
            write_logged(sink.as_ref(), point).await;
        });
    }

    /// Write `point` and wait for the sink. Errors are logged, not returned.
    pub async fn write(&self, point: DataPoint) {
        if let Some(sink) = &self.sink {
            write_logged(sink.as_ref(), point).await;
        }
    }
}

async fn write_logged(sink: &dyn Sink, point: DataPoint) {
    let measurement = point.measurement().to_string();
    if let Err(e) = sink.write(point).await {
        tracing::warn!(
            sink = sink.name(),
            %measurement,
            kind = e.kind(),
            error = %e,
            "metric write failed; data point dropped"
        );
    }
}
