//! Shared application state for the monitored service.

use std::sync::Arc;

use monit_core::Recorder;

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ServerConfig,
    recorder: Recorder,
}

impl AppState {
    /// The recorder is fixed here for the life of the process.
    pub fn new(cfg: ServerConfig, recorder: Recorder) -> Self {
        Self {
            inner: Arc::new(AppStateInner { cfg, recorder }),
        }
    }

    pub fn cfg(&self) -> &ServerConfig {
        &self.inner.cfg
    }

    pub fn recorder(&self) -> &Recorder {
        &self.inner.recorder
    }
}
