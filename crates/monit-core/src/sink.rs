use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::{MonitError, Result};
use crate::point::DataPoint;

/// A place metrics can be written to.
///
/// Implementations report failure through the returned `Result` and must not
/// panic. Callers log and drop errors; no ordering or delivery is promised.
#[async_trait]
pub trait Sink: Send + Sync {
    fn name(&self) -> &'static str;
    async fn write(&self, point: DataPoint) -> Result<()>;
}

/// Sink that keeps every point in memory. Useful as a test double and for
/// wiring checks without a backend.
#[derive(Default, Clone)]
pub struct MemorySink {
    points: Arc<Mutex<Vec<DataPoint>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything written so far, in arrival order.
    pub fn points(&self) -> Vec<DataPoint> {
        match self.points.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn len(&self) -> usize {
        match self.points.lock() {
            Ok(guard) => guard.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl Sink for MemorySink {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn write(&self, point: DataPoint) -> Result<()> {
        let mut guard = self
            .points
            .lock()
            .map_err(|_| MonitError::Internal("memory sink lock poisoned".into()))?;
        guard.push(point);
        Ok(())
    }
}
