//! Simulated network latency.

use std::time::Duration;

use async_trait::async_trait;

/// A delay awaited before a simulated remote call completes.
#[async_trait]
pub trait Latency: Send + Sync {
    /// Suspends the caller for the simulated delay.
    async fn wait(&self);
}

/// Latency backed by the tokio timer.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedLatency {
    duration: Duration,
}

impl SimulatedLatency {
    /// Creates a latency of the given duration.
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }

    /// Creates a latency of the given number of milliseconds.
    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }
}

#[async_trait]
impl Latency for SimulatedLatency {
    async fn wait(&self) {
        if !self.duration.is_zero() {
            tokio::time::sleep(self.duration).await;
        }
    }
}

/// Latency that completes immediately, for tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLatency;

#[async_trait]
impl Latency for NoLatency {
    async fn wait(&self) {}
}
