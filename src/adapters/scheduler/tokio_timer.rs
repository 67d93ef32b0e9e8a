//! Timer-backed scheduler. Suspends the task with `tokio::time::sleep`, never blocks the thread.

use crate::domain::DomainError;
use crate::ports::Scheduler;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::debug;

#[derive(Debug, Default, Clone, Copy)]
pub struct TokioScheduler;

#[async_trait::async_trait]
impl Scheduler for TokioScheduler {
    async fn after(&self, delay: Duration, cancel: &CancellationToken) -> Result<(), DomainError> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!(delay_ms = delay.as_millis() as u64, "scheduled completion cancelled");
                Err(DomainError::Cancelled)
            }
            _ = tokio::time::sleep(delay) => Ok(()),
        }
    }
}
