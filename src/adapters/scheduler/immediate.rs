//! Scheduler that completes at once. Used for the `instant` config mode and in tests.

use crate::domain::DomainError;
use crate::ports::Scheduler;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Default, Clone, Copy)]
pub struct ImmediateScheduler;

#[async_trait::async_trait]
impl Scheduler for ImmediateScheduler {
    async fn after(&self, _delay: Duration, cancel: &CancellationToken) -> Result<(), DomainError> {
        if cancel.is_cancelled() {
            return Err(DomainError::Cancelled);
        }
        Ok(())
    }
}
