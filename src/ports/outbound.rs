//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::DomainError;
use std::path::PathBuf;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Scheduled completion supplied by the host. Keeps use cases free of wall-clock waits.
#[async_trait::async_trait]
pub trait Scheduler: Send + Sync {
    /// Completes once `delay` has elapsed.
    ///
    /// Returns `DomainError::Cancelled` as soon as `cancel` fires, even before the delay is over.
    async fn after(&self, delay: Duration, cancel: &CancellationToken) -> Result<(), DomainError>;
}

/// Saves editor contents somewhere the user can pick them up.
#[async_trait::async_trait]
pub trait CodeExportPort: Send + Sync {
    /// Write `code` under `file_name`. Returns the final location.
    async fn export(&self, file_name: &str, code: &str) -> Result<PathBuf, DomainError>;
}
