//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("Message is empty")]
    EmptyMessage,

    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    /// A simulated run is still pending; the host should keep its Run action disabled.
    #[error("Code is already running")]
    AlreadyRunning,

    /// Pending timer was cancelled (session closed or interrupted).
    #[error("Operation cancelled")]
    Cancelled,

    #[error("Invalid reply table: {0}")]
    InvalidReplyTable(String),

    #[error("Code export failed: {0}")]
    Export(String),

    #[error("UI error: {0}")]
    Ui(String),
}
