//! Application use cases. Orchestrate domain logic via ports.

pub mod chat_service;
pub mod execution_simulator;
pub mod response_selector;
pub mod terminal_service;

pub use chat_service::{ChatSession, greeting_after};
pub use execution_simulator::ExecutionSimulator;
pub use response_selector::{classify, select_reply};
pub use terminal_service::TerminalSession;
