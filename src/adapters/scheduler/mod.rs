//! Scheduler adapters. Implement the `Scheduler` port.

pub mod immediate;
pub mod tokio_timer;

pub use immediate::ImmediateScheduler;
pub use tokio_timer::TokioScheduler;
