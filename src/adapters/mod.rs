//! Infrastructure adapters. Implement ports.
//!
//! Timers, filesystem, terminal UI. Map errors to DomainError.

pub mod persistence;
pub mod scheduler;
pub mod ui;
