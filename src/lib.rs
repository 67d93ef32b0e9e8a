//! techibug: BugBot chat assistant and simulated code terminal, with Hexagonal Architecture.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
