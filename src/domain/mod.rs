//! Core domain layer. No external I/O dependencies.
//!
//! Entities, static tables and business rules live here. Dependencies flow inward.

pub mod catalog;
pub mod entities;
pub mod errors;
pub mod examples;
pub mod replies;

pub use entities::{
    Category, Difficulty, Language, LanguageExample, Message, Origin, Project, RunState,
};
pub use errors::DomainError;
pub use replies::ReplyTable;
