//! Domain entities. Pure data structures for the core business.
//!
//! No terminal/IO types here. Adapters render these.

use chrono::{DateTime, Utc};
use std::fmt;
use uuid::Uuid;

/// Bucket of canned replies chosen by keyword matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Greeting,
    Help,
    Python,
    Javascript,
    Projects,
    Debugging,
    Default,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Greeting,
        Category::Help,
        Category::Python,
        Category::Javascript,
        Category::Projects,
        Category::Debugging,
        Category::Default,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Greeting => "greeting",
            Category::Help => "help",
            Category::Python => "python",
            Category::Javascript => "javascript",
            Category::Projects => "projects",
            Category::Debugging => "debugging",
            Category::Default => "default",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who wrote a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    User,
    Assistant,
}

/// A single chat message. Lives only as long as the chat session.
#[derive(Debug, Clone)]
pub struct Message {
    pub id: Uuid,
    pub text: String,
    pub origin: Origin,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(text, Origin::User)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(text, Origin::Assistant)
    }

    fn new(text: impl Into<String>, origin: Origin) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            origin,
            timestamp: Utc::now(),
        }
    }

    pub fn is_assistant(&self) -> bool {
        self.origin == Origin::Assistant
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        };
        f.write_str(s)
    }
}

/// Programming language entry in the static catalog.
#[derive(Debug, Clone)]
pub struct Language {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub difficulty: Difficulty,
    /// 0..=100
    pub popularity: u8,
    /// Includes the leading dot, e.g. ".py".
    pub file_extension: &'static str,
    pub features: &'static [&'static str],
}

/// Starter project suggestion.
#[derive(Debug, Clone)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub difficulty: Difficulty,
    pub language_id: &'static str,
    pub estimated_time: &'static str,
    pub skills: &'static [&'static str],
}

/// Example program for a language together with the output the terminal pretends it prints.
#[derive(Debug, Clone, Copy)]
pub struct LanguageExample {
    pub language_id: &'static str,
    pub source: &'static str,
    pub output: &'static str,
}

/// Terminal run state as seen by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
    Finished(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_constructors_stamp_origin_and_id() {
        let question = Message::user("hello");
        let answer = Message::assistant("hi!");
        assert_eq!(question.origin, Origin::User);
        assert!(!question.is_assistant());
        assert!(answer.is_assistant());
        assert_ne!(question.id, answer.id);
        assert!(answer.timestamp >= question.timestamp);
    }
}
