//! BugBot reply table. Immutable once built.

use crate::domain::{Category, DomainError};
use std::collections::HashMap;

/// Shown by the host once at start-up.
pub const GREETING_NOTICE: &str = "👋 Hi there! BugBot is here to help you learn!";

/// First assistant message when a chat session is opened with an empty history.
pub const WELCOME_MESSAGE: &str = "Hello! I'm BugBot, your coding companion! 🐛✨ I'm here to help you learn programming, debug code, and answer questions. How can I assist you today?";

const GREETING: &[&str] = &[
    "Hello! I'm BugBot, your friendly coding assistant! 🐛",
    "Hi there! Ready to squash some bugs and learn together?",
    "Welcome to TechiBug! I'm here to help you on your coding journey!",
];

const HELP: &[&str] = &[
    "I can help you with programming concepts, debugging, project ideas, and learning paths!",
    "Need help with code? Want to understand a concept? Or looking for project suggestions? I'm here for you!",
    "I'm great at explaining programming concepts, helping with syntax, and providing learning resources!",
];

const PYTHON: &[&str] = &[
    "Python is awesome! It's perfect for beginners with its readable syntax. Would you like to start with variables or functions?",
    "Python is great for web development, data science, AI, and automation. What interests you most?",
    "Let's dive into Python! It's one of the most versatile languages. What would you like to learn first?",
];

const JAVASCRIPT: &[&str] = &[
    "JavaScript powers the web! From frontend interactions to backend servers, it's everywhere. Ready to explore?",
    "JS is fantastic for web development. Want to learn about DOM manipulation, async programming, or frameworks?",
    "JavaScript is the language of the web! Perfect for creating interactive websites and applications.",
];

const PROJECTS: &[&str] = &[
    "Building projects is the best way to learn! Start with something simple like a calculator or to-do list.",
    "I recommend starting with beginner projects and gradually increasing complexity. What language interests you?",
    "Projects help solidify your learning! Want suggestions based on your skill level?",
];

const DEBUGGING: &[&str] = &[
    "Debugging is a crucial skill! Start by reading error messages carefully and using console.log to track values.",
    "Great debugging tip: Break down your problem into smaller parts and test each piece individually.",
    "Don't worry, every programmer deals with bugs! They're learning opportunities in disguise.",
];

const DEFAULT: &[&str] = &[
    "That's a great question! While I'd love to help more, try exploring our lessons and projects for detailed guidance.",
    "Interesting! Check out our language-specific tutorials and interactive coding examples.",
    "I'm still learning too! For complex topics, our structured lessons and mentors section might be perfect for you.",
];

/// Category -> ordered, non-empty list of replies.
///
/// Every category in [`Category::ALL`] is present, so lookups never miss.
#[derive(Debug, Clone)]
pub struct ReplyTable {
    replies: HashMap<Category, Vec<String>>,
}

impl ReplyTable {
    /// Build a table from custom entries. Fails if a category is missing or has no replies.
    pub fn new<I, S>(entries: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = (Category, Vec<S>)>,
        S: Into<String>,
    {
        let replies: HashMap<Category, Vec<String>> = entries
            .into_iter()
            .map(|(c, list)| (c, list.into_iter().map(Into::into).collect()))
            .collect();

        for category in Category::ALL {
            match replies.get(&category) {
                None => {
                    return Err(DomainError::InvalidReplyTable(format!(
                        "missing category '{}'",
                        category
                    )));
                }
                Some(list) if list.is_empty() => {
                    return Err(DomainError::InvalidReplyTable(format!(
                        "category '{}' has no replies",
                        category
                    )));
                }
                Some(_) => {}
            }
        }

        Ok(Self { replies })
    }

    /// The replies BugBot ships with.
    pub fn builtin() -> Self {
        let replies = Category::ALL
            .into_iter()
            .map(|c| {
                let list = builtin_replies(c).iter().map(|s| s.to_string()).collect();
                (c, list)
            })
            .collect();
        Self { replies }
    }

    pub fn replies(&self, category: Category) -> &[String] {
        self.replies
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

impl Default for ReplyTable {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_replies(category: Category) -> &'static [&'static str] {
    match category {
        Category::Greeting => GREETING,
        Category::Help => HELP,
        Category::Python => PYTHON,
        Category::Javascript => JAVASCRIPT,
        Category::Projects => PROJECTS,
        Category::Debugging => DEBUGGING,
        Category::Default => DEFAULT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_three_replies_per_category() {
        let table = ReplyTable::builtin();
        for category in Category::ALL {
            assert_eq!(table.replies(category).len(), 3, "category {}", category);
        }
        assert_eq!(
            table.replies(Category::Greeting)[0],
            "Hello! I'm BugBot, your friendly coding assistant! 🐛"
        );
    }

    #[test]
    fn test_new_rejects_missing_category() {
        let entries = vec![(Category::Default, vec!["only default"])];
        let err = ReplyTable::new(entries).unwrap_err();
        assert!(matches!(err, DomainError::InvalidReplyTable(_)));
    }

    #[test]
    fn test_new_rejects_empty_category() {
        let entries: Vec<(Category, Vec<&str>)> = Category::ALL
            .into_iter()
            .map(|c| {
                if c == Category::Python {
                    (c, vec![])
                } else {
                    (c, vec!["reply"])
                }
            })
            .collect();
        let err = ReplyTable::new(entries).unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidReplyTable("category 'python' has no replies".into())
        );
    }

    #[test]
    fn test_new_accepts_complete_table() {
        let entries = Category::ALL.into_iter().map(|c| (c, vec![c.as_str()]));
        let table = ReplyTable::new(entries).unwrap();
        assert_eq!(table.replies(Category::Debugging), ["debugging".to_string()]);
    }
}
