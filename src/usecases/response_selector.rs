//! BugBot response selection: keyword classification, then a random pick within the category.
//!
//! Pure. The caller owns message history, reply delay and the RNG.

use crate::domain::{Category, ReplyTable};
use rand::Rng;
use rand::seq::SliceRandom;

/// Keyword groups in priority order. The first group with any keyword contained
/// in the lower-cased input decides the category.
const KEYWORD_GROUPS: &[(Category, &[&str])] = &[
    (Category::Greeting, &["hello", "hi", "hey"]),
    (Category::Help, &["help", "assist"]),
    (Category::Python, &["python"]),
    (Category::Javascript, &["javascript", "js"]),
    (Category::Projects, &["project"]),
    (Category::Debugging, &["bug", "debug", "error"]),
];

/// Classify free text. Substring match, not whole-word: "this" contains "hi".
pub fn classify(input: &str) -> Category {
    let lower = input.to_lowercase();
    KEYWORD_GROUPS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(category, _)| *category)
        .unwrap_or(Category::Default)
}

/// Pick one reply for `input`, uniformly within its category.
pub fn select_reply<'t, R: Rng + ?Sized>(
    table: &'t ReplyTable,
    input: &str,
    rng: &mut R,
) -> &'t str {
    let category = classify(input);
    table
        .replies(category)
        .choose(rng)
        .or_else(|| table.replies(Category::Default).choose(rng))
        .map(String::as_str)
        .unwrap_or(FALLBACK_REPLY)
}

/// Only reachable if a table lost its default replies; `ReplyTable` rules that out.
const FALLBACK_REPLY: &str = "...";

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::rngs::mock::StepRng;

    fn in_category(table: &ReplyTable, category: Category, reply: &str) -> bool {
        table.replies(category).iter().any(|r| r == reply)
    }

    #[test]
    fn test_classify_priority_order() {
        assert_eq!(classify("hello"), Category::Greeting);
        assert_eq!(classify("can you assist"), Category::Help);
        assert_eq!(classify("python please"), Category::Python);
        assert_eq!(classify("node js"), Category::Javascript);
        assert_eq!(classify("my project"), Category::Projects);
        assert_eq!(classify("an error occurred"), Category::Debugging);
        assert_eq!(classify("xyz123"), Category::Default);
        assert_eq!(classify(""), Category::Default);
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        assert_eq!(classify("HELLO there"), Category::Greeting);
        assert_eq!(classify("PyThOn"), Category::Python);
    }

    #[test]
    fn test_classify_each_greeting_keyword_alone() {
        assert_eq!(classify("hey there"), Category::Greeting);
        assert_eq!(classify("HI"), Category::Greeting);
        assert_eq!(classify("hi"), Category::Greeting);
        assert_eq!(classify("Hey"), Category::Greeting);
    }

    #[test]
    fn test_classify_earlier_group_wins() {
        assert_eq!(classify("Can you help me with JavaScript?"), Category::Help);
        assert_eq!(classify("help me with python"), Category::Help);
        // python is checked before debugging
        assert_eq!(classify("error in python"), Category::Python);
    }

    #[test]
    fn test_classify_matches_substrings() {
        assert_eq!(classify("javascripter"), Category::Javascript);
        // "this" contains "hi"
        assert_eq!(classify("what is this"), Category::Greeting);
        assert_eq!(classify("projects"), Category::Projects);
        assert_eq!(classify("debugger"), Category::Debugging);
    }

    #[test]
    fn test_select_reply_from_category() {
        let table = ReplyTable::builtin();
        let mut rng = StdRng::seed_from_u64(7);

        let reply = select_reply(&table, "HELLO there", &mut rng);
        assert!(in_category(&table, Category::Greeting, reply));

        let reply = select_reply(&table, "Can you help me with JavaScript?", &mut rng);
        assert!(in_category(&table, Category::Help, reply));

        let reply = select_reply(&table, "xyz123", &mut rng);
        assert!(in_category(&table, Category::Default, reply));
    }

    #[test]
    fn test_select_reply_total_on_any_input() {
        let table = ReplyTable::builtin();
        let mut rng = StdRng::seed_from_u64(1);
        let long = "a very long line ".repeat(100);
        for input in ["", "   ", "\n", "🐛", long.as_str()] {
            let reply = select_reply(&table, input, &mut rng);
            assert!(!reply.is_empty());
        }
        let reply = select_reply(&table, "", &mut rng);
        assert!(in_category(&table, Category::Default, reply));
    }

    #[test]
    fn test_select_reply_deterministic_with_seed() {
        let table = ReplyTable::builtin();
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for input in ["hi", "bug", "python", "anything"] {
            assert_eq!(
                select_reply(&table, input, &mut a),
                select_reply(&table, input, &mut b)
            );
        }
    }

    #[test]
    fn test_select_reply_zero_rng_picks_first() {
        let table = ReplyTable::builtin();
        let mut rng = StepRng::new(0, 0);
        assert_eq!(
            select_reply(&table, "debug this", &mut rng),
            // "this" contains "hi": greeting wins over debugging
            "Hello! I'm BugBot, your friendly coding assistant! 🐛"
        );
        assert_eq!(
            select_reply(&table, "a bug", &mut rng),
            "Debugging is a crucial skill! Start by reading error messages carefully and using console.log to track values."
        );
    }
}
