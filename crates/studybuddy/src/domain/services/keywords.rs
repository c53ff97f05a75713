//! Keyword tier - canned responses for common questions
//!
//! Triggers are plain substrings of the lowercased question, checked in
//! table order. `"said hi there"` matches `"hi"`, and so does `"this"`.

/// `(trigger, response)` pairs in priority order
pub const KEYWORD_RESPONSES: &[(&str, &str)] = &[
    ("hi", "Hello! How can I assist you today?"),
    (
        "python",
        "Python is a popular programming language, known for its simplicity and versatility in fields like AI, web development, and data science.",
    ),
    (
        "ai",
        "AI stands for Artificial Intelligence, where machines are trained to mimic human-like tasks and decision-making.",
    ),
    (
        "exam",
        "Stay calm, focus on your revision, and don't forget to practice past exam papers! You've got this! 💪",
    ),
    (
        "what is your name",
        "I am AI Study Buddy, here to help you with your learning!",
    ),
    ("bye", "Goodbye! See you next time!"),
];

/// First canned response whose trigger occurs in `normalized`
pub fn lookup(normalized: &str) -> Option<&'static str> {
    KEYWORD_RESPONSES
        .iter()
        .find(|(trigger, _)| normalized.contains(trigger))
        .map(|(_, response)| *response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_containment_not_whole_word() {
        assert_eq!(lookup("said hi there"), Some(KEYWORD_RESPONSES[0].1));
        assert_eq!(lookup("goodbye"), Some("Goodbye! See you next time!"));
    }

    #[test]
    fn test_priority_order() {
        // "this" contains "hi"
        assert_eq!(lookup("this python"), Some(KEYWORD_RESPONSES[0].1));
        assert_eq!(lookup("python and ai"), Some(KEYWORD_RESPONSES[1].1));
        // "exam" loses to "ai" when both appear
        assert_eq!(lookup("ai exam"), Some(KEYWORD_RESPONSES[2].1));
        assert_eq!(lookup("exam tips"), Some(KEYWORD_RESPONSES[3].1));
    }

    #[test]
    fn test_name_question() {
        assert_eq!(
            lookup("what is your name?"),
            Some("I am AI Study Buddy, here to help you with your learning!")
        );
    }

    #[test]
    fn test_no_match() {
        assert_eq!(lookup("tell me about rust"), None);
        assert_eq!(lookup(""), None);
    }
}
