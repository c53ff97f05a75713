//! Question Entity
//!
//! The free text a student submits to the chatbot.

/// A question as received from the student, kept in its original case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question(String);

impl Question {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Original text, used verbatim as the completion prompt
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lowercased text used by pattern and keyword matching
    pub fn normalized(&self) -> String {
        self.0.to_lowercase()
    }
}

impl From<&str> for Question {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Question {
    fn from(text: String) -> Self {
        Self(text)
    }
}
