//! Tier - The strategy that produced an answer

/// Resolution tiers, in the order they are tried
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// `<integer> <operator> <integer>` evaluation
    Arithmetic,
    /// Canned response for a known trigger substring
    Keyword,
    /// Delegated to the external completion service
    Completion,
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tier::Arithmetic => write!(f, "arithmetic"),
            Tier::Keyword => write!(f, "keyword"),
            Tier::Completion => write!(f, "completion"),
        }
    }
}
