//! Domain Services
//!
//! - keywords: ordered canned responses
//! - resolver: the three-tier fallback chain

pub mod keywords;
mod resolver;

pub use resolver::*;
