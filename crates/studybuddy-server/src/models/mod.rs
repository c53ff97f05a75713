//! Study Buddy API Models
//!
//! - Chatbot: question in, answer out
//! - Dashboard: fixed placeholder payload
//! - Health: liveness report

mod chatbot;
mod dashboard;
mod health;

pub use chatbot::*;
pub use dashboard::*;
pub use health::*;
