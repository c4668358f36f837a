// src/lib.rs

pub mod config;
pub mod error;
pub mod grading;
pub mod models;
pub mod utils;

// Re-export the engine entry points for convenience
pub use grading::{grade_attempt, score_question, summarize};
