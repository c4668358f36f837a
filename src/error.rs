// src/error.rs

use std::fmt;

/// Grading engine error enum.
///
/// Scoring never fails for answer data it can interpret: missing selections
/// and empty text resolve to incorrect/zero, a missing answer key resolves to
/// pending manual grading. Errors are reserved for authoring-time validation
/// failures and structural mismatch between a submission and its quiz.
#[derive(Debug)]
pub enum GradingError {
    /// Question metadata could not be interpreted as a valid scoring
    /// configuration (wrong value type, penalty out of range, bad points).
    InvalidConfig(String),

    /// A submission references a question that does not belong to the quiz
    /// being graded. Callers must scope submissions to the quiz before
    /// invoking the engine.
    UnknownQuestion { question_id: i64 },

    /// A manually assigned grade outside the question's [0, points] range.
    ScoreOutOfRange { score: f64, points: f64 },
}

impl fmt::Display for GradingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for GradingError {}

/// Converts metadata deserialization failures into `InvalidConfig`.
/// Allows using the `?` operator when parsing the metadata bag.
impl From<serde_json::Error> for GradingError {
    fn from(err: serde_json::Error) -> Self {
        GradingError::InvalidConfig(err.to_string())
    }
}
