// src/models/attempt.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::answer::GradedAnswer;

/// Aggregate result of grading one attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptSummary {
    /// Sum of auto-graded scores; pending answers contribute 0.
    pub total_score: f64,

    /// Sum of effective points over every question of the quiz.
    pub total_points: f64,

    /// Rounded integer percentage; 0 when the quiz carries no points.
    pub percentage: u32,

    /// True while any answer still awaits a teacher's grade.
    pub needs_manual_grading: bool,

    /// Pass/fail against the quiz's passing score. None when the quiz sets
    /// no passing score, or while manual grading is pending.
    pub passed: Option<bool>,

    pub graded_at: DateTime<Utc>,

    pub answers: Vec<GradedAnswer>,
}

impl AttemptSummary {
    /// Legacy display encoding: the platform's older result endpoint returned
    /// a negative percentage to mean "pending manual grading".
    /// `needs_manual_grading` is the authoritative flag; this view exists for
    /// display code that still expects the sign convention.
    pub fn signed_percentage(&self) -> i64 {
        if self.needs_manual_grading {
            -(self.percentage as i64)
        } else {
            self.percentage as i64
        }
    }
}
