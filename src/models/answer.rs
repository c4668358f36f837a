// src/models/answer.rs

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::GradingError;

/// One learner's answer to one question of an attempt, as shaped by the
/// caller from the platform's stored answer row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnswerSubmission {
    pub question_id: i64,

    /// Option ids chosen for choice-type questions.
    pub selected_option_ids: Vec<i64>,

    /// Free text for SHORT_ANSWER (and manually graded) questions.
    pub text_answer: Option<String>,

    /// MATCHING: premise option id mapped to the chosen response option id.
    pub match_selections: HashMap<i64, i64>,
}

impl AnswerSubmission {
    /// An answer the learner never touched. Grades as incorrect/zero for
    /// auto-graded types and pending for manual ones.
    pub fn empty(question_id: i64) -> Self {
        Self {
            question_id,
            ..Self::default()
        }
    }
}

/// Outcome of scoring one question. Both fields `None` means the answer is
/// pending manual grading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionScore {
    pub is_correct: Option<bool>,
    pub score: Option<f64>,
}

impl QuestionScore {
    pub const PENDING: QuestionScore = QuestionScore {
        is_correct: None,
        score: None,
    };

    pub fn graded(is_correct: bool, score: f64) -> Self {
        Self {
            is_correct: Some(is_correct),
            score: Some(score),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.score.is_none()
    }
}

/// A scored (attempt, question) pair, ready for the caller to persist.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradedAnswer {
    pub question_id: i64,

    /// The question's effective points, kept alongside the score so manual
    /// grades can be range-checked without refetching the question.
    pub max_points: f64,

    #[serde(flatten)]
    pub result: QuestionScore,
}

impl GradedAnswer {
    /// Applies a teacher-assigned grade to an answer this engine left
    /// pending (or overrides an auto grade). Rejects scores outside the
    /// question's [0, points] range.
    pub fn apply_manual_grade(&mut self, score: f64) -> Result<(), GradingError> {
        if !(0.0..=self.max_points).contains(&score) {
            return Err(GradingError::ScoreOutOfRange {
                score,
                points: self.max_points,
            });
        }
        self.result = QuestionScore::graded(score == self.max_points, score);
        Ok(())
    }
}
