// src/models/question.rs

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Question types supported by the platform.
/// Wire names match the front-end's constants (MULTIPLE_CHOICE, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuestionType {
    MultipleChoice,
    TrueFalse,
    ShortAnswer,
    Essay,
    Matching,
    FillBlank,
    Code,
}

impl QuestionType {
    /// Whether correctness can be determined from structured data alone,
    /// without human judgment.
    pub fn is_auto_graded(self) -> bool {
        matches!(
            self,
            Self::MultipleChoice | Self::TrueFalse | Self::ShortAnswer | Self::Matching
        )
    }
}

/// Side of a matching pair an option belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionGroup {
    Premise,
    Response,
}

/// A selectable choice, an accepted short answer, or a matching-pair
/// endpoint, depending on the owning question's type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerOption {
    pub id: i64,

    pub content: String,

    /// Marks the correct choice(s) for choice-type questions, or an accepted
    /// answer for SHORT_ANSWER.
    #[serde(default)]
    pub is_correct: bool,

    /// MATCHING only: which side of the pairing this option is on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<OptionGroup>,

    /// Premises only: id of this premise's correct response option.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_id: Option<i64>,
}

/// A quiz question as authored by a teacher. Immutable during an attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: i64,

    #[serde(rename = "type")]
    pub question_type: QuestionType,

    /// Unset means the platform default of 1 point.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<f64>,

    #[serde(default)]
    pub options: Vec<AnswerOption>,

    /// Type-specific configuration bag as stored by the platform
    /// (allowMultiple, allowPartialCredit, penaltyPercentage, caseSensitive).
    /// Resolved into a typed `ScoringConfig` before grading.
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

impl Question {
    pub fn effective_points(&self) -> f64 {
        self.points.unwrap_or(1.0)
    }

    /// Ids of the options flagged correct (the answer key for choice and
    /// short-answer questions).
    pub fn correct_option_ids(&self) -> Vec<i64> {
        self.options
            .iter()
            .filter(|o| o.is_correct)
            .map(|o| o.id)
            .collect()
    }

    /// MATCHING only: the premise-side options.
    pub fn premises(&self) -> Vec<&AnswerOption> {
        self.options
            .iter()
            .filter(|o| o.group == Some(OptionGroup::Premise))
            .collect()
    }
}

/// An ordered quiz with its aggregate knobs. The scorer consumes only the
/// question list; presentation knobs are here for the surrounding workflow.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: i64,

    pub questions: Vec<Question>,

    #[serde(default)]
    pub shuffle_questions: bool,

    #[serde(default)]
    pub show_results: bool,

    /// Percentage threshold for passing the quiz, if the teacher set one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passing_score: Option<u32>,
}
