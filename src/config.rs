// src/config.rs

use serde::Deserialize;
use serde_json::{Map, Value};
use validator::Validate;

use crate::error::GradingError;
use crate::models::question::{Question, QuestionType};

/// Scoring knobs for choice questions (MULTIPLE_CHOICE / TRUE_FALSE).
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct ChoiceConfig {
    /// Multi-select mode: the learner may pick more than one option.
    pub allow_multiple: bool,

    /// Multi-select only: award a fraction of the points for a partially
    /// correct selection instead of all-or-nothing.
    pub allow_partial_credit: bool,

    /// Fraction of the points deducted per incorrect selection, scaled by
    /// the option count. Must lie in [0, 1].
    #[validate(range(min = 0.0, max = 1.0))]
    pub penalty_percentage: f64,
}

impl Default for ChoiceConfig {
    fn default() -> Self {
        Self {
            allow_multiple: false,
            allow_partial_credit: true,
            penalty_percentage: 0.25,
        }
    }
}

/// Scoring knobs for SHORT_ANSWER questions.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct ShortAnswerConfig {
    /// Compare submitted text to the answer key with exact casing.
    pub case_sensitive: bool,
}

/// Per-question scoring configuration, resolved once from the authored
/// metadata bag instead of re-read key by key at grading time.
#[derive(Debug, Clone)]
pub enum ScoringConfig {
    Choice(ChoiceConfig),
    ShortAnswer(ShortAnswerConfig),
    Matching,
    /// ESSAY, CODE and FILL_BLANK are graded by a teacher, not this engine.
    Manual,
}

impl ScoringConfig {
    /// Parses and validates a question's metadata into its typed scoring
    /// configuration. Intended to run at question-authoring time; grading
    /// re-runs it and propagates the same errors if authoring skipped it.
    pub fn from_question(question: &Question) -> Result<Self, GradingError> {
        if question.effective_points() <= 0.0 {
            return Err(GradingError::InvalidConfig(format!(
                "question {} has non-positive points",
                question.id
            )));
        }

        let config = match question.question_type {
            QuestionType::MultipleChoice | QuestionType::TrueFalse => {
                let cfg: ChoiceConfig = parse_metadata(&question.metadata)?;
                cfg.validate()
                    .map_err(|e| GradingError::InvalidConfig(e.to_string()))?;
                ScoringConfig::Choice(cfg)
            }
            QuestionType::ShortAnswer => {
                ScoringConfig::ShortAnswer(parse_metadata(&question.metadata)?)
            }
            QuestionType::Matching => ScoringConfig::Matching,
            QuestionType::Essay | QuestionType::Code | QuestionType::FillBlank => {
                ScoringConfig::Manual
            }
        };

        Ok(config)
    }
}

/// Deserializes the relevant keys out of the metadata bag, applying defaults
/// for anything unset. Unrelated keys authored by the front-end are ignored.
fn parse_metadata<T: serde::de::DeserializeOwned>(
    metadata: &Map<String, Value>,
) -> Result<T, GradingError> {
    serde_json::from_value(Value::Object(metadata.clone())).map_err(GradingError::from)
}
