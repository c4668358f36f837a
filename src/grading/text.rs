// src/grading/text.rs

use crate::config::ShortAnswerConfig;
use crate::models::answer::{AnswerSubmission, QuestionScore};
use crate::models::question::Question;

/// Scores a SHORT_ANSWER question: trimmed exact match against the accepted
/// answers (the options flagged correct). No fuzzy matching.
pub(crate) fn score_short_answer(
    question: &Question,
    answer: &AnswerSubmission,
    config: &ShortAnswerConfig,
) -> QuestionScore {
    let accepted: Vec<&str> = question
        .options
        .iter()
        .filter(|o| o.is_correct)
        .map(|o| o.content.as_str())
        .collect();

    // Teacher-authored question with no answer key: defer to manual review.
    if accepted.is_empty() {
        tracing::warn!(
            question_id = question.id,
            "short-answer question has no answer key; pending manual grading"
        );
        return QuestionScore::PENDING;
    }

    let submitted = answer.text_answer.as_deref().unwrap_or("").trim();

    let is_correct = if config.case_sensitive {
        accepted.iter().any(|a| a.trim() == submitted)
    } else {
        let submitted = submitted.to_lowercase();
        accepted
            .iter()
            .any(|a| a.trim().to_lowercase() == submitted)
    };

    let points = question.effective_points();
    QuestionScore::graded(is_correct, if is_correct { points } else { 0.0 })
}
