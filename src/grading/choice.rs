// src/grading/choice.rs

use std::collections::HashSet;

use crate::config::ChoiceConfig;
use crate::models::answer::{AnswerSubmission, QuestionScore};
use crate::models::question::Question;
use crate::utils::numeric::round2;

/// Scores a MULTIPLE_CHOICE or TRUE_FALSE answer.
///
/// Single-select: full points iff exactly one option is picked and it is
/// flagged correct. Multi-select: full points for the exact correct set;
/// otherwise partial credit (when enabled) rewards recalled correct options
/// and deducts a penalty per incorrect selection.
pub(crate) fn score_choice(
    question: &Question,
    answer: &AnswerSubmission,
    config: &ChoiceConfig,
) -> QuestionScore {
    let points = question.effective_points();
    let correct_ids = question.correct_option_ids();

    // Missing answer key: defer to the teacher rather than guess. Also keeps
    // the partial-credit division below away from a zero correct count.
    if correct_ids.is_empty() {
        tracing::warn!(
            question_id = question.id,
            "choice question has no option flagged correct; pending manual grading"
        );
        return QuestionScore::PENDING;
    }

    // Duplicate ids in a submission collapse to one selection.
    let selected: HashSet<i64> = answer.selected_option_ids.iter().copied().collect();

    if !config.allow_multiple {
        let is_correct =
            selected.len() == 1 && selected.iter().all(|id| correct_ids.contains(id));
        return QuestionScore::graded(is_correct, if is_correct { points } else { 0.0 });
    }

    let selected_correct = selected.iter().filter(|id| correct_ids.contains(id)).count();
    let selected_incorrect = selected.len() - selected_correct;

    if selected_correct == correct_ids.len() && selected_incorrect == 0 {
        return QuestionScore::graded(true, points);
    }

    if !config.allow_partial_credit {
        return QuestionScore::graded(false, 0.0);
    }

    let partial = selected_correct as f64 / correct_ids.len() as f64 * points;
    let penalty = selected_incorrect as f64 * config.penalty_percentage
        / question.options.len() as f64
        * points;

    QuestionScore::graded(false, round2((partial - penalty).max(0.0)))
}
