// src/grading/matching.rs

use crate::models::answer::{AnswerSubmission, QuestionScore};
use crate::models::question::Question;
use crate::utils::numeric::round2;

/// Scores a MATCHING question: the fraction of premises paired with their
/// correct response, scaled by the question's points.
pub(crate) fn score_matching(question: &Question, answer: &AnswerSubmission) -> QuestionScore {
    let points = question.effective_points();
    let premises = question.premises();

    // Degenerate question with nothing to match.
    if premises.is_empty() {
        return QuestionScore::graded(false, 0.0);
    }

    let correct_matches = premises
        .iter()
        .filter(|premise| match premise.match_id {
            Some(expected) => answer.match_selections.get(&premise.id) == Some(&expected),
            // A premise with no authored pairing can never be matched.
            None => false,
        })
        .count();

    let score = round2(correct_matches as f64 / premises.len() as f64 * points);
    QuestionScore::graded(correct_matches == premises.len(), score)
}
