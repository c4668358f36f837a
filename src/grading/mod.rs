// src/grading/mod.rs
//
// The scoring engine: pure computation over already-fetched quiz data.
// Persisting the results (and guarding against double submission) is the
// calling workflow's responsibility.

mod choice;
mod matching;
mod text;

use std::collections::{HashMap, HashSet};

use chrono::Utc;

use crate::config::ScoringConfig;
use crate::error::GradingError;
use crate::models::answer::{AnswerSubmission, GradedAnswer, QuestionScore};
use crate::models::attempt::AttemptSummary;
use crate::models::question::{Question, Quiz};
use crate::utils::numeric::percentage;

/// Scores a single answer against its question.
///
/// Stateless and deterministic: identical inputs always produce identical
/// output. Malformed answer data resolves to incorrect/zero; a missing
/// answer key resolves to pending manual grading. The only error path is a
/// question whose metadata fails config validation.
pub fn score_question(
    question: &Question,
    answer: &AnswerSubmission,
) -> Result<QuestionScore, GradingError> {
    let result = match ScoringConfig::from_question(question)? {
        ScoringConfig::Choice(cfg) => choice::score_choice(question, answer, &cfg),
        ScoringConfig::ShortAnswer(cfg) => text::score_short_answer(question, answer, &cfg),
        ScoringConfig::Matching => matching::score_matching(question, answer),
        ScoringConfig::Manual => QuestionScore::PENDING,
    };

    tracing::debug!(
        question_id = question.id,
        is_correct = ?result.is_correct,
        score = ?result.score,
        "scored question"
    );

    Ok(result)
}

/// Grades a completed attempt: every question of the quiz is scored exactly
/// once, then the per-question results are folded into an `AttemptSummary`.
///
/// Each submission must reference a question of the quiz; a stray
/// `question_id` is a caller-level validation failure, not a zero score.
/// Questions the learner skipped are scored as empty submissions so they
/// still count against the total.
pub fn grade_attempt(
    quiz: &Quiz,
    submissions: &[AnswerSubmission],
) -> Result<AttemptSummary, GradingError> {
    let known: HashSet<i64> = quiz.questions.iter().map(|q| q.id).collect();
    if let Some(stray) = submissions.iter().find(|s| !known.contains(&s.question_id)) {
        return Err(GradingError::UnknownQuestion {
            question_id: stray.question_id,
        });
    }

    let by_question: HashMap<i64, &AnswerSubmission> =
        submissions.iter().map(|s| (s.question_id, s)).collect();

    let answers = quiz
        .questions
        .iter()
        .map(|question| {
            let result = match by_question.get(&question.id) {
                Some(submission) => score_question(question, submission)?,
                None => score_question(question, &AnswerSubmission::empty(question.id))?,
            };
            Ok(GradedAnswer {
                question_id: question.id,
                max_points: question.effective_points(),
                result,
            })
        })
        .collect::<Result<Vec<_>, GradingError>>()?;

    Ok(summarize(quiz, answers))
}

/// Folds per-question results into the attempt aggregate. Also used to
/// re-aggregate after a teacher fills in manual grades.
pub fn summarize(quiz: &Quiz, answers: Vec<GradedAnswer>) -> AttemptSummary {
    let total_points: f64 = answers.iter().map(|a| a.max_points).sum();
    let total_score: f64 = answers.iter().filter_map(|a| a.result.score).sum();
    let needs_manual_grading = answers.iter().any(|a| a.result.is_pending());
    let percentage = percentage(total_score, total_points);

    // Pass/fail is only meaningful once every answer has a score.
    let passed = match quiz.passing_score {
        Some(threshold) if !needs_manual_grading => Some(percentage >= threshold),
        _ => None,
    };

    AttemptSummary {
        total_score,
        total_points,
        percentage,
        needs_manual_grading,
        passed,
        graded_at: Utc::now(),
        answers,
    }
}
