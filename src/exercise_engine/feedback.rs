//! Answer checking, kept outside the motor.
//!
//! Validation is a plain equality check against `correct_option_id`; the
//! motor has no say in it and keeps no record of what was answered.

use serde::{Deserialize, Serialize};

use crate::error::AnswerError;
use crate::exercise_engine::models::Exercise;

/// Points awarded for a correct answer.
pub const SCORE_CORRECT: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub correct_option_id: String,
    pub score_delta: u32,
}

/// Check `selected_option_id` against `exercise`.
///
/// The selection is trimmed before comparison. A selection that is not one
/// of the four options is rejected rather than scored as wrong.
pub fn check_answer(exercise: &Exercise, selected_option_id: &str) -> Result<AnswerOutcome, AnswerError> {
    let selected = selected_option_id.trim();
    if !exercise.has_option(selected) {
        return Err(AnswerError::InvalidOption {
            exercise_id: exercise.exercise_id.clone(),
            option_id: selected.to_string(),
        });
    }
    let correct = selected == exercise.correct_option_id;
    Ok(AnswerOutcome {
        correct,
        correct_option_id: exercise.correct_option_id.clone(),
        score_delta: if correct { SCORE_CORRECT } else { 0 },
    })
}

/// Title/subtitle pair shown after an answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackMessage {
    pub title: String,
    pub subtitle: String,
}

impl FeedbackMessage {
    pub fn for_outcome(outcome: &AnswerOutcome) -> Self {
        let title = if outcome.correct { "Correct!" } else { "Incorrect" };
        FeedbackMessage {
            title: title.to_string(),
            subtitle: format!("Score +{}", outcome.score_delta),
        }
    }
}
