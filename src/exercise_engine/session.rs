//! Screen-flow driver around the motor.
//!
//! `ExerciseSession` pulls the candidate snapshot from an [`ItemSource`],
//! runs the motor, and tracks what the learner is looking at:
//!
//! ```text
//! Idle ──load──▶ ShowingExercise ──submit──▶ ShowingFeedback ──next──▶ ShowingExercise
//!   │                 ▲                                         │
//!   └──load──▶ Unavailable / Failed ◀───────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{AnswerError, MotorFault};
use crate::exercise_engine::{
    feedback::{check_answer, AnswerOutcome},
    models::{Exercise, MotorResult},
    motor::ExerciseMotor,
};

/// Supplies the item identifiers currently known for a category.
///
/// Returning an empty list for an unknown category is fine; the motor treats
/// it as an ineligible pool.
pub trait ItemSource {
    fn item_ids(&self, category_id: &str) -> Vec<String>;
}

impl<T: ItemSource + ?Sized> ItemSource for &T {
    fn item_ids(&self, category_id: &str) -> Vec<String> {
        (**self).item_ids(category_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum ScreenState {
    Idle,
    ShowingExercise { exercise: Exercise },
    ShowingFeedback { exercise: Exercise, outcome: AnswerOutcome },
    /// The category does not have enough items for an exercise.
    Unavailable { category_id: String },
    Failed { category_id: String, fault: MotorFault },
}

pub struct ExerciseSession<S> {
    source: S,
    motor: ExerciseMotor,
    screen: ScreenState,
    last_category: Option<String>,
    score: u32,
}

impl<S: ItemSource> ExerciseSession<S> {
    pub fn new(source: S) -> Self {
        ExerciseSession {
            source,
            motor: ExerciseMotor::new(),
            screen: ScreenState::Idle,
            last_category: None,
            score: 0,
        }
    }

    pub fn screen(&self) -> &ScreenState {
        &self.screen
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn motor(&self) -> &ExerciseMotor {
        &self.motor
    }

    /// Generate the next exercise for `category_id` and show it.
    pub fn load(&mut self, category_id: &str) -> &ScreenState {
        self.last_category = Some(category_id.to_string());
        let ids = self.source.item_ids(category_id);
        self.screen = match self.motor.generate(category_id, &ids) {
            MotorResult::Success(exercise) => ScreenState::ShowingExercise { exercise },
            MotorResult::Ineligible => {
                info!(target: "session", category = %category_id, items = ids.len(),
                      "category has too few items for an exercise");
                ScreenState::Unavailable { category_id: category_id.to_string() }
            }
            MotorResult::Fault(fault) => {
                warn!(target: "session", category = %category_id, error = %fault,
                      "exercise generation failed");
                ScreenState::Failed { category_id: category_id.to_string(), fault }
            }
        };
        &self.screen
    }

    /// Answer the exercise on screen.
    ///
    /// `Ok(None)` when no exercise is showing. An invalid option leaves the
    /// screen unchanged.
    pub fn submit(&mut self, option_id: &str) -> Result<Option<&AnswerOutcome>, AnswerError> {
        let exercise = match &self.screen {
            ScreenState::ShowingExercise { exercise } => exercise.clone(),
            _ => return Ok(None),
        };
        let outcome = check_answer(&exercise, option_id)?;
        self.score += outcome.score_delta;
        self.screen = ScreenState::ShowingFeedback { exercise, outcome };
        match &self.screen {
            ScreenState::ShowingFeedback { outcome, .. } => Ok(Some(outcome)),
            _ => Ok(None),
        }
    }

    /// Reload the last category; `None` if nothing was loaded yet.
    pub fn next(&mut self) -> Option<&ScreenState> {
        let category = self.last_category.clone()?;
        Some(self.load(&category))
    }
}
