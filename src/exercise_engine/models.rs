use std::fmt;
use serde::{Deserialize, Serialize};

use crate::error::MotorFault;

/// Number of options in every generated exercise (1 correct + 3 distractors).
pub const OPTION_COUNT: usize = 4;

/// Number of distractors drawn from the pool.
pub const DISTRACTOR_COUNT: usize = OPTION_COUNT - 1;

// ---------------------------------------------------------------------------
// Session state
// ---------------------------------------------------------------------------

/// Per-category selection state owned by one [`ExerciseMotor`].
///
/// [`ExerciseMotor`]: crate::exercise_engine::motor::ExerciseMotor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub active_category: Option<String>,
    pub last_correct_id: Option<String>,
    pub exercise_counter: u64,
}

impl SessionState {
    /// Fresh state bound to `category_id`: counter 0, no previous answer.
    pub fn for_category(category_id: &str) -> Self {
        SessionState {
            active_category: Some(category_id.to_string()),
            last_correct_id: None,
            exercise_counter: 0,
        }
    }

    /// Whether this state already belongs to `category_id`.
    pub fn is_bound_to(&self, category_id: &str) -> bool {
        self.active_category.as_deref() == Some(category_id)
    }
}

// ---------------------------------------------------------------------------
// Exercise value
// ---------------------------------------------------------------------------

/// One generated multiple-choice question: a correct item plus three distractors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub category_id: String,
    /// `"{category_id}:{exercise_counter}"`, counter taken before the commit.
    pub exercise_id: String,
    pub correct_item_id: String,
    pub options: [String; OPTION_COUNT],
    /// Always equal to `correct_item_id`.
    pub correct_option_id: String,
}

impl Exercise {
    /// Position (0..4) of the correct answer within `options`.
    pub fn correct_position(&self) -> Option<usize> {
        self.options.iter().position(|o| *o == self.correct_option_id)
    }

    /// Whether `option_id` is one of the four options.
    pub fn has_option(&self, option_id: &str) -> bool {
        self.options.iter().any(|o| o == option_id)
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.exercise_id, self.options.join(", "))
    }
}

/// Build the derived exercise identifier.
pub fn exercise_id(category_id: &str, counter: u64) -> String {
    format!("{}:{}", category_id, counter)
}

// ---------------------------------------------------------------------------
// Motor result
// ---------------------------------------------------------------------------

/// Outcome of one [`generate`] call. Callers must handle all three.
///
/// [`generate`]: crate::exercise_engine::motor::ExerciseMotor::generate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum MotorResult {
    Success(Exercise),
    /// The pool cannot support a valid 4-option exercise right now.
    Ineligible,
    Fault(MotorFault),
}

impl MotorResult {
    pub fn exercise(&self) -> Option<&Exercise> {
        match self {
            MotorResult::Success(e) => Some(e),
            _ => None,
        }
    }

    pub fn into_exercise(self) -> Option<Exercise> {
        match self {
            MotorResult::Success(e) => Some(e),
            _ => None,
        }
    }

    pub fn is_ineligible(&self) -> bool {
        matches!(self, MotorResult::Ineligible)
    }
}

impl fmt::Display for MotorResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotorResult::Success(e) => write!(f, "Success({})", e),
            MotorResult::Ineligible => write!(f, "Ineligible"),
            MotorResult::Fault(cause) => write!(f, "Fault({})", cause),
        }
    }
}
