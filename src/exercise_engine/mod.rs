//! Exercise engine — deterministic selection, answer checking, and screen flow.
//!
//! ## Module overview
//!
//! | Module     | Purpose |
//! |------------|---------|
//! | `models`   | Shared types: session state, exercise value, motor result |
//! | `pool`     | Normalisation and selection steps over a byte-ordered pool |
//! | `motor`    | `ExerciseMotor::generate()` — sequences the steps and commits state |
//! | `feedback` | Answer checking and feedback text, outside the motor |
//! | `session`  | `ItemSource` boundary and the load → submit → next driver |

pub mod feedback;
pub mod models;
pub mod motor;
pub mod pool;
pub mod session;

pub use feedback::{check_answer, AnswerOutcome, FeedbackMessage};
pub use models::{Exercise, MotorResult, SessionState, OPTION_COUNT};
pub use motor::ExerciseMotor;
pub use session::{ExerciseSession, ItemSource, ScreenState};
