//! # lexical_drill_gen
//!
//! A fully offline, deterministic vocabulary exercise generator.
//!
//! Given the item identifiers of a learning category, the engine picks one
//! correct item and three distractors for a multiple-choice question. There is
//! no randomness, no clock and no locale involved: the same sequence of calls
//! always yields the same sequence of exercises.
//!
//! ## How it works
//!
//! 1. Create an [`ExerciseMotor`] (one per active category session).
//! 2. Call [`ExerciseMotor::generate`] with a category id and the current
//!    snapshot of item ids. The pool is trimmed, deduplicated and sorted by
//!    byte order; the correct item rotates through the pool skipping the
//!    previous answer, and the distractors are the items that follow it.
//! 3. The returned [`MotorResult`] is `Success`, `Ineligible` (fewer than four
//!    usable items) or `Fault` (internal inconsistency; state untouched).
//!
//! ## Key features
//!
//! - **Deterministic**: two motors fed the same calls produce identical output.
//! - **No immediate repeats**: the previous correct item is skipped whenever
//!   another candidate exists.
//! - **Category sessions**: switching category resets the counter, so
//!   `exercise_id` restarts at `"{category}:0"`.
//!
//! ## Quick start
//!
//! ```rust
//! use lexical_drill_gen::{ExerciseMotor, MotorResult};
//!
//! let mut motor = ExerciseMotor::new();
//! match motor.generate("cat_01", &["li_03", "li_01", "li_04", "li_02"]) {
//!     MotorResult::Success(ex) => {
//!         assert_eq!(ex.exercise_id, "cat_01:0");
//!         assert!(ex.options.contains(&ex.correct_item_id));
//!     }
//!     MotorResult::Ineligible => println!("not enough items"),
//!     MotorResult::Fault(cause) => eprintln!("motor fault: {cause}"),
//! }
//! ```
//!
//! With a catalog and the screen-flow driver:
//!
//! ```rust
//! use lexical_drill_gen::{Catalog, ExerciseSession, ScreenState};
//!
//! let catalog = Catalog::builtin().unwrap();
//! let mut session = ExerciseSession::new(&catalog);
//! if let ScreenState::ShowingExercise { exercise } = session.load("cat_01").clone() {
//!     let outcome = session.submit(&exercise.correct_option_id).unwrap().unwrap();
//!     assert!(outcome.correct);
//! }
//! ```

pub mod catalog;
pub mod error;
pub mod exercise_engine;

// Convenience re-exports so callers can use `lexical_drill_gen::ExerciseMotor`
// directly without reaching into `exercise_engine::`.
pub use catalog::{Catalog, Category, LexicalItem};
pub use error::{AnswerError, CatalogError, MotorFault};
pub use exercise_engine::{
    check_answer, AnswerOutcome, Exercise, ExerciseMotor, ExerciseSession, FeedbackMessage,
    ItemSource, MotorResult, ScreenState, SessionState,
};

#[cfg(test)]
mod tests;
