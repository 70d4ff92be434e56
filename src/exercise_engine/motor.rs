use tracing::{debug, instrument, warn};

use crate::error::MotorFault;
use crate::exercise_engine::{
    models::{exercise_id, Exercise, MotorResult, SessionState, DISTRACTOR_COUNT, OPTION_COUNT},
    pool,
};

/// Deterministic 4-option exercise generator for one category session.
///
/// Holds its own [`SessionState`]; independent motors never share state.
/// `generate` takes `&mut self`, so a host that shares a motor across
/// threads must wrap it in its own lock.
#[derive(Debug, Clone, Default)]
pub struct ExerciseMotor {
    state: SessionState,
}

/// Intermediate result of the selection pipeline.
enum Selection {
    Ready { exercise: Exercise, next_counter: u64 },
    Ineligible(&'static str),
}

impl ExerciseMotor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from a previously captured state.
    pub fn with_state(state: SessionState) -> Self {
        ExerciseMotor { state }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Drop all session state, as if the motor had just been created.
    pub fn reset(&mut self) {
        self.state = SessionState::default();
    }

    /// Produce the next exercise for `category_id` from `candidate_ids`.
    ///
    /// A different category than the active one resets the session first.
    /// State advances only on `Success`.
    #[instrument(level = "debug", target = "exercise_motor", skip(self, candidate_ids),
                 fields(candidates = candidate_ids.len()))]
    pub fn generate<S: AsRef<str>>(&mut self, category_id: &str, candidate_ids: &[S]) -> MotorResult {
        if !self.state.is_bound_to(category_id) {
            debug!(target: "exercise_motor", category = %category_id,
                   previous = ?self.state.active_category, "category switch, session reset");
            self.state = SessionState::for_category(category_id);
        }

        match self.select(category_id, candidate_ids) {
            Ok(Selection::Ready { exercise, next_counter }) => {
                self.state.last_correct_id = Some(exercise.correct_item_id.clone());
                self.state.exercise_counter = next_counter;
                debug!(target: "exercise_motor", exercise_id = %exercise.exercise_id,
                       correct = %exercise.correct_item_id, "exercise generated");
                MotorResult::Success(exercise)
            }
            Ok(Selection::Ineligible(reason)) => {
                debug!(target: "exercise_motor", category = %category_id, reason, "pool ineligible");
                MotorResult::Ineligible
            }
            Err(fault) => {
                warn!(target: "exercise_motor", category = %category_id,
                      counter = self.state.exercise_counter, error = %fault, "motor fault");
                MotorResult::Fault(fault)
            }
        }
    }

    /// Pure part of `generate`: reads state, never writes it.
    fn select<S: AsRef<str>>(&self, category_id: &str, candidate_ids: &[S]) -> Result<Selection, MotorFault> {
        let counter = self.state.exercise_counter;
        let sorted = pool::normalize(candidate_ids);
        if sorted.len() < OPTION_COUNT {
            return Ok(Selection::Ineligible("fewer than 4 distinct items"));
        }

        let candidates = pool::correct_candidates(&sorted, self.state.last_correct_id.as_deref());
        if candidates.is_empty() {
            return Ok(Selection::Ineligible("no correct-item candidates"));
        }
        let i = reduce(counter, candidates.len(), "candidate set")?;
        let correct_id = *candidates
            .get(i)
            .ok_or_else(|| MotorFault::index("candidate set", i, candidates.len()))?;

        let distractor_pool = pool::distractor_pool(&sorted, correct_id);
        if distractor_pool.len() < DISTRACTOR_COUNT {
            return Ok(Selection::Ineligible("distractor pool too small"));
        }
        let [d1, d2, d3] = pool::pick_distractors(&distractor_pool, correct_id)?;

        let base = vec![correct_id, d1, d2, d3];
        if !pool::all_distinct(&base) {
            return Ok(Selection::Ineligible("duplicate options"));
        }

        let rotated = pool::rotate_left(base, reduce(counter, OPTION_COUNT, "options")?);
        let options: [String; OPTION_COUNT] = rotated
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .try_into()
            .map_err(|v: Vec<String>| MotorFault::OptionCount { expected: OPTION_COUNT, actual: v.len() })?;
        if !options.iter().any(|o| o == correct_id) {
            return Err(MotorFault::CorrectMissing { correct_id: correct_id.to_string() });
        }

        let next_counter = counter
            .checked_add(1)
            .ok_or(MotorFault::CounterOverflow { counter })?;

        let exercise = Exercise {
            category_id: category_id.to_string(),
            exercise_id: exercise_id(category_id, counter),
            correct_item_id: correct_id.to_string(),
            options,
            correct_option_id: correct_id.to_string(),
        };
        Ok(Selection::Ready { exercise, next_counter })
    }
}

/// `counter mod len` without truncating the counter first.
fn reduce(counter: u64, len: usize, what: &str) -> Result<usize, MotorFault> {
    counter
        .checked_rem(len as u64)
        .map(|r| r as usize)
        .ok_or_else(|| MotorFault::index(what, 0, len))
}
