//! Error types shared across the crate.
//!
//! | Type          | Raised by | Meaning |
//! |---------------|-----------|---------|
//! | `MotorFault`  | motor     | Internal inconsistency; carried inside `MotorResult::Fault` |
//! | `CatalogError`| catalog   | Seed document could not be read or failed validation |
//! | `AnswerError` | feedback  | Selected option is not part of the exercise |

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unexpected condition detected while assembling an exercise.
///
/// Never produced for data that merely cannot support an exercise; that is
/// `MotorResult::Ineligible`.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "fault", rename_all = "snake_case")]
pub enum MotorFault {
    #[error("{what} index {index} out of range for length {len}")]
    IndexOutOfRange {
        what: String,
        index: usize,
        len: usize,
    },

    #[error("expected {expected} options, assembled {actual}")]
    OptionCount { expected: usize, actual: usize },

    #[error("correct item '{correct_id}' missing from assembled options")]
    CorrectMissing { correct_id: String },

    #[error("exercise counter {counter} cannot advance further")]
    CounterOverflow { counter: u64 },
}

impl MotorFault {
    pub(crate) fn index(what: &str, index: usize, len: usize) -> Self {
        MotorFault::IndexOutOfRange { what: what.to_string(), index, len }
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read seed file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("seed is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unsupported seed version '{found}' (expected '{expected}')")]
    Version { found: String, expected: &'static str },

    #[error("{entity} entry {index} has an empty '{field}'")]
    EmptyField {
        entity: &'static str,
        index: usize,
        field: &'static str,
    },

    #[error("duplicated category id '{0}'")]
    DuplicateCategory(String),

    #[error("duplicated lexical item id '{0}'")]
    DuplicateItem(String),

    #[error("lexical item '{item_id}' references unknown category '{category_id}'")]
    UnknownCategory { item_id: String, category_id: String },

    #[error("seed must contain at least {min} categories (found {found})")]
    TooFewCategories { min: usize, found: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnswerError {
    #[error("option '{option_id}' is not part of exercise '{exercise_id}'")]
    InvalidOption { exercise_id: String, option_id: String },
}
