//! Pool-shaping helpers used by the motor.
//!
//! Each step of the selection algorithm works on a plain `&[String]` that is
//! already sorted in byte order, so the motor itself only sequences these
//! calls and commits state. All comparisons use `str`'s `Ord`, which is a
//! byte-wise (code point for UTF-8) comparison and never locale aware.
//!
//! ## Ordering
//!
//! Every helper that removes an element keeps the relative order of the rest.
//! Nothing here re-sorts after `normalize`; doing so would not change the
//! output today but would hide a broken precondition.

use std::collections::BTreeSet;

use crate::error::MotorFault;
use crate::exercise_engine::models::DISTRACTOR_COUNT;

/// Trim, drop blanks, dedupe, and sort ascending by byte order.
pub fn normalize<S: AsRef<str>>(candidate_ids: &[S]) -> Vec<String> {
    let set: BTreeSet<&str> = candidate_ids
        .iter()
        .map(|s| s.as_ref().trim())
        .filter(|s| !s.is_empty())
        .collect();
    set.into_iter().map(str::to_string).collect()
}

/// Items eligible to be the correct answer.
///
/// Excludes `last_correct` when there is more than one item; if the exclusion
/// leaves nothing the whole pool is used again.
pub fn correct_candidates<'a>(sorted: &'a [String], last_correct: Option<&str>) -> Vec<&'a str> {
    let all = || sorted.iter().map(String::as_str).collect::<Vec<_>>();
    match last_correct {
        Some(last) if sorted.len() > 1 => {
            let filtered: Vec<&str> = sorted
                .iter()
                .map(String::as_str)
                .filter(|id| *id != last)
                .collect();
            if filtered.is_empty() { all() } else { filtered }
        }
        _ => all(),
    }
}

/// Everything in `sorted` except `correct_id`.
pub fn distractor_pool<'a>(sorted: &'a [String], correct_id: &str) -> Vec<&'a str> {
    sorted
        .iter()
        .map(String::as_str)
        .filter(|id| *id != correct_id)
        .collect()
}

/// Index of the first pool entry strictly greater than `correct_id`, or 0.
pub fn start_index(pool: &[&str], correct_id: &str) -> usize {
    pool.iter().position(|id| *id > correct_id).unwrap_or(0)
}

/// Take the three distractors following `correct_id` cyclically.
///
/// The caller guarantees `pool.len() >= 3`; a shorter pool is reported as a
/// fault rather than indexed blindly.
pub fn pick_distractors<'a>(
    pool: &[&'a str],
    correct_id: &str,
) -> Result<[&'a str; DISTRACTOR_COUNT], MotorFault> {
    if pool.is_empty() {
        return Err(MotorFault::index("distractor pool", 0, 0));
    }
    let start = start_index(pool, correct_id);
    let at = |offset: usize| -> Result<&'a str, MotorFault> {
        let i = (start + offset) % pool.len();
        pool.get(i).copied().ok_or_else(|| MotorFault::index("distractor pool", i, pool.len()))
    };
    Ok([at(0)?, at(1)?, at(2)?])
}

/// Rotate `items` left by `k` positions (`k` is reduced modulo the length).
pub fn rotate_left<T>(mut items: Vec<T>, k: usize) -> Vec<T> {
    if !items.is_empty() {
        let shift = k % items.len();
        items.rotate_left(shift);
    }
    items
}

/// True when all entries are pairwise distinct.
pub fn all_distinct(ids: &[&str]) -> bool {
    let set: BTreeSet<&str> = ids.iter().copied().collect();
    set.len() == ids.len()
}
