//! Crate-level tests for `lexical_drill_gen`.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! # Coverage
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Determinism | Independent motors fed the same calls produce identical results |
//! | Eligibility | Normalised pools below four items are always `Ineligible` |
//! | Structural | Four distinct options; correct item present and equal to `correct_option_id` |
//! | Non-repetition | Consecutive correct items differ once the pool has ≥ 5 items |
//! | Category isolation | A → B → A restarts the counter at `:0` |
//! | Rotation | Correct answer position follows `counter mod 4` |
//! | Snapshots | Each call's pool is authoritative when items change mid-session |
//! | Catalog | Built-in seed drives the motor end to end |

use std::collections::BTreeSet;

use crate::{
    catalog::Catalog,
    exercise_engine::{
        models::{Exercise, MotorResult},
        motor::ExerciseMotor,
        session::ItemSource,
    },
};

// ── helpers ──────────────────────────────────────────────────────────────────

fn ids(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("li_{i:02}")).collect()
}

fn success(r: MotorResult) -> Exercise {
    match r {
        MotorResult::Success(e) => e,
        other => panic!("expected Success, got {other}"),
    }
}

/// Pool sizes exercised by the property loops.
const SIZES: [usize; 6] = [4, 5, 6, 7, 10, 23];

/// Calls made per pool size; several full laps of the option rotation.
const CALLS: usize = 40;

// ── determinism ──────────────────────────────────────────────────────────────

#[test]
fn independent_motors_produce_identical_sequences() {
    for n in SIZES {
        let items = ids(n);
        let mut a = ExerciseMotor::new();
        let mut b = ExerciseMotor::new();
        for step in 0..CALLS {
            let ra = a.generate("cat_01", &items);
            let rb = b.generate("cat_01", &items);
            assert_eq!(
                serde_json::to_string(&ra).unwrap(),
                serde_json::to_string(&rb).unwrap(),
                "divergence at step {step} for pool size {n}"
            );
        }
    }
}

#[test]
fn input_order_does_not_matter() {
    let forward = ids(8);
    let mut reversed = forward.clone();
    reversed.reverse();
    let mut padded: Vec<String> = forward.iter().map(|s| format!("  {s} ")).collect();
    padded.push(String::new());
    padded.push(forward[3].clone());

    let mut a = ExerciseMotor::new();
    let mut b = ExerciseMotor::new();
    let mut c = ExerciseMotor::new();
    for _ in 0..CALLS {
        let ea = success(a.generate("cat", &forward));
        assert_eq!(ea, success(b.generate("cat", &reversed)));
        assert_eq!(ea, success(c.generate("cat", &padded)));
    }
}

// ── eligibility ──────────────────────────────────────────────────────────────

#[test]
fn pools_below_four_are_always_ineligible() {
    let cases: [&[&str]; 6] = [
        &[],
        &["a"],
        &["a", "b", "c"],
        &["a", "a", "b", "b", "c", "c"],
        &[" a", "a ", "b", "c", "", "   "],
        &["", " ", "\t"],
    ];
    for items in cases {
        let mut motor = ExerciseMotor::new();
        for _ in 0..3 {
            assert_eq!(motor.generate("cat", items), MotorResult::Ineligible, "pool {items:?}");
        }
        assert_eq!(motor.state().exercise_counter, 0);
        assert_eq!(motor.state().last_correct_id, None);
    }
}

#[test]
fn three_items_is_ineligible() {
    let mut motor = ExerciseMotor::new();
    assert_eq!(motor.generate("cat_01", &["a", "b", "c"]), MotorResult::Ineligible);
}

// ── structural invariants ────────────────────────────────────────────────────

#[test]
fn every_exercise_has_four_distinct_options_with_correct_present() {
    for n in SIZES {
        let items = ids(n);
        let mut motor = ExerciseMotor::new();
        for step in 0..CALLS {
            let e = success(motor.generate("cat", &items));
            let distinct: BTreeSet<&str> = e.options.iter().map(String::as_str).collect();
            assert_eq!(distinct.len(), 4, "duplicate options at step {step} size {n}: {e}");
            assert!(e.options.contains(&e.correct_item_id), "correct missing: {e}");
            assert_eq!(e.correct_item_id, e.correct_option_id);
            assert!(e.options.iter().all(|o| items.contains(o)), "foreign option in {e}");
            assert_eq!(e.exercise_id, format!("cat:{step}"));
        }
    }
}

#[test]
fn first_exercise_matches_reference_scenario() {
    let mut motor = ExerciseMotor::new();
    let e = success(motor.generate("cat_01", &["li_03", "li_01", "li_04", "li_02"]));
    assert_eq!(e.exercise_id, "cat_01:0");
    assert_eq!(e.options.len(), 4);
    assert!(e.options.contains(&e.correct_item_id));
    assert_eq!(e, success(ExerciseMotor::new().generate("cat_01", &["li_01", "li_02", "li_03", "li_04"])));
}

#[test]
fn correct_position_follows_counter() {
    let items = ids(9);
    let mut motor = ExerciseMotor::new();
    for step in 0..CALLS {
        let e = success(motor.generate("cat", &items));
        // Base order puts the correct item first; rotating left by k moves it to (4 - k) % 4.
        let expected = (4 - step % 4) % 4;
        assert_eq!(e.correct_position(), Some(expected), "step {step}: {e}");
    }
}

// ── non-repetition ───────────────────────────────────────────────────────────

#[test]
fn consecutive_correct_items_differ_with_five_or_more() {
    for n in [5usize, 6, 11, 30] {
        let items = ids(n);
        let mut motor = ExerciseMotor::new();
        let mut prev: Option<String> = None;
        for step in 0..CALLS {
            let e = success(motor.generate("cat", &items));
            if let Some(p) = &prev {
                assert_ne!(p, &e.correct_item_id, "repeat at step {step} size {n}");
            }
            prev = Some(e.correct_item_id);
        }
    }
}

#[test]
fn four_item_pool_keeps_generating_valid_exercises() {
    let mut motor = ExerciseMotor::new();
    let mut prev: Option<String> = None;
    for step in 0..12 {
        let e = success(motor.generate("cat_01", &["a", "b", "c", "d"]));
        let distinct: BTreeSet<&str> = e.options.iter().map(String::as_str).collect();
        assert_eq!(distinct.len(), 4, "duplicate options at step {step}: {e}");
        assert!(e.options.contains(&e.correct_item_id), "correct missing at step {step}: {e}");
        // Three candidates remain after excluding the previous answer.
        if let Some(p) = &prev {
            assert_ne!(p, &e.correct_item_id, "repeat at step {step}");
        }
        prev = Some(e.correct_item_id);
    }
}

// ── category isolation ───────────────────────────────────────────────────────

#[test]
fn switching_away_and_back_restarts_counter() {
    let items = ids(6);
    let mut motor = ExerciseMotor::new();
    for _ in 0..3 {
        success(motor.generate("cat_01", &items));
    }
    for step in 0..5 {
        let e = success(motor.generate("cat_02", &items));
        assert_eq!(e.exercise_id, format!("cat_02:{step}"));
    }
    let back = success(motor.generate("cat_01", &items));
    assert_eq!(back.exercise_id, "cat_01:0");
    // Identical to a brand-new session on the same pool.
    assert_eq!(back, success(ExerciseMotor::new().generate("cat_01", &items)));
}

#[test]
fn reference_category_switch_scenario() {
    let items = ["li_01", "li_02", "li_03", "li_04"];
    let mut motor = ExerciseMotor::new();
    assert_eq!(success(motor.generate("cat_01", &items)).exercise_id, "cat_01:0");
    assert_eq!(success(motor.generate("cat_02", &items)).exercise_id, "cat_02:0");
    assert!(success(motor.generate("cat_01", &items)).exercise_id.ends_with(":0"));
}

// ── mid-session snapshot changes ─────────────────────────────────────────────

#[test]
fn changing_pool_within_a_category_uses_the_new_snapshot() {
    let mut motor = ExerciseMotor::new();
    success(motor.generate("cat", &["a", "b", "c", "d", "e"]));
    // Previous answer "a" is gone from the new pool; nothing to exclude.
    let e = success(motor.generate("cat", &["m", "n", "o", "p"]));
    assert_eq!(e.exercise_id, "cat:1");
    assert_eq!(e.correct_item_id, "n");

    // Shrinking below the floor is ineligible and does not advance.
    assert!(motor.generate("cat", &["m", "n"]).is_ineligible());
    assert_eq!(motor.state().exercise_counter, 2);
    assert_eq!(motor.state().last_correct_id.as_deref(), Some("n"));
}

// ── catalog integration ──────────────────────────────────────────────────────

#[test]
fn builtin_catalog_drives_the_motor() {
    let catalog = Catalog::builtin().unwrap();
    let mut motor = ExerciseMotor::new();
    for category in catalog.categories() {
        let pool = catalog.item_ids(&category.id);
        match motor.generate(&category.id, &pool) {
            MotorResult::Success(e) => {
                assert!(pool.len() >= 4);
                assert_eq!(e.exercise_id, format!("{}:0", category.id));
                for option in &e.options {
                    assert!(catalog.item(option).is_some(), "unknown option {option}");
                }
            }
            MotorResult::Ineligible => assert!(pool.len() < 4, "{} should be eligible", category.id),
            MotorResult::Fault(f) => panic!("fault for {}: {f}", category.id),
        }
    }
}
