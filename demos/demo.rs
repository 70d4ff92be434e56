//! Walk-through of the exercise engine over the seed catalog.
//!
//! Run with: `cargo run --example demo`
//!
//! 1. **Catalog** — loaded from `LEXICAL_SEED_PATH` or the built-in seed.
//! 2. **Every category** — three exercises each, answered alternately right
//!    and wrong through `ExerciseSession`, with German terms resolved from the
//!    catalog. Categories with fewer than four items report as unavailable.
//! 3. **JSON** — one raw `MotorResult` serialised with serde_json.
//!
//! Logging: `LOG_LEVEL` sets the tracing filter (default
//! `info,exercise_motor=debug`), `LOG_FORMAT=json` switches to JSON lines.

use lexical_drill_gen::{
    Catalog, Exercise, ExerciseMotor, ExerciseSession, FeedbackMessage, ItemSource, ScreenState,
};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_env("LOG_LEVEL")
        .unwrap_or_else(|_| EnvFilter::new("info,exercise_motor=debug"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);
    match std::env::var("LOG_FORMAT").as_deref() {
        Ok("json") => builder.json().init(),
        _ => builder.init(),
    }
}

fn term(catalog: &Catalog, id: &str) -> String {
    catalog
        .item(id)
        .map(|it| format!("{} ({})", it.term_de, it.term_es))
        .unwrap_or_else(|| id.to_string())
}

fn print_exercise(catalog: &Catalog, exercise: &Exercise) {
    println!("  [{}]  Which one means \"{}\"?",
        exercise.exercise_id,
        catalog.item(&exercise.correct_item_id).map(|it| it.term_es.as_str()).unwrap_or("?"));
    for (i, option) in exercise.options.iter().enumerate() {
        let marker = if *option == exercise.correct_option_id { "✓" } else { " " };
        println!("    {}) {marker} {}", i + 1, term(catalog, option));
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let catalog = Catalog::from_env()?;
    println!();
    println!("══ Catalog: {} categories, {} items ══", catalog.categories().len(), catalog.item_count());
    println!();

    let mut session = ExerciseSession::new(&catalog);
    for category in catalog.categories() {
        println!("── {} ({}) ──", category.name, category.id);
        session.load(&category.id);
        for round in 0..3 {
            let exercise = match session.screen() {
                ScreenState::ShowingExercise { exercise } => exercise.clone(),
                ScreenState::Unavailable { .. } => {
                    println!("  not enough items for an exercise");
                    break;
                }
                other => {
                    println!("  unexpected screen: {other:?}");
                    break;
                }
            };
            print_exercise(&catalog, &exercise);

            let pick = if round % 2 == 0 {
                exercise.correct_option_id.clone()
            } else {
                exercise.options.iter().find(|o| **o != exercise.correct_option_id)
                    .cloned()
                    .unwrap_or_default()
            };
            if let Some(outcome) = session.submit(&pick)? {
                let msg = FeedbackMessage::for_outcome(outcome);
                println!("    → answered {}: {} — {}", term(&catalog, &pick), msg.title, msg.subtitle);
            }
            println!();
            session.next();
        }
    }
    println!("Total score: {}", session.score());

    println!();
    println!("══ Raw MotorResult as JSON ══");
    let mut motor = ExerciseMotor::new();
    let result = motor.generate("cat_02", &catalog.item_ids("cat_02"));
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
