//! Play a short scripted run against a built-in sample dataset.
//!
//! Run with: `cargo run --example demo`
//! Point it at an exported dataset directory instead with:
//! `cargo run --example demo -- path/to/data`
//!
//! Set `RUST_LOG=queue_trivia_gen=debug` to see dataset and engine logs.

use queue_trivia_gen::{
    Dataset, EngineConfig, LevelPolicy, Question, QuestionEngine, RunTracker, QUESTION_TIME_LIMIT_SECS,
};
use tracing_subscriber::EnvFilter;

const HEROES: &str = r#"[
    {"id": 5,  "displayName": "Crystal Maiden", "primaryAttribute": "int"},
    {"id": 14, "displayName": "Pudge", "primaryAttribute": "str"},
    {"id": 25, "displayName": "Lina", "primaryAttribute": "int"}
]"#;

const ABILITIES: &str = r#"[
    {"id": 5127, "name": "crystal_maiden_frostbite", "stat": {"cooldown": [9, 8, 7, 6], "manaCost": [140, 145, 150, 155]}},
    {"id": 5126, "name": "crystal_maiden_crystal_nova", "stat": {"cooldown": [11, 10, 9, 8], "manaCost": [115, 120, 125, 130]}},
    {"id": 5075, "name": "pudge_meat_hook", "stat": {"cooldown": [18, 16, 14, 12], "manaCost": [110, 120, 130, 140]}},
    {"id": 5040, "name": "lina_dragon_slave", "stat": {"cooldown": [9, 9, 9, 9], "manaCost": [90, 100, 110, 120]}},
    {"id": 5043, "name": "lina_laguna_blade", "stat": {"cooldown": [70, 60, 50], "manaCost": [280, 420, 680]}}
]"#;

const ITEMS: &str = r#"[
    {"id": 1,   "displayName": "Blink Dagger", "cost": 2250, "shopTags": "teleport;mobility", "isPurchasable": true},
    {"id": 102, "displayName": "Force Staff", "cost": 2200, "shopTags": "mobility;int", "isPurchasable": true},
    {"id": 116, "displayName": "Black King Bar", "cost": 4050, "shopTags": "str;damage", "isPurchasable": true},
    {"id": 29,  "displayName": "Boots of Speed", "cost": 500, "shopTags": "move_speed", "isPurchasable": true}
]"#;

const INDICES: &str = r#"{
    "abilitiesByHero": {"5": [5127, 5126], "14": [5075], "25": [5040, 5043]},
    "abilityToHero": {"5127": [5], "5126": [5], "5075": [14], "5040": [25], "5043": [25]},
    "abilitiesWithCooldown": [5127, 5126, 5075, 5040, 5043],
    "abilitiesWithManaCost": [5127, 5126, 5075, 5040, 5043],
    "itemsPurchasable": [1, 102, 116, 29],
    "itemsByShopTag": {"mobility": [1, 102], "teleport": [1], "int": [102], "str": [116], "damage": [116], "move_speed": [29]}
}"#;

fn print_question(number: usize, q: &Question) {
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  #{number} [{}]  ID: {}", q.category, q.id);
    println!("  Q: {}", q.prompt.replace("{icon}", ""));
    for (key, text) in q.keyed_options() {
        let marker = if key == q.correct_answer { "✓" } else { " " };
        println!("   [{marker}] {key}. {text}");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "queue_trivia_gen=info".into()))
        .init();

    let dataset = match std::env::args().nth(1) {
        Some(dir) => Dataset::load_dir(dir)?,
        None => Dataset::from_json_strs(HEROES, ABILITIES, ITEMS, INDICES)?,
    };

    let config = EngineConfig::default()
        .with_seed(42)
        .with_level_policy(LevelPolicy::RandomLevel);
    let mut engine = QuestionEngine::new(&dataset, config)?;
    let mut run = RunTracker::new();
    let mut last = None;

    for number in 1..=6 {
        let Some(q) = engine.generate_next(last) else {
            println!("Could not load a question.");
            break;
        };
        print_question(number, &q);

        // Scripted player: right on even questions, slower each time.
        let seconds_left = QUESTION_TIME_LIMIT_SECS.saturating_sub(number as u32);
        let result = if number % 2 == 0 {
            run.answer(&q, q.correct_answer, seconds_left)
        } else {
            run.timeout(&q)
        };
        println!("  → {} (+{} pts)", if result.correct { "correct" } else { "missed" }, result.points_earned);
        last = Some(q.category);
    }

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  Final score: {}  Streak: {}", run.score(), run.streak());
    Ok(())
}
