//! # queue_trivia_gen
//!
//! Procedural multiple-choice trivia about hero abilities and items.
//!
//! Given a static dataset of heroes, abilities and items (plus precomputed
//! lookup indices), the engine synthesizes questions such as *"What is the
//! cooldown of Pudge's Meat Hook at level 4?"* with three plausible wrong
//! answers, validates them, and retries when a draw falls through.
//!
//! ## How it works
//!
//! 1. Load a [`Dataset`] once at startup ([`Dataset::load_dir`] or
//!    [`Dataset::from_json_strs`]). It is immutable from then on.
//! 2. Build a [`QuestionEngine`] over it with an [`EngineConfig`] (level
//!    policy, retry ceiling, category weights, optional RNG seed).
//! 3. Call [`QuestionEngine::generate_next`]. The engine draws a category,
//!    runs its generator, validates the result and retries up to
//!    `max_retries` times. `None` means no question could be produced.
//! 4. Feed answers into a [`RunTracker`] for points and streaks, and keep the
//!    best score in any [`ScoreStore`].
//!
//! ## Distractors
//!
//! Wrong answers come from sibling entities first (other abilities' cooldowns,
//! items in the same shop category), then familiar round numbers, then
//! proportional offsets (item costs), and finally fixed arithmetic offsets, so
//! generation terminates even on tiny datasets.
//!
//! ## Quick start
//!
//! ```no_run
//! use queue_trivia_gen::{Dataset, EngineConfig, QuestionEngine};
//!
//! let dataset = Dataset::load_dir("data").expect("dataset");
//! let mut engine = QuestionEngine::new(&dataset, EngineConfig::default().with_seed(42))
//!     .expect("valid config");
//!
//! if let Some(q) = engine.generate_next(None) {
//!     println!("Q: {}", q.prompt);
//!     for (key, text) in q.keyed_options() {
//!         let mark = if key == q.correct_answer { "+" } else { " " };
//!         println!("[{mark}] {key}: {text}");
//!     }
//! }
//! ```

pub mod trivia_engine;

// Convenience re-exports so callers can use `queue_trivia_gen::QuestionEngine`
// directly without reaching into `trivia_engine::`.
pub use trivia_engine::{
    calculate_points, AnswerKey, AnswerResult, Category, CategoryWeights, ConfigError, Dataset,
    DatasetError, EngineConfig, FileScoreStore, LevelPolicy, MemoryScoreStore, Question,
    QuestionEngine, RunTracker, ScoreStore, QUESTION_TIME_LIMIT_SECS,
};
