//! Core trivia engine: dataset, distractor generation and question selection.
//!
//! ## Module overview
//!
//! | Module        | Purpose |
//! |---------------|---------|
//! | `models`      | Shared types: categories, answer keys, questions, level policy |
//! | `dataset`     | Heroes, abilities, items and their precomputed indices |
//! | `config`      | Engine settings (level policy, retries, weights, seed) |
//! | `helpers`     | Shuffling, option assembly, ids and display formatting |
//! | `distractors` | Layered wrong-answer selection with per-category profiles |
//! | `topics`      | One generator per category (cooldown, mana cost, item cost) |
//! | `validation`  | Structural checks applied before a question is handed out |
//! | `generator`   | Selection engine: category draw, dispatch, validate, retry |
//! | `scoring`     | Points, streaks, run history and best-score storage |

pub mod config;
pub mod dataset;
pub mod distractors;
pub mod generator;
pub mod helpers;
pub mod models;
pub mod scoring;
pub mod topics;
pub mod validation;

#[cfg(test)]
pub(crate) mod fixtures;

// Re-export the public API surface so callers can use
// `trivia_engine::QuestionEngine` without reaching into sub-modules.
pub use config::{CategoryWeights, ConfigError, EngineConfig, DEFAULT_MAX_RETRIES};
pub use dataset::{Ability, AbilityStat, Dataset, DatasetError, Hero, Indices, Item};
pub use generator::{generate_next_with, QuestionEngine};
pub use models::{AnswerKey, Category, LevelPolicy, Question};
pub use scoring::{
    calculate_points, AnswerResult, FileScoreStore, MemoryScoreStore, RunTracker, ScoreStore,
    ScoreStoreError, QUESTION_TIME_LIMIT_SECS,
};
pub use topics::GeneratorContext;
pub use validation::{check, validate, ValidationError};
