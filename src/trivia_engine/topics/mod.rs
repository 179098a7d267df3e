//! Category generators.
//!
//! Every generator has the same shape:
//!
//! ```ignore
//! pub fn generate<R: Rng>(ctx: &GeneratorContext<'_>, rng: &mut R) -> Option<Question>
//! ```
//!
//! `None` is a soft failure (empty pool, missing cross-reference, not enough
//! distractors). The selection engine in `generator.rs` dispatches to these
//! and retries.

use rand::Rng;

use crate::trivia_engine::{dataset::Dataset, models::LevelPolicy};

mod ability;
pub mod cooldown;
pub mod item_cost;
pub mod mana_cost;

/// Read-only inputs shared by every generator call.
#[derive(Debug, Clone, Copy)]
pub struct GeneratorContext<'a> {
    pub dataset: &'a Dataset,
    pub level_policy: LevelPolicy,
}

impl<'a> GeneratorContext<'a> {
    pub fn new(dataset: &'a Dataset, level_policy: LevelPolicy) -> Self {
        GeneratorContext { dataset, level_policy }
    }
}

/// Uniformly pick one id, `None` for an empty pool.
fn pick_id<R: Rng>(rng: &mut R, ids: &[u32]) -> Option<u32> {
    if ids.is_empty() {
        return None;
    }
    Some(ids[rng.gen_range(0..ids.len())])
}

/// 1-based level to quiz for a stat array of `levels` entries.
fn pick_level<R: Rng>(rng: &mut R, levels: usize, policy: LevelPolicy) -> Option<usize> {
    if levels == 0 {
        return None;
    }
    Some(match policy {
        LevelPolicy::MaxLevel    => levels,
        LevelPolicy::RandomLevel => rng.gen_range(1..=levels),
    })
}
