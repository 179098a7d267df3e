use serde::{Deserialize, Serialize};

use crate::trivia_engine::models::{Category, LevelPolicy};

/// Attempts the selection engine makes before giving up.
pub const DEFAULT_MAX_RETRIES: u32 = 20;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("max_retries must be at least 1")]
    NoRetries,
    #[error("weight for {0} must be a finite, non-negative number")]
    NegativeWeight(Category),
    #[error("category weights must not all be zero")]
    ZeroTotalWeight,
    #[error("repeat_penalty must be in 0.0..=1.0 (got {0})")]
    InvalidRepeatPenalty(f64),
    #[error("malformed engine config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Relative draw weight per category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryWeights {
    pub cooldown: f64,
    pub mana_cost: f64,
    pub item_cost: f64,
}

impl Default for CategoryWeights {
    fn default() -> Self {
        CategoryWeights { cooldown: 1.0, mana_cost: 1.0, item_cost: 1.0 }
    }
}

impl CategoryWeights {
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Cooldown => self.cooldown,
            Category::ManaCost => self.mana_cost,
            Category::ItemCost => self.item_cost,
        }
    }
}

/// Runtime settings for [`QuestionEngine`](crate::trivia_engine::generator::QuestionEngine).
///
/// Every field has a default, so a partial JSON object (or `{}`) is a valid
/// config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    pub level_policy: LevelPolicy,
    pub max_retries: u32,
    pub category_weights: CategoryWeights,
    /// Multiplier applied to the previous category's weight. `1.0` ignores
    /// the hint entirely; `0.0` never repeats a category back to back.
    pub repeat_penalty: f64,
    /// Fixed seed for reproducible runs; `None` seeds from entropy.
    pub rng_seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            level_policy: LevelPolicy::MaxLevel,
            max_retries: DEFAULT_MAX_RETRIES,
            category_weights: CategoryWeights::default(),
            repeat_penalty: 1.0,
            rng_seed: None,
        }
    }
}

impl EngineConfig {
    pub fn from_json_str(json: &str) -> Result<EngineConfig, ConfigError> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    pub fn with_level_policy(mut self, policy: LevelPolicy) -> Self {
        self.level_policy = policy;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_retries == 0 {
            return Err(ConfigError::NoRetries);
        }
        for category in Category::ALL {
            let w = self.category_weights.get(category);
            if !w.is_finite() || w < 0.0 {
                return Err(ConfigError::NegativeWeight(category));
            }
        }
        if Category::ALL.iter().all(|&c| self.category_weights.get(c) == 0.0) {
            return Err(ConfigError::ZeroTotalWeight);
        }
        if !(0.0..=1.0).contains(&self.repeat_penalty) {
            return Err(ConfigError::InvalidRepeatPenalty(self.repeat_penalty));
        }
        Ok(())
    }
}
