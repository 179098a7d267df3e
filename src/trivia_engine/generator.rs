use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::trivia_engine::{
    config::{CategoryWeights, ConfigError, EngineConfig},
    dataset::Dataset,
    models::{Category, Question},
    topics::{self, GeneratorContext},
    validation::validate,
};

/// Draw the category for the next attempt.
///
/// The previous category's weight is scaled by `repeat_penalty`; with the
/// default of `1.0` the hint has no effect. If the penalty would leave nothing
/// to draw from, the unpenalized weights are used.
pub fn select_category<R: Rng>(
    rng: &mut R,
    weights: &CategoryWeights,
    last: Option<Category>,
    repeat_penalty: f64,
) -> Category {
    let base = Category::ALL.map(|c| weights.get(c));
    let penalized = Category::ALL.map(|c| {
        let w = weights.get(c);
        if Some(c) == last { w * repeat_penalty } else { w }
    });

    let dist = WeightedIndex::new(penalized).or_else(|_| WeightedIndex::new(base));
    match dist {
        Ok(dist) => Category::ALL[dist.sample(rng)],
        Err(_) => Category::ALL[rng.gen_range(0..Category::ALL.len())],
    }
}

/// Run the generator for one category, without validation or retries.
pub fn generate_for<R: Rng>(category: Category, ctx: &GeneratorContext<'_>, rng: &mut R) -> Option<Question> {
    match category {
        Category::Cooldown => topics::cooldown::generate(ctx, rng),
        Category::ManaCost => topics::mana_cost::generate(ctx, rng),
        Category::ItemCost => topics::item_cost::generate(ctx, rng),
    }
}

/// Core retry loop: draw a category, generate, validate, and repeat up to
/// `config.max_retries` times. `None` means every attempt failed.
pub fn generate_next_with<R: Rng>(
    ctx: &GeneratorContext<'_>,
    config: &EngineConfig,
    rng: &mut R,
    last: Option<Category>,
) -> Option<Question> {
    let mut hint = last;
    for _ in 0..config.max_retries {
        let category = select_category(rng, &config.category_weights, hint, config.repeat_penalty);
        hint = Some(category);

        if let Some(question) = generate_for(category, ctx, rng) {
            if validate(&question) {
                return Some(question);
            }
        }
    }
    None
}

/// Selection engine over a borrowed, immutable [`Dataset`].
///
/// Owns its RNG, seeded from `config.rng_seed` when set so a whole run can be
/// replayed.
pub struct QuestionEngine<'a> {
    dataset: &'a Dataset,
    config: EngineConfig,
    rng: StdRng,
}

impl<'a> QuestionEngine<'a> {
    pub fn new(dataset: &'a Dataset, config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };
        debug!(
            seed = ?config.rng_seed,
            policy = ?config.level_policy,
            max_retries = config.max_retries,
            "question engine ready"
        );
        Ok(QuestionEngine { dataset, config, rng })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn context(&self) -> GeneratorContext<'a> {
        GeneratorContext::new(self.dataset, self.config.level_policy)
    }

    /// Next validated question, or `None` once the retry budget is spent.
    pub fn generate_next(&mut self, last: Option<Category>) -> Option<Question> {
        let ctx = self.context();
        generate_next_with(&ctx, &self.config, &mut self.rng, last)
    }

    /// One validated attempt at a specific category.
    pub fn generate_category(&mut self, category: Category) -> Option<Question> {
        let ctx = self.context();
        generate_for(category, &ctx, &mut self.rng).filter(validate)
    }
}
