use rand::Rng;

use crate::trivia_engine::{
    dataset::Ability,
    distractors::COOLDOWN_PROFILE,
    helpers::{format_number, ICON_PLACEHOLDER},
    models::{Category, Question},
};

use super::{
    ability::{self, AbilityStatQuiz},
    GeneratorContext,
};

const QUIZ: AbilityStatQuiz = AbilityStatQuiz {
    category: Category::Cooldown,
    eligible,
    values: Ability::cooldowns,
    profile: COOLDOWN_PROFILE,
    format_answer,
    prompt,
};

fn format_answer(value: f64) -> String {
    format!("{} seconds", format_number(value))
}

fn eligible<'a>(ctx: &GeneratorContext<'a>) -> &'a [u32] {
    &ctx.dataset.indices().abilities_with_cooldown
}

fn prompt(hero: &str, ability: &str, level: usize) -> String {
    format!("What is the{ICON_PLACEHOLDER} cooldown of {hero}'s {ability} at level {level}?")
}

/// "What is the cooldown of <hero>'s <ability> at level N?"
pub fn generate<R: Rng>(ctx: &GeneratorContext<'_>, rng: &mut R) -> Option<Question> {
    ability::generate(ctx, rng, &QUIZ)
}
