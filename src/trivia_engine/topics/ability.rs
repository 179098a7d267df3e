//! Shared flow for the per-level ability stat categories.

use rand::Rng;

use crate::trivia_engine::{
    dataset::Ability,
    distractors::{pick_distractors, DistractorProfile},
    helpers::{assemble_options, format_ability_name, question, question_id},
    models::{Category, Question},
};

use super::{pick_id, pick_level, GeneratorContext};

/// What varies between the ability stat categories.
pub(super) struct AbilityStatQuiz {
    pub category: Category,
    pub eligible: for<'a> fn(&GeneratorContext<'a>) -> &'a [u32],
    pub values: fn(&Ability) -> &[f64],
    pub profile: DistractorProfile,
    pub format_answer: fn(f64) -> String,
    pub prompt: fn(hero: &str, ability: &str, level: usize) -> String,
}

pub(super) fn generate<R: Rng>(
    ctx: &GeneratorContext<'_>,
    rng: &mut R,
    quiz: &AbilityStatQuiz,
) -> Option<Question> {
    let ids = (quiz.eligible)(ctx);
    let ability_id = pick_id(rng, ids)?;
    let ability = ctx.dataset.ability(ability_id)?;

    let levels = (quiz.values)(ability);
    let level = pick_level(rng, levels.len(), ctx.level_policy)?;
    let value = levels[level - 1];
    if !(value > 0.0) {
        return None;
    }

    let hero = ctx.dataset.hero_for_ability(ability_id)?;
    let ability_name = format_ability_name(&ability.name, Some(&hero.display_name));

    let peers: Vec<f64> = ids
        .iter()
        .filter(|&&id| id != ability_id)
        .filter_map(|&id| ctx.dataset.ability(id))
        .flat_map(|a| (quiz.values)(a).iter().copied())
        .filter(|&v| v > 0.0)
        .collect();

    let distractors = pick_distractors(rng, value, vec![peers], &quiz.profile)?;
    let (options, correct) = assemble_options(rng, value, &distractors, quiz.format_answer)?;
    let id = question_id(quiz.category, &[ability_id, level as u32], rng);

    Some(question(
        id,
        quiz.category,
        (quiz.prompt)(&hero.display_name, &ability_name, level),
        options,
        correct,
        Some(hero.id),
        Some(ability_id),
        None,
    ))
}
