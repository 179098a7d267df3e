use rand::Rng;

use crate::trivia_engine::{
    dataset::Ability,
    distractors::MANA_COST_PROFILE,
    helpers::{format_number, ICON_PLACEHOLDER},
    models::{Category, Question},
};

use super::{
    ability::{self, AbilityStatQuiz},
    GeneratorContext,
};

const QUIZ: AbilityStatQuiz = AbilityStatQuiz {
    category: Category::ManaCost,
    eligible,
    values: Ability::mana_costs,
    profile: MANA_COST_PROFILE,
    format_answer: format_number,
    prompt,
};

fn eligible<'a>(ctx: &GeneratorContext<'a>) -> &'a [u32] {
    &ctx.dataset.indices().abilities_with_mana_cost
}

fn prompt(hero: &str, ability: &str, level: usize) -> String {
    format!("How much{ICON_PLACEHOLDER} mana does {hero}'s {ability} cost at level {level}?")
}

/// "How much mana does <hero>'s <ability> cost at level N?"
pub fn generate<R: Rng>(ctx: &GeneratorContext<'_>, rng: &mut R) -> Option<Question> {
    ability::generate(ctx, rng, &QUIZ)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trivia_engine::{fixtures, models::LevelPolicy};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn options_are_plain_numbers() {
        let ds = fixtures::small_dataset();
        let ctx = GeneratorContext::new(&ds, LevelPolicy::MaxLevel);
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..25 {
            let q = generate(&ctx, &mut rng).unwrap();
            assert_eq!(q.category, Category::ManaCost);
            for opt in &q.options {
                assert!(opt.parse::<f64>().is_ok(), "not a plain number: {opt}");
            }
            assert!(q.prompt.contains("mana does"));
        }
    }

    #[test]
    fn random_level_policy_quizzes_lower_levels_too() {
        let ds = fixtures::small_dataset();
        let ctx = GeneratorContext::new(&ds, LevelPolicy::RandomLevel);
        let mut rng = StdRng::seed_from_u64(4);
        let levels: Vec<String> = (0..100)
            .filter_map(|_| generate(&ctx, &mut rng))
            .map(|q| q.prompt)
            .collect();
        assert!(levels.iter().any(|p| p.ends_with("at level 1?")));
        assert!(levels.iter().any(|p| p.ends_with("at level 4?")));
    }

    #[test]
    fn distractors_differ_from_the_answer() {
        let ds = fixtures::small_dataset();
        let ctx = GeneratorContext::new(&ds, LevelPolicy::MaxLevel);
        let mut rng = StdRng::seed_from_u64(12);
        for _ in 0..25 {
            let q = generate(&ctx, &mut rng).unwrap();
            let answer = q.correct_text().to_string();
            let matches = q.options.iter().filter(|o| **o == answer).count();
            assert_eq!(matches, 1);
        }
    }
}
