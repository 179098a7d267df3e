use rand::Rng;

use crate::trivia_engine::{
    distractors::{pick_distractors, ITEM_COST_PROFILE},
    helpers::{assemble_options, group_thousands, question, question_id},
    models::{Category, Question},
};

use super::{pick_id, GeneratorContext};

fn format_answer(value: f64) -> String {
    format!("{} gold", group_thousands(value as u64))
}

/// Sibling costs in priority order: items sharing a shop tag, then any
/// purchasable item.
fn peer_tiers(ctx: &GeneratorContext<'_>, item_id: u32) -> Vec<Vec<f64>> {
    let ds = ctx.dataset;
    let indices = ds.indices();
    let cost_of = |id: &u32| -> Option<f64> {
        if *id == item_id {
            return None;
        }
        ds.item(*id).and_then(|i| i.price()).map(f64::from)
    };

    let same_tag: Vec<f64> = ds
        .item(item_id)
        .into_iter()
        .flat_map(|item| item.shop_tags())
        .filter_map(|tag| indices.items_by_shop_tag.get(tag))
        .flatten()
        .filter_map(cost_of)
        .collect();
    let purchasable: Vec<f64> = indices.items_purchasable.iter().filter_map(cost_of).collect();

    vec![same_tag, purchasable]
}

/// "How much gold does <item> cost?"
pub fn generate<R: Rng>(ctx: &GeneratorContext<'_>, rng: &mut R) -> Option<Question> {
    let item_id = pick_id(rng, &ctx.dataset.indices().items_purchasable)?;
    let item = ctx.dataset.item(item_id)?;
    let name = item.name()?;
    let cost = f64::from(item.price()?);

    let distractors = pick_distractors(rng, cost, peer_tiers(ctx, item_id), &ITEM_COST_PROFILE)?;
    let (options, correct) = assemble_options(rng, cost, &distractors, format_answer)?;
    let id = question_id(Category::ItemCost, &[item_id], rng);

    Some(question(
        id,
        Category::ItemCost,
        format!("How much gold does {name} cost?"),
        options,
        correct,
        None,
        None,
        Some(item_id),
    ))
}
