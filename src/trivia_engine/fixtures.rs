//! Hand-built datasets for tests.

use std::collections::BTreeMap;

use crate::trivia_engine::dataset::{Ability, AbilityStat, Dataset, Hero, Indices, Item};

pub fn hero(id: u32, name: &str, attr: &str) -> Hero {
    Hero {
        id,
        display_name: name.to_string(),
        primary_attribute: Some(attr.to_string()),
        attack_type: None,
        enabled: true,
    }
}

pub fn ability(id: u32, name: &str, cooldown: &[f64], mana_cost: &[f64]) -> Ability {
    let level_array = |v: &[f64]| if v.is_empty() { None } else { Some(v.to_vec()) };
    Ability {
        id,
        name: name.to_string(),
        is_talent: false,
        stat: AbilityStat { cooldown: level_array(cooldown), mana_cost: level_array(mana_cost) },
    }
}

pub fn item(id: u32, name: &str, cost: u32, tags: &str) -> Item {
    Item {
        id,
        display_name: Some(name.to_string()),
        cost: Some(cost),
        shop_tags: Some(tags.to_string()),
        quality: None,
        is_purchasable: true,
    }
}

fn build(heroes: Vec<Hero>, abilities: Vec<Ability>, items: Vec<Item>, by_hero: Vec<(u32, Vec<u32>)>) -> Dataset {
    let by_hero: BTreeMap<u32, Vec<u32>> = by_hero.into_iter().collect();
    let indices = Indices::derive(&heroes, &abilities, &items, by_hero);
    Dataset::new(heroes, abilities, items, indices)
}

/// A handful of real-looking heroes, abilities and items.
pub fn small_dataset() -> Dataset {
    let heroes = vec![
        hero(1, "Anti-Mage", "agi"),
        hero(5, "Crystal Maiden", "int"),
        hero(14, "Pudge", "str"),
        hero(25, "Lina", "int"),
    ];
    let abilities = vec![
        ability(5003, "antimage_blink", &[15.0, 12.0, 9.0, 6.0], &[60.0, 60.0, 60.0, 60.0]),
        ability(5006, "antimage_mana_void", &[70.0, 70.0, 70.0], &[100.0, 200.0, 300.0]),
        ability(5127, "crystal_maiden_frostbite", &[9.0, 8.0, 7.0, 6.0], &[140.0, 145.0, 150.0, 155.0]),
        ability(5126, "crystal_maiden_crystal_nova", &[11.0, 10.0, 9.0, 8.0], &[115.0, 120.0, 125.0, 130.0]),
        ability(5075, "pudge_meat_hook", &[18.0, 16.0, 14.0, 12.0], &[110.0, 120.0, 130.0, 140.0]),
        ability(5076, "pudge_rot", &[], &[]),
        ability(5040, "lina_dragon_slave", &[9.0, 9.0, 9.0, 9.0], &[90.0, 100.0, 110.0, 120.0]),
        ability(5043, "lina_laguna_blade", &[70.0, 60.0, 50.0], &[280.0, 420.0, 680.0]),
    ];
    let items = vec![
        item(1, "Blink Dagger", 2250, "teleport;mobility"),
        item(102, "Force Staff", 2200, "mobility;int"),
        item(99, "Eul's Scepter of Divinity", 2725, "int;mobility"),
        item(116, "Black King Bar", 4050, "str;damage"),
        item(29, "Boots of Speed", 500, "move_speed"),
        Item {
            id: 117,
            display_name: Some("Aegis of the Immortal".to_string()),
            cost: Some(0),
            shop_tags: None,
            quality: Some("rare".to_string()),
            is_purchasable: false,
        },
    ];
    build(
        heroes,
        abilities,
        items,
        vec![
            (1, vec![5003, 5006]),
            (5, vec![5127, 5126]),
            (14, vec![5075, 5076]),
            (25, vec![5040, 5043]),
        ],
    )
}

/// Two abilities, one cooldown level each, no overlap.
pub fn sparse_cooldown_dataset() -> Dataset {
    build(
        vec![hero(1, "Anti-Mage", "agi"), hero(14, "Pudge", "str")],
        vec![
            ability(10, "antimage_blink", &[7.0], &[]),
            ability(20, "pudge_dismember", &[13.0], &[]),
        ],
        vec![],
        vec![(1, vec![10]), (14, vec![20])],
    )
}

/// One purchasable item and nothing else.
pub fn single_item_dataset(cost: u32) -> Dataset {
    build(vec![], vec![], vec![item(1, "Tango", cost, "consumable")], vec![])
}

/// An ability with a cooldown that no hero owns.
pub fn orphan_ability_dataset() -> Dataset {
    build(vec![hero(1, "Anti-Mage", "agi")], vec![ability(10, "antimage_blink", &[15.0], &[])], vec![], vec![])
}

pub fn empty_dataset() -> Dataset {
    Dataset::new(vec![], vec![], vec![], Indices::default())
}
