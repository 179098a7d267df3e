//! Static game data and its lookup indices.
//!
//! The dataset is four flat JSON documents produced by an offline export
//! transform: `heroes.json`, `abilities.json`, `items.json` and
//! `indices.json`. Field names are camelCase; per-level arrays are ordered by
//! level (level 1 first) and `null` means "no such stat".
//!
//! A [`Dataset`] is built once and never mutated afterwards. Records that fail
//! to parse individually are skipped, and index entries pointing at ids that do
//! not resolve are pruned, so every id reachable through [`Indices`] resolves
//! to a real entity.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed {document} document: {source}")]
    Parse {
        document: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

// ---------------------------------------------------------------------------
// Entities
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub id: u32,
    pub display_name: String,
    #[serde(default)]
    pub primary_attribute: Option<String>,
    #[serde(default)]
    pub attack_type: Option<String>,
    #[serde(default)]
    pub enabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbilityStat {
    #[serde(default)]
    pub cooldown: Option<Vec<f64>>,
    #[serde(default)]
    pub mana_cost: Option<Vec<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ability {
    pub id: u32,
    /// Internal snake_case name, usually prefixed with the hero's name.
    pub name: String,
    #[serde(default)]
    pub is_talent: bool,
    #[serde(default)]
    pub stat: AbilityStat,
}

impl Ability {
    /// Cooldown per level, empty when the ability has none.
    pub fn cooldowns(&self) -> &[f64] {
        self.stat.cooldown.as_deref().unwrap_or(&[])
    }

    /// Mana cost per level, empty when the ability has none.
    pub fn mana_costs(&self) -> &[f64] {
        self.stat.mana_cost.as_deref().unwrap_or(&[])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: u32,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub cost: Option<u32>,
    /// `;`-separated shop tags, e.g. `"damage;attack_speed"`.
    #[serde(default)]
    pub shop_tags: Option<String>,
    #[serde(default)]
    pub quality: Option<String>,
    #[serde(default)]
    pub is_purchasable: bool,
}

impl Item {
    /// Gold cost if the item has a positive one.
    pub fn price(&self) -> Option<u32> {
        self.cost.filter(|&c| c > 0)
    }

    pub fn name(&self) -> Option<&str> {
        self.display_name.as_deref().filter(|n| !n.trim().is_empty())
    }

    pub fn shop_tags(&self) -> impl Iterator<Item = &str> {
        self.shop_tags
            .as_deref()
            .unwrap_or("")
            .split(';')
            .filter(|t| !t.is_empty())
    }
}

// ---------------------------------------------------------------------------
// Indices
// ---------------------------------------------------------------------------

/// Precomputed id groupings, keyed the same way as `indices.json`.
///
/// Ordered maps keep iteration (and therefore seeded generation) stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Indices {
    #[serde(default)]
    pub abilities_by_hero: BTreeMap<u32, Vec<u32>>,
    #[serde(default)]
    pub talents_by_hero: BTreeMap<u32, Vec<u32>>,
    #[serde(default)]
    pub ability_to_hero: BTreeMap<u32, Vec<u32>>,
    #[serde(default)]
    pub abilities_with_cooldown: Vec<u32>,
    #[serde(default)]
    pub abilities_with_mana_cost: Vec<u32>,
    #[serde(default)]
    pub items_purchasable: Vec<u32>,
    #[serde(default)]
    pub items_by_shop_tag: BTreeMap<String, Vec<u32>>,
    #[serde(default)]
    pub items_by_quality: BTreeMap<String, Vec<u32>>,
    #[serde(default)]
    pub heroes_by_primary_attribute: BTreeMap<String, Vec<u32>>,
}

impl Indices {
    /// Derive every stat-based index from the entity collections.
    ///
    /// `abilities_by_hero` is the one grouping that cannot be recovered from
    /// the records themselves; talents are split out of it by `is_talent`.
    pub fn derive(
        heroes: &[Hero],
        abilities: &[Ability],
        items: &[Item],
        abilities_by_hero: BTreeMap<u32, Vec<u32>>,
    ) -> Indices {
        let talent_ids: Vec<u32> = abilities.iter().filter(|a| a.is_talent).map(|a| a.id).collect();

        let mut ability_to_hero: BTreeMap<u32, Vec<u32>> = BTreeMap::new();
        let mut talents_by_hero: BTreeMap<u32, Vec<u32>> = BTreeMap::new();
        for (&hero_id, ability_ids) in &abilities_by_hero {
            for &ability_id in ability_ids {
                ability_to_hero.entry(ability_id).or_default().push(hero_id);
                if talent_ids.contains(&ability_id) {
                    talents_by_hero.entry(hero_id).or_default().push(ability_id);
                }
            }
        }

        let abilities_with_cooldown = abilities
            .iter()
            .filter(|a| a.cooldowns().iter().any(|&v| v > 0.0))
            .map(|a| a.id)
            .collect();
        let abilities_with_mana_cost = abilities
            .iter()
            .filter(|a| a.mana_costs().iter().any(|&v| v > 0.0))
            .map(|a| a.id)
            .collect();

        let mut items_purchasable = Vec::new();
        let mut items_by_shop_tag: BTreeMap<String, Vec<u32>> = BTreeMap::new();
        let mut items_by_quality: BTreeMap<String, Vec<u32>> = BTreeMap::new();
        for item in items {
            if item.is_purchasable && item.price().is_some() {
                items_purchasable.push(item.id);
            }
            for tag in item.shop_tags() {
                items_by_shop_tag.entry(tag.to_string()).or_default().push(item.id);
            }
            if let Some(quality) = &item.quality {
                items_by_quality.entry(quality.clone()).or_default().push(item.id);
            }
        }

        let mut heroes_by_primary_attribute: BTreeMap<String, Vec<u32>> = BTreeMap::new();
        for hero in heroes {
            if let Some(attr) = &hero.primary_attribute {
                heroes_by_primary_attribute.entry(attr.clone()).or_default().push(hero.id);
            }
        }

        Indices {
            abilities_by_hero,
            talents_by_hero,
            ability_to_hero,
            abilities_with_cooldown,
            abilities_with_mana_cost,
            items_purchasable,
            items_by_shop_tag,
            items_by_quality,
            heroes_by_primary_attribute,
        }
    }
}

// ---------------------------------------------------------------------------
// Dataset
// ---------------------------------------------------------------------------

/// Immutable entity collections plus hashed id lookups and indices.
#[derive(Debug, Clone)]
pub struct Dataset {
    heroes: Vec<Hero>,
    abilities: Vec<Ability>,
    items: Vec<Item>,
    indices: Indices,
    hero_by_id: HashMap<u32, usize>,
    ability_by_id: HashMap<u32, usize>,
    item_by_id: HashMap<u32, usize>,
}

impl Dataset {
    /// Build the dataset, pruning index entries that reference unknown ids.
    pub fn new(heroes: Vec<Hero>, abilities: Vec<Ability>, items: Vec<Item>, indices: Indices) -> Dataset {
        let hero_by_id = position_map(heroes.iter().map(|h| h.id));
        let ability_by_id = position_map(abilities.iter().map(|a| a.id));
        let item_by_id = position_map(items.iter().map(|i| i.id));

        let mut dataset = Dataset {
            heroes,
            abilities,
            items,
            indices,
            hero_by_id,
            ability_by_id,
            item_by_id,
        };
        let pruned = dataset.prune_dangling_ids();
        if pruned > 0 {
            warn!(pruned, "dropped index entries that reference unknown entities");
        }
        dataset
    }

    /// Parse the four documents from JSON text.
    pub fn from_json_strs(
        heroes: &str,
        abilities: &str,
        items: &str,
        indices: &str,
    ) -> Result<Dataset, DatasetError> {
        let heroes: Vec<Hero> = parse_records("heroes", heroes)?;
        let abilities: Vec<Ability> = parse_records("abilities", abilities)?;
        let items: Vec<Item> = parse_records("items", items)?;
        let indices: Indices = serde_json::from_str(indices)
            .map_err(|source| DatasetError::Parse { document: "indices", source })?;

        let dataset = Dataset::new(heroes, abilities, items, indices);
        info!(
            heroes = dataset.heroes.len(),
            abilities = dataset.abilities.len(),
            items = dataset.items.len(),
            "dataset loaded"
        );
        Ok(dataset)
    }

    /// Load `heroes.json`, `abilities.json`, `items.json` and `indices.json`
    /// from `dir`.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Dataset, DatasetError> {
        let dir = dir.as_ref();
        let read = |name: &str| {
            let path = dir.join(name);
            fs::read_to_string(&path).map_err(|source| DatasetError::Io { path, source })
        };
        Dataset::from_json_strs(
            &read("heroes.json")?,
            &read("abilities.json")?,
            &read("items.json")?,
            &read("indices.json")?,
        )
    }

    pub fn hero(&self, id: u32) -> Option<&Hero> {
        self.hero_by_id.get(&id).map(|&i| &self.heroes[i])
    }

    pub fn ability(&self, id: u32) -> Option<&Ability> {
        self.ability_by_id.get(&id).map(|&i| &self.abilities[i])
    }

    pub fn item(&self, id: u32) -> Option<&Item> {
        self.item_by_id.get(&id).map(|&i| &self.items[i])
    }

    /// First hero that owns `ability_id`.
    pub fn hero_for_ability(&self, ability_id: u32) -> Option<&Hero> {
        self.indices
            .ability_to_hero
            .get(&ability_id)
            .and_then(|ids| ids.first())
            .and_then(|&id| self.hero(id))
    }

    pub fn heroes(&self) -> &[Hero] {
        &self.heroes
    }

    pub fn abilities(&self) -> &[Ability] {
        &self.abilities
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn indices(&self) -> &Indices {
        &self.indices
    }

    fn prune_dangling_ids(&mut self) -> usize {
        let heroes = &self.hero_by_id;
        let abilities = &self.ability_by_id;
        let items = &self.item_by_id;
        let idx = &mut self.indices;
        let mut pruned = 0;

        pruned += retain_known(&mut idx.abilities_with_cooldown, abilities);
        pruned += retain_known(&mut idx.abilities_with_mana_cost, abilities);
        pruned += retain_known(&mut idx.items_purchasable, items);
        for ids in idx.items_by_shop_tag.values_mut() {
            pruned += retain_known(ids, items);
        }
        for ids in idx.items_by_quality.values_mut() {
            pruned += retain_known(ids, items);
        }
        for ids in idx.heroes_by_primary_attribute.values_mut() {
            pruned += retain_known(ids, heroes);
        }
        for ids in idx.abilities_by_hero.values_mut() {
            pruned += retain_known(ids, abilities);
        }
        for ids in idx.talents_by_hero.values_mut() {
            pruned += retain_known(ids, abilities);
        }
        for ids in idx.ability_to_hero.values_mut() {
            pruned += retain_known(ids, heroes);
        }
        pruned
    }
}

/// First occurrence of an id wins.
fn position_map(ids: impl Iterator<Item = u32>) -> HashMap<u32, usize> {
    let mut map = HashMap::new();
    for (pos, id) in ids.enumerate() {
        map.entry(id).or_insert(pos);
    }
    map
}

fn retain_known(ids: &mut Vec<u32>, known: &HashMap<u32, usize>) -> usize {
    let before = ids.len();
    ids.retain(|id| known.contains_key(id));
    before - ids.len()
}

/// Parse a JSON array, skipping individual records that do not fit the
/// schema (for instance abilities exported with a `null` id).
fn parse_records<T: DeserializeOwned>(document: &'static str, json: &str) -> Result<Vec<T>, DatasetError> {
    let raw: Vec<serde_json::Value> =
        serde_json::from_str(json).map_err(|source| DatasetError::Parse { document, source })?;
    let total = raw.len();
    let records: Vec<T> = raw
        .into_iter()
        .filter_map(|v| serde_json::from_value(v).ok())
        .collect();
    if records.len() < total {
        warn!(document, skipped = total - records.len(), "skipped malformed records");
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEROES: &str = r#"[
        {"id": 1, "displayName": "Anti-Mage", "primaryAttribute": "agi", "enabled": true},
        {"id": 2, "displayName": "Crystal Maiden", "primaryAttribute": "int", "enabled": true}
    ]"#;

    const ABILITIES: &str = r#"[
        {"id": 10, "name": "antimage_blink", "isTalent": false,
         "stat": {"cooldown": [15, 12, 9, 6], "manaCost": [60, 60, 60, 60]}},
        {"id": 20, "name": "crystal_maiden_frostbite", "isTalent": false,
         "stat": {"cooldown": [9, 8, 7, 6], "manaCost": [140, 145, 150, 155]}},
        {"id": null, "name": "broken_record", "stat": {}},
        {"id": 30, "name": "special_bonus_unique_crystal_maiden_1", "isTalent": true, "stat": {"cooldown": null}}
    ]"#;

    const ITEMS: &str = r#"[
        {"id": 1, "displayName": "Blink Dagger", "cost": 2250, "shopTags": "teleport;mobility", "isPurchasable": true},
        {"id": 2, "displayName": "Force Staff", "cost": 2200, "shopTags": "int;mobility", "isPurchasable": true},
        {"id": 3, "displayName": "Aegis", "cost": 0, "shopTags": null, "isPurchasable": false}
    ]"#;

    const INDICES: &str = r#"{
        "abilitiesByHero": {"1": [10], "2": [20, 30]},
        "abilityToHero": {"10": [1], "20": [2], "99": [2]},
        "abilitiesWithCooldown": [10, 20, 404],
        "abilitiesWithManaCost": [10, 20],
        "itemsPurchasable": [1, 2],
        "itemsByShopTag": {"mobility": [1, 2], "teleport": [1]},
        "facetsByHero": {"1": [{"facetId": 1, "abilityId": null, "slot": 0}]}
    }"#;

    #[test]
    fn parses_documents_and_skips_malformed_records() {
        let ds = Dataset::from_json_strs(HEROES, ABILITIES, ITEMS, INDICES).unwrap();
        assert_eq!(ds.heroes().len(), 2);
        assert_eq!(ds.abilities().len(), 3, "record with null id must be skipped");
        assert_eq!(ds.items().len(), 3);
        assert_eq!(ds.ability(20).unwrap().mana_costs(), &[140.0, 145.0, 150.0, 155.0]);
        assert!(ds.ability(30).unwrap().cooldowns().is_empty());
    }

    #[test]
    fn unknown_ids_resolve_to_none() {
        let ds = Dataset::from_json_strs(HEROES, ABILITIES, ITEMS, INDICES).unwrap();
        assert!(ds.hero(777).is_none());
        assert!(ds.ability(777).is_none());
        assert!(ds.item(777).is_none());
    }

    #[test]
    fn dangling_index_entries_are_pruned() {
        let ds = Dataset::from_json_strs(HEROES, ABILITIES, ITEMS, INDICES).unwrap();
        assert_eq!(ds.indices().abilities_with_cooldown, vec![10, 20]);
        // Keys are ability ids; only the hero ids they map to are checked.
        for ids in ds.indices().ability_to_hero.values() {
            assert!(ids.iter().all(|&id| ds.hero(id).is_some()));
        }
    }

    #[test]
    fn hero_for_ability_uses_first_owner() {
        let ds = Dataset::from_json_strs(HEROES, ABILITIES, ITEMS, INDICES).unwrap();
        assert_eq!(ds.hero_for_ability(20).unwrap().display_name, "Crystal Maiden");
        assert!(ds.hero_for_ability(30).is_none());
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        let err = Dataset::from_json_strs("{not json", ABILITIES, ITEMS, INDICES).unwrap_err();
        assert!(matches!(err, DatasetError::Parse { document: "heroes", .. }));
    }

    #[test]
    fn load_dir_reports_missing_file() {
        let dir = std::env::temp_dir().join("queue_trivia_gen_missing_dataset_dir");
        let err = Dataset::load_dir(&dir).unwrap_err();
        assert!(matches!(err, DatasetError::Io { .. }));
    }

    #[test]
    fn derive_builds_stat_indices() {
        let heroes: Vec<Hero> = serde_json::from_str(HEROES).unwrap();
        let abilities: Vec<Ability> = parse_records("abilities", ABILITIES).unwrap();
        let items: Vec<Item> = serde_json::from_str(ITEMS).unwrap();
        let by_hero = BTreeMap::from([(1, vec![10]), (2, vec![20, 30])]);

        let idx = Indices::derive(&heroes, &abilities, &items, by_hero);
        assert_eq!(idx.abilities_with_cooldown, vec![10, 20]);
        assert_eq!(idx.abilities_with_mana_cost, vec![10, 20]);
        assert_eq!(idx.ability_to_hero.get(&20), Some(&vec![2]));
        assert_eq!(idx.talents_by_hero.get(&2), Some(&vec![30]));
        assert_eq!(idx.items_purchasable, vec![1, 2]);
        assert_eq!(idx.items_by_shop_tag.get("mobility"), Some(&vec![1, 2]));
        assert_eq!(idx.heroes_by_primary_attribute.get("int"), Some(&vec![2]));
    }

    #[test]
    fn item_shop_tags_skip_empty_segments() {
        let item = Item {
            id: 1,
            display_name: Some("Blink Dagger".into()),
            cost: Some(2250),
            shop_tags: Some(";teleport;;mobility".into()),
            quality: None,
            is_purchasable: true,
        };
        assert_eq!(item.shop_tags().collect::<Vec<_>>(), vec!["teleport", "mobility"]);
    }
}
