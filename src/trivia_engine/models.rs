use std::fmt;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Question categories
// ---------------------------------------------------------------------------

/// The three stat categories the engine can quiz.
///
/// Serialized tags match the ones the presentation layer already keys on
/// (`"cooldown"`, `"ability"`, `"item"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "cooldown")]
    Cooldown,
    #[serde(rename = "ability")]
    ManaCost,
    #[serde(rename = "item")]
    ItemCost,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Cooldown, Category::ManaCost, Category::ItemCost];

    /// Short tag used as the question id prefix.
    pub fn tag(self) -> &'static str {
        match self {
            Category::Cooldown => "cooldown",
            Category::ManaCost => "ability",
            Category::ItemCost => "item",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Category::Cooldown => "Ability Cooldown",
            Category::ManaCost => "Ability Mana Cost",
            Category::ItemCost => "Item Cost",
        };
        write!(f, "{}", s)
    }
}

// ---------------------------------------------------------------------------
// Answer keys
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AnswerKey {
    A,
    B,
    C,
    D,
}

impl AnswerKey {
    pub const ALL: [AnswerKey; 4] = [AnswerKey::A, AnswerKey::B, AnswerKey::C, AnswerKey::D];

    /// A=0 … D=3.
    pub fn index(self) -> usize {
        match self {
            AnswerKey::A => 0,
            AnswerKey::B => 1,
            AnswerKey::C => 2,
            AnswerKey::D => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<AnswerKey> {
        AnswerKey::ALL.get(index).copied()
    }
}

impl fmt::Display for AnswerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AnswerKey::A => "A",
            AnswerKey::B => "B",
            AnswerKey::C => "C",
            AnswerKey::D => "D",
        };
        write!(f, "{}", s)
    }
}

// ---------------------------------------------------------------------------
// Level policy
// ---------------------------------------------------------------------------

/// Which entry of a per-level stat array becomes the quizzed value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LevelPolicy {
    /// Always quiz the highest level.
    #[default]
    MaxLevel,
    /// Quiz a uniformly random level in `1..=len`.
    RandomLevel,
}

// ---------------------------------------------------------------------------
// Question
// ---------------------------------------------------------------------------

/// One fully formed multiple-choice question.
///
/// `options` is indexed by [`AnswerKey::index`]. The id fields are
/// back-references for icon lookups in the presentation layer only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub prompt: String,
    pub options: [String; 4],
    pub correct_answer: AnswerKey,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ability_id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_id: Option<u32>,
}

impl Question {
    pub fn option(&self, key: AnswerKey) -> &str {
        &self.options[key.index()]
    }

    /// Text of the correct option.
    pub fn correct_text(&self) -> &str {
        self.option(self.correct_answer)
    }

    /// `(key, text)` pairs in display order.
    pub fn keyed_options(&self) -> impl Iterator<Item = (AnswerKey, &str)> + '_ {
        AnswerKey::ALL.into_iter().map(move |k| (k, self.option(k)))
    }
}
