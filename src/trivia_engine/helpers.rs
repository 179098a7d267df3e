//! Shared builder functions used by every category generator.
//!
//! Each generator does the same final steps: shuffle the correct value in
//! among its distractors, format the four options, mint an id, and build the
//! [`Question`]. These helpers keep the topic files focused on choosing
//! values.

use rand::Rng;

use crate::trivia_engine::models::{AnswerKey, Category, Question};

/// Token the presentation layer replaces with an inline ability icon.
pub const ICON_PLACEHOLDER: &str = "{icon}";

/// Fisher-Yates shuffle in place.
pub fn shuffle<T, R: Rng>(rng: &mut R, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Mint a question id such as `"cooldown-5003-4-1A2B3C4D"`.
pub fn question_id<R: Rng>(category: Category, parts: &[u32], rng: &mut R) -> String {
    let mut id = category.tag().to_string();
    for part in parts {
        id.push('-');
        id.push_str(&part.to_string());
    }
    format!("{}-{:08X}", id, rng.next_u32())
}

/// Shuffle the correct value in among exactly three distractors and format
/// all four options.
///
/// Returns the options in display order plus the key of the correct one, or
/// `None` if the distractor count is wrong or the correct value went missing.
pub fn assemble_options<R: Rng>(
    rng: &mut R,
    correct: f64,
    distractors: &[f64],
    format: impl Fn(f64) -> String,
) -> Option<([String; 4], AnswerKey)> {
    let [d1, d2, d3] = distractors else {
        return None;
    };
    let mut values = [correct, *d1, *d2, *d3];
    shuffle(rng, &mut values);

    let correct_index = values.iter().position(|&v| v == correct)?;
    let key = AnswerKey::from_index(correct_index)?;
    Some((values.map(format), key))
}

/// Assemble the final [`Question`].
#[allow(clippy::too_many_arguments)]
pub fn question(
    id: String, category: Category, prompt: String,
    options: [String; 4], correct_answer: AnswerKey,
    hero_id: Option<u32>, ability_id: Option<u32>, item_id: Option<u32>,
) -> Question {
    Question {
        id,
        prompt,
        options,
        correct_answer,
        category,
        hero_id,
        ability_id,
        item_id,
    }
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

/// Integral values print without a decimal point (`12`, `2.5`).
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// `2250` → `"2,250"`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Turn an internal ability name into a display name.
///
/// The hero-name prefix is stripped when present, then each underscore
/// separated word is title-cased:
/// `("crystal_maiden_frostbite", "Crystal Maiden")` → `"Frostbite"`.
pub fn format_ability_name(internal_name: &str, hero_name: Option<&str>) -> String {
    let mut name = internal_name;

    if let Some(hero) = hero_name {
        let prefix = format!("{}_", normalize_name(hero));
        if name.to_lowercase().starts_with(&prefix) {
            name = &name[prefix.len()..];
        }
    }

    name.split('_')
        .filter(|w| !w.is_empty())
        .map(title_case)
        .collect::<Vec<_>>()
        .join(" ")
}

fn normalize_name(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .replace('-', "_")
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn shuffle_keeps_every_element() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut values = [1, 2, 3, 4, 5, 6, 7, 8];
        shuffle(&mut rng, &mut values);
        let mut sorted = values;
        sorted.sort();
        assert_eq!(sorted, [1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn assemble_places_correct_value_under_returned_key() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let (options, key) =
                assemble_options(&mut rng, 12.0, &[8.0, 15.0, 20.0], |v| format!("{} seconds", format_number(v)))
                    .unwrap();
            assert_eq!(options[key.index()], "12 seconds");
        }
    }

    #[test]
    fn assemble_requires_exactly_three_distractors() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(assemble_options(&mut rng, 1.0, &[2.0, 3.0], format_number).is_none());
        assert!(assemble_options(&mut rng, 1.0, &[2.0, 3.0, 4.0, 5.0], format_number).is_none());
    }

    #[test]
    fn question_id_has_tag_parts_and_hex_suffix() {
        let mut rng = StdRng::seed_from_u64(5);
        let id = question_id(Category::Cooldown, &[5003, 4], &mut rng);
        assert!(id.starts_with("cooldown-5003-4-"), "{id}");
        assert_eq!(id.len(), "cooldown-5003-4-".len() + 8);
    }

    #[test]
    fn formats_numbers() {
        assert_eq!(format_number(12.0), "12");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(2250), "2,250");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn ability_names_drop_hero_prefix() {
        assert_eq!(format_ability_name("crystal_maiden_frostbite", Some("Crystal Maiden")), "Frostbite");
        assert_eq!(format_ability_name("queenofpain_sonic_wave", Some("Queen of Pain")), "Queenofpain Sonic Wave");
        assert_eq!(format_ability_name("ringmaster_spotlight", None), "Ringmaster Spotlight");
        assert_eq!(format_ability_name("pudge_meat_hook", Some("Pudge")), "Meat Hook");
    }
}
