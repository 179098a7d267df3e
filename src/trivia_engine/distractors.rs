//! Layered distractor selection.
//!
//! Wrong answers are drawn from progressively less realistic sources, and a
//! layer only runs while fewer than three distractors have been found:
//!
//! 1. **Peer pools**: real values of sibling entities, in caller-supplied
//!    priority tiers. Round numbers (when the profile has them) join the first
//!    tier so real and canonical values compete on equal terms.
//! 2. **Proportional offsets**: `±ratio × correct`, "+" before "−".
//! 3. **Arithmetic fallback**: `correct ± (found + 1) × step`.
//!
//! Every pool is shuffled before it is consumed. Values equal to the correct
//! answer or to an already chosen distractor are skipped, and nothing at or
//! below zero is ever produced.

use rand::Rng;

use crate::trivia_engine::helpers::shuffle;

pub const DISTRACTOR_COUNT: usize = 3;

/// Familiar values for a stat, accepted only when far enough from the answer.
#[derive(Debug, Clone, Copy)]
pub struct RoundNumbers {
    pub values: &'static [f64],
    /// Candidates must differ from the correct value by strictly more.
    pub min_distance: f64,
}

impl RoundNumbers {
    /// Round numbers usable as distractors for `correct`.
    pub fn candidates(&self, correct: f64) -> Vec<f64> {
        self.values
            .iter()
            .copied()
            .filter(|&v| (v - correct).abs() > self.min_distance)
            .collect()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ProportionalOffset {
    pub ratio: f64,
    pub min_distance: f64,
}

/// Per-category tuning of the layered strategy.
#[derive(Debug, Clone, Copy)]
pub struct DistractorProfile {
    pub round_numbers: Option<RoundNumbers>,
    pub proportional: &'static [ProportionalOffset],
    pub fallback_step: f64,
}

pub const COOLDOWN_PROFILE: DistractorProfile = DistractorProfile {
    round_numbers: Some(RoundNumbers {
        values: &[5.0, 8.0, 10.0, 12.0, 15.0, 18.0, 20.0, 24.0, 30.0, 40.0, 60.0, 90.0, 120.0, 180.0],
        min_distance: 2.0,
    }),
    proportional: &[],
    fallback_step: 5.0,
};

pub const MANA_COST_PROFILE: DistractorProfile = DistractorProfile {
    round_numbers: Some(RoundNumbers {
        values: &[
            50.0, 75.0, 100.0, 110.0, 120.0, 125.0, 130.0, 140.0, 150.0, 175.0,
            200.0, 225.0, 250.0, 300.0, 400.0, 500.0, 600.0,
        ],
        min_distance: 10.0,
    }),
    proportional: &[],
    fallback_step: 25.0,
};

pub const ITEM_COST_PROFILE: DistractorProfile = DistractorProfile {
    round_numbers: None,
    proportional: &[
        ProportionalOffset { ratio: 0.2, min_distance: 10.0 },
        ProportionalOffset { ratio: 0.5, min_distance: 50.0 },
    ],
    fallback_step: 500.0,
};

/// Tracks chosen distractors and rejects repeats of them or the answer.
struct Picker {
    correct: f64,
    chosen: Vec<f64>,
}

impl Picker {
    fn is_full(&self) -> bool {
        self.chosen.len() >= DISTRACTOR_COUNT
    }

    fn is_used(&self, value: f64) -> bool {
        value == self.correct || self.chosen.contains(&value)
    }

    fn take(&mut self, value: f64) -> bool {
        if self.is_full() || value <= 0.0 || !value.is_finite() || self.is_used(value) {
            return false;
        }
        self.chosen.push(value);
        true
    }

    /// Try `correct + offset`, then `max(1, correct - offset)`, each only if
    /// it lands more than `min_distance` away.
    fn take_offset(&mut self, offset: f64, min_distance: f64) -> bool {
        let high = self.correct + offset;
        let low = (self.correct - offset).max(1.0);
        for candidate in [high, low] {
            if (candidate - self.correct).abs() > min_distance && self.take(candidate) {
                return true;
            }
        }
        false
    }
}

/// Pick exactly three distractors for `correct`, or `None` if the layers run
/// dry.
pub fn pick_distractors<R: Rng>(
    rng: &mut R,
    correct: f64,
    mut peer_tiers: Vec<Vec<f64>>,
    profile: &DistractorProfile,
) -> Option<Vec<f64>> {
    let mut picker = Picker { correct, chosen: Vec::with_capacity(DISTRACTOR_COUNT) };

    if let Some(round) = profile.round_numbers {
        let canonical = round.candidates(correct);
        match peer_tiers.first_mut() {
            Some(first) => first.extend(canonical),
            None => peer_tiers.push(canonical),
        }
    }

    for mut pool in peer_tiers {
        if picker.is_full() {
            break;
        }
        shuffle(rng, &mut pool);
        for value in pool {
            picker.take(value);
        }
    }

    for step in profile.proportional {
        if picker.is_full() {
            break;
        }
        let offset = (correct * step.ratio).round();
        picker.take_offset(offset, step.min_distance);
    }

    while !picker.is_full() {
        let offset = (picker.chosen.len() + 1) as f64 * profile.fallback_step;
        if !picker.take_offset(offset, 0.0) {
            break;
        }
    }

    if picker.chosen.len() == DISTRACTOR_COUNT {
        Some(picker.chosen)
    } else {
        None
    }
}
