// file: src/models/task.rs
use serde::{Deserialize, Deserializer, Serialize};

use super::inclusion::InclusionSet;
use super::types::{BoundsType, DelayType, RewardType};

pub const MAX_SKIP_CHANCE: u8 = 100;

/// Main task settings. The inclusion sets and repetition counts together
/// determine how many trials a run contains (see `settings::trials`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSettings {
    pub task_blocks_included: InclusionSet<DelayType>,
    pub task_rewards_included: InclusionSet<RewardType>,
    pub task_bounds_included: InclusionSet<BoundsType>,
    /// Repeats of each bounds/reward permutation within one trial block
    pub task_permutation_repetitions: u32,
    /// Repeats of a full trial block per included delay
    pub task_block_repetitions: u32,
    /// Percentage chance (0-100) that an accepted trial is skipped
    #[serde(deserialize_with = "deserialize_skip_chance")]
    pub random_skip_chance: u8,
}

impl Default for TaskSettings {
    fn default() -> Self {
        Self {
            task_blocks_included: DelayType::ALL.into_iter().collect(),
            task_rewards_included: RewardType::ALL.into_iter().collect(),
            task_bounds_included: BoundsType::ALL.into_iter().collect(),
            task_permutation_repetitions: 1,
            task_block_repetitions: 1,
            random_skip_chance: 0,
        }
    }
}

impl TaskSettings {
    /// Copy with `random_skip_chance` clamped into 0..=100.
    pub fn normalized(&self) -> Self {
        Self {
            random_skip_chance: self.random_skip_chance.min(MAX_SKIP_CHANCE),
            ..self.clone()
        }
    }
}

/// Accepts any JSON number and clamps it into 0..=100, so a stored value
/// outside the range never costs the rest of the task settings.
fn deserialize_skip_chance<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Number {
        Int(i64),
        Float(f64),
    }

    let value = match Number::deserialize(deserializer)? {
        Number::Int(v) => v,
        Number::Float(v) => v as i64,
    };
    Ok(value.clamp(0, i64::from(MAX_SKIP_CHANCE)) as u8)
}
