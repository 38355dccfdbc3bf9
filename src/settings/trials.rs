//! Trial count derivation
//!
//! ```text
//! trials_per_block     = |bounds| * |rewards| * permutation_repetitions
//! trials_across_blocks = trials_per_block * |delays| * block_repetitions
//! ```
//!
//! Empty inclusion sets and zero repetitions give zero; that is a valid
//! configuration, not an error. Counts are recomputed from the current task
//! value every time and never stored.

use serde::Serialize;

use crate::models::TaskSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrialCounts {
    pub trials_per_block: u64,
    pub trials_across_blocks: u64,
}

pub struct TrialCombinatoricsEngine;

impl TrialCombinatoricsEngine {
    pub fn trials_per_block(task: &TaskSettings) -> u64 {
        (task.task_bounds_included.len() as u64)
            .saturating_mul(task.task_rewards_included.len() as u64)
            .saturating_mul(u64::from(task.task_permutation_repetitions))
    }

    pub fn trials_across_blocks(task: &TaskSettings) -> u64 {
        Self::trials_per_block(task)
            .saturating_mul(task.task_blocks_included.len() as u64)
            .saturating_mul(u64::from(task.task_block_repetitions))
    }

    pub fn derive(task: &TaskSettings) -> TrialCounts {
        TrialCounts {
            trials_per_block: Self::trials_per_block(task),
            trials_across_blocks: Self::trials_across_blocks(task),
        }
    }
}
