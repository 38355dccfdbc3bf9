//! Edit boundary for the task form
//!
//! Numeric fields arrive as text. Text that is not a number is always
//! refused and the draft stays as it was; out-of-range numbers are clamped or
//! refused depending on [`NumericInputPolicy`].

use std::str::FromStr;

use crate::error::{AppError, AppResult};
use crate::models::task::MAX_SKIP_CHANCE;
use crate::models::{BoundsType, DelayType, RewardType, TaskSettings};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumericInputPolicy {
    /// Pull out-of-range values to the nearest valid one
    #[default]
    Clamp,
    Reject,
}

impl FromStr for NumericInputPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "clamp" => Ok(NumericInputPolicy::Clamp),
            "reject" => Ok(NumericInputPolicy::Reject),
            other => Err(format!("unknown numeric input policy '{}'", other)),
        }
    }
}

/// One user interaction with the task form
#[derive(Debug, Clone, PartialEq)]
pub enum TaskEdit {
    ToggleBlock(DelayType, bool),
    ToggleReward(RewardType, bool),
    ToggleBounds(BoundsType, bool),
    PermutationRepetitions(String),
    BlockRepetitions(String),
    RandomSkipChance(String),
}

fn parse_number(field: &str, text: &str) -> AppResult<f64> {
    let trimmed = text.trim();
    // A cleared field means zero
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| AppError::invalid_input(format!("{}: '{}' is not a number", field, trimmed)))?;
    if !value.is_finite() {
        return Err(AppError::invalid_input(format!(
            "{}: '{}' is not a finite number",
            field, trimmed
        )));
    }
    Ok(value)
}

fn coerce_in_range(field: &str, value: f64, max: f64, policy: NumericInputPolicy) -> AppResult<f64> {
    let in_range = value >= 0.0 && value <= max && value.fract() == 0.0;
    if in_range {
        return Ok(value);
    }
    match policy {
        NumericInputPolicy::Clamp => Ok(value.trunc().clamp(0.0, max)),
        NumericInputPolicy::Reject => Err(AppError::invalid_input(format!(
            "{}: {} must be a whole number between 0 and {}",
            field, value, max
        ))),
    }
}

/// Parses a repetition count.
pub fn parse_count(field: &str, text: &str, policy: NumericInputPolicy) -> AppResult<u32> {
    let value = parse_number(field, text)?;
    let value = coerce_in_range(field, value, f64::from(u32::MAX), policy)?;
    Ok(value as u32)
}

/// Parses a whole-number percentage in 0..=100.
pub fn parse_percentage(field: &str, text: &str, policy: NumericInputPolicy) -> AppResult<u8> {
    let value = parse_number(field, text)?;
    let value = coerce_in_range(field, value, f64::from(MAX_SKIP_CHANCE), policy)?;
    Ok(value as u8)
}

/// Applies one form edit, returning the new task value. `task` is never modified.
pub fn apply_task_edit(
    task: &TaskSettings,
    edit: TaskEdit,
    policy: NumericInputPolicy,
) -> AppResult<TaskSettings> {
    let next = match edit {
        TaskEdit::ToggleBlock(delay, included) => TaskSettings {
            task_blocks_included: task.task_blocks_included.toggled(delay, included),
            ..task.clone()
        },
        TaskEdit::ToggleReward(reward, included) => TaskSettings {
            task_rewards_included: task.task_rewards_included.toggled(reward, included),
            ..task.clone()
        },
        TaskEdit::ToggleBounds(bounds, included) => TaskSettings {
            task_bounds_included: task.task_bounds_included.toggled(bounds, included),
            ..task.clone()
        },
        TaskEdit::PermutationRepetitions(text) => TaskSettings {
            task_permutation_repetitions: parse_count("taskPermutationRepetitions", &text, policy)?,
            ..task.clone()
        },
        TaskEdit::BlockRepetitions(text) => TaskSettings {
            task_block_repetitions: parse_count("taskBlockRepetitions", &text, policy)?,
            ..task.clone()
        },
        TaskEdit::RandomSkipChance(text) => TaskSettings {
            random_skip_chance: parse_percentage("randomSkipChance", &text, policy)?,
            ..task.clone()
        },
    };
    Ok(next)
}
