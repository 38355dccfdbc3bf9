// file: src/models/types.rs
use serde::{Deserialize, Serialize};

/// Delay condition of a trial block. Each included delay adds at least one block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DelayType {
    Sync,
    NarrowAsync,
    WideAsync,
}

impl DelayType {
    pub const ALL: [DelayType; 3] = [DelayType::Sync, DelayType::NarrowAsync, DelayType::WideAsync];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RewardType {
    Low,
    Middle,
    High,
}

impl RewardType {
    pub const ALL: [RewardType; 3] = [RewardType::Low, RewardType::Middle, RewardType::High];
}

/// Effort level of a trial
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BoundsType {
    Easy,
    Medium,
    Hard,
}

impl BoundsType {
    pub const ALL: [BoundsType; 3] = [BoundsType::Easy, BoundsType::Medium, BoundsType::Hard];
}

/// Screen corner where the photodiode patch is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PhotoDiodePosition {
    #[default]
    Off,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}
