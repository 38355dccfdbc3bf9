// file: src/models/mod.rs

pub mod category;
pub mod inclusion;
pub mod settings;
pub mod task;
pub mod types;

// Re-export so callers can use `crate::models::TaskSettings` etc.
pub use category::{CategorySettings, SettingsCategory};
pub use inclusion::InclusionSet;
pub use settings::{
    CalibrationSettings, GeneralSettings, PhotoDiodeSettings, PracticeSettings, ValidationSettings,
};
pub use task::TaskSettings;
pub use types::{BoundsType, DelayType, PhotoDiodePosition, RewardType};
