// file: src/models/settings.rs
use serde::{Deserialize, Serialize};

use super::types::PhotoDiodePosition;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralSettings {
    pub fullscreen: bool,
    pub show_progress: bool,
    pub data_directory: String, // where recorded sessions are written
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            fullscreen: true,
            show_progress: true,
            data_directory: "data".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PracticeSettings {
    pub skip_practice: bool,
    pub trials_per_level: u32,
    pub show_feedback: bool,
}

impl Default for PracticeSettings {
    fn default() -> Self {
        Self {
            skip_practice: false,
            trials_per_level: 2,
            show_feedback: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalibrationSettings {
    pub skip_calibration: bool,
    pub trial_duration_secs: u32,
    pub repetitions: u32,
}

impl Default for CalibrationSettings {
    fn default() -> Self {
        Self {
            skip_calibration: false,
            trial_duration_secs: 10,
            repetitions: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationSettings {
    pub skip_validation: bool,
    pub trials_per_level: u32,
    pub success_threshold_percent: u8, // 0 to 100
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self {
            skip_validation: false,
            trials_per_level: 3,
            success_threshold_percent: 50,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoDiodeSettings {
    pub position: PhotoDiodePosition,
    pub size_px: u32,
}

impl Default for PhotoDiodeSettings {
    fn default() -> Self {
        Self {
            position: PhotoDiodePosition::Off,
            size_px: 50,
        }
    }
}
