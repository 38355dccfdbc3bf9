// file: src/models/category.rs
use serde::{Deserialize, Serialize};

use super::settings::{
    CalibrationSettings, GeneralSettings, PhotoDiodeSettings, PracticeSettings, ValidationSettings,
};
use super::task::TaskSettings;
use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SettingsCategory {
    General,
    Practice,
    Calibration,
    Validation,
    Task,
    PhotoDiode,
}

impl SettingsCategory {
    /// All categories, in the order they are committed to the store.
    pub const ALL: [SettingsCategory; 6] = [
        SettingsCategory::General,
        SettingsCategory::Practice,
        SettingsCategory::Calibration,
        SettingsCategory::Validation,
        SettingsCategory::Task,
        SettingsCategory::PhotoDiode,
    ];

    /// Key under which the category is persisted
    pub fn key(&self) -> &'static str {
        match self {
            SettingsCategory::General => "generalSettings",
            SettingsCategory::Practice => "practiceSettings",
            SettingsCategory::Calibration => "calibrationSettings",
            SettingsCategory::Validation => "validationSettings",
            SettingsCategory::Task => "taskSettings",
            SettingsCategory::PhotoDiode => "photoDiodeSettings",
        }
    }

    pub fn from_key(key: &str) -> Result<Self, String> {
        SettingsCategory::ALL
            .into_iter()
            .find(|category| category.key() == key)
            .ok_or_else(|| format!("Unknown settings category: {}", key))
    }
}

impl std::fmt::Display for SettingsCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// A value for exactly one category. The variant carries the category, so an
/// edit can never land in the wrong slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CategorySettings {
    General(GeneralSettings),
    Practice(PracticeSettings),
    Calibration(CalibrationSettings),
    Validation(ValidationSettings),
    Task(TaskSettings),
    PhotoDiode(PhotoDiodeSettings),
}

impl CategorySettings {
    pub fn category(&self) -> SettingsCategory {
        match self {
            CategorySettings::General(_) => SettingsCategory::General,
            CategorySettings::Practice(_) => SettingsCategory::Practice,
            CategorySettings::Calibration(_) => SettingsCategory::Calibration,
            CategorySettings::Validation(_) => SettingsCategory::Validation,
            CategorySettings::Task(_) => SettingsCategory::Task,
            CategorySettings::PhotoDiode(_) => SettingsCategory::PhotoDiode,
        }
    }

    pub fn default_for(category: SettingsCategory) -> Self {
        match category {
            SettingsCategory::General => CategorySettings::General(GeneralSettings::default()),
            SettingsCategory::Practice => CategorySettings::Practice(PracticeSettings::default()),
            SettingsCategory::Calibration => {
                CategorySettings::Calibration(CalibrationSettings::default())
            }
            SettingsCategory::Validation => {
                CategorySettings::Validation(ValidationSettings::default())
            }
            SettingsCategory::Task => CategorySettings::Task(TaskSettings::default()),
            SettingsCategory::PhotoDiode => {
                CategorySettings::PhotoDiode(PhotoDiodeSettings::default())
            }
        }
    }

    /// Decodes a stored value. The category decides the shape, since the
    /// JSON itself is untagged.
    pub fn from_json(category: SettingsCategory, raw: &str) -> AppResult<Self> {
        let value = match category {
            SettingsCategory::General => CategorySettings::General(serde_json::from_str(raw)?),
            SettingsCategory::Practice => CategorySettings::Practice(serde_json::from_str(raw)?),
            SettingsCategory::Calibration => {
                CategorySettings::Calibration(serde_json::from_str(raw)?)
            }
            SettingsCategory::Validation => {
                CategorySettings::Validation(serde_json::from_str(raw)?)
            }
            SettingsCategory::Task => CategorySettings::Task(serde_json::from_str(raw)?),
            SettingsCategory::PhotoDiode => {
                CategorySettings::PhotoDiode(serde_json::from_str(raw)?)
            }
        };
        Ok(value)
    }

    pub fn to_json(&self) -> AppResult<String> {
        serde_json::to_string(self).map_err(AppError::from)
    }
}

impl From<GeneralSettings> for CategorySettings {
    fn from(value: GeneralSettings) -> Self {
        CategorySettings::General(value)
    }
}

impl From<PracticeSettings> for CategorySettings {
    fn from(value: PracticeSettings) -> Self {
        CategorySettings::Practice(value)
    }
}

impl From<CalibrationSettings> for CategorySettings {
    fn from(value: CalibrationSettings) -> Self {
        CategorySettings::Calibration(value)
    }
}

impl From<ValidationSettings> for CategorySettings {
    fn from(value: ValidationSettings) -> Self {
        CategorySettings::Validation(value)
    }
}

impl From<TaskSettings> for CategorySettings {
    fn from(value: TaskSettings) -> Self {
        CategorySettings::Task(value)
    }
}

impl From<PhotoDiodeSettings> for CategorySettings {
    fn from(value: PhotoDiodeSettings) -> Self {
        CategorySettings::PhotoDiode(value)
    }
}
