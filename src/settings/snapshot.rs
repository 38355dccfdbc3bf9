//! Per-category settings maps
//!
//! Both the saved baseline and the editing draft hold one value per category.
//! Values sit behind `Arc` and are never mutated in place: an edit swaps the
//! slot for a new value, so untouched categories keep the exact same allocation.

use std::sync::Arc;

use crate::models::{
    CalibrationSettings, CategorySettings, GeneralSettings, PhotoDiodeSettings, PracticeSettings,
    SettingsCategory, TaskSettings, ValidationSettings,
};

#[derive(Debug, Clone, PartialEq, Default)]
struct CategoryMap {
    general: Arc<GeneralSettings>,
    practice: Arc<PracticeSettings>,
    calibration: Arc<CalibrationSettings>,
    validation: Arc<ValidationSettings>,
    task: Arc<TaskSettings>,
    photo_diode: Arc<PhotoDiodeSettings>,
}

impl CategoryMap {
    fn get(&self, category: SettingsCategory) -> CategorySettings {
        match category {
            SettingsCategory::General => CategorySettings::General((*self.general).clone()),
            SettingsCategory::Practice => CategorySettings::Practice((*self.practice).clone()),
            SettingsCategory::Calibration => {
                CategorySettings::Calibration((*self.calibration).clone())
            }
            SettingsCategory::Validation => {
                CategorySettings::Validation((*self.validation).clone())
            }
            SettingsCategory::Task => CategorySettings::Task((*self.task).clone()),
            SettingsCategory::PhotoDiode => {
                CategorySettings::PhotoDiode((*self.photo_diode).clone())
            }
        }
    }

    fn with(&self, value: CategorySettings) -> Self {
        let mut next = self.clone();
        match value {
            CategorySettings::General(v) => next.general = Arc::new(v),
            CategorySettings::Practice(v) => next.practice = Arc::new(v),
            CategorySettings::Calibration(v) => next.calibration = Arc::new(v),
            CategorySettings::Validation(v) => next.validation = Arc::new(v),
            CategorySettings::Task(v) => next.task = Arc::new(v),
            CategorySettings::PhotoDiode(v) => next.photo_diode = Arc::new(v),
        }
        next
    }

    /// Copies every value into fresh allocations
    fn deep_copy(&self) -> Self {
        Self {
            general: Arc::new((*self.general).clone()),
            practice: Arc::new((*self.practice).clone()),
            calibration: Arc::new((*self.calibration).clone()),
            validation: Arc::new((*self.validation).clone()),
            task: Arc::new((*self.task).clone()),
            photo_diode: Arc::new((*self.photo_diode).clone()),
        }
    }

    fn category_eq(&self, other: &CategoryMap, category: SettingsCategory) -> bool {
        match category {
            SettingsCategory::General => self.general == other.general,
            SettingsCategory::Practice => self.practice == other.practice,
            SettingsCategory::Calibration => self.calibration == other.calibration,
            SettingsCategory::Validation => self.validation == other.validation,
            SettingsCategory::Task => self.task == other.task,
            SettingsCategory::PhotoDiode => self.photo_diode == other.photo_diode,
        }
    }

    fn same_allocation(&self, other: &CategoryMap, category: SettingsCategory) -> bool {
        match category {
            SettingsCategory::General => Arc::ptr_eq(&self.general, &other.general),
            SettingsCategory::Practice => Arc::ptr_eq(&self.practice, &other.practice),
            SettingsCategory::Calibration => Arc::ptr_eq(&self.calibration, &other.calibration),
            SettingsCategory::Validation => Arc::ptr_eq(&self.validation, &other.validation),
            SettingsCategory::Task => Arc::ptr_eq(&self.task, &other.task),
            SettingsCategory::PhotoDiode => Arc::ptr_eq(&self.photo_diode, &other.photo_diode),
        }
    }
}

/// Last successfully saved settings. Read-only once built.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SettingsSnapshot {
    values: CategoryMap,
}

impl SettingsSnapshot {
    /// Builds a snapshot from one value per category; categories missing
    /// from `values` keep their defaults, later duplicates win.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = CategorySettings>,
    {
        let values = values
            .into_iter()
            .fold(CategoryMap::default(), |map, value| map.with(value));
        Self { values }
    }

    pub fn get(&self, category: SettingsCategory) -> CategorySettings {
        self.values.get(category)
    }

    pub fn general(&self) -> &GeneralSettings {
        &self.values.general
    }

    pub fn practice(&self) -> &PracticeSettings {
        &self.values.practice
    }

    pub fn calibration(&self) -> &CalibrationSettings {
        &self.values.calibration
    }

    pub fn validation(&self) -> &ValidationSettings {
        &self.values.validation
    }

    pub fn task(&self) -> &TaskSettings {
        &self.values.task
    }

    pub fn photo_diode(&self) -> &PhotoDiodeSettings {
        &self.values.photo_diode
    }

    pub(crate) fn category_eq(&self, draft: &DraftSnapshot, category: SettingsCategory) -> bool {
        self.values.category_eq(&draft.values, category)
    }

    /// Baseline equal to `draft`, sharing no allocations with it
    pub(crate) fn from_draft(draft: &DraftSnapshot) -> Self {
        Self {
            values: draft.values.deep_copy(),
        }
    }

    /// Baseline with only `categories` taken from `draft`
    pub(crate) fn advanced(&self, draft: &DraftSnapshot, categories: &[SettingsCategory]) -> Self {
        let values = categories.iter().fold(self.values.clone(), |map, category| {
            map.with(draft.values.get(*category))
        });
        Self { values }
    }
}

/// Staged values for the current editing session
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DraftSnapshot {
    values: CategoryMap,
}

impl DraftSnapshot {
    pub(crate) fn seeded_from(saved: &SettingsSnapshot) -> Self {
        Self {
            values: saved.values.deep_copy(),
        }
    }

    pub(crate) fn replaced(&self, value: CategorySettings) -> Self {
        Self {
            values: self.values.with(value),
        }
    }

    pub fn get(&self, category: SettingsCategory) -> CategorySettings {
        self.values.get(category)
    }

    pub fn general(&self) -> &GeneralSettings {
        &self.values.general
    }

    pub fn practice(&self) -> &PracticeSettings {
        &self.values.practice
    }

    pub fn calibration(&self) -> &CalibrationSettings {
        &self.values.calibration
    }

    pub fn validation(&self) -> &ValidationSettings {
        &self.values.validation
    }

    pub fn task(&self) -> &TaskSettings {
        &self.values.task
    }

    pub fn photo_diode(&self) -> &PhotoDiodeSettings {
        &self.values.photo_diode
    }

    /// True when `category` still points at the same value as in `other`
    pub fn shares_value_with(&self, other: &DraftSnapshot, category: SettingsCategory) -> bool {
        self.values.same_allocation(&other.values, category)
    }

    /// True when any category points at the same value as the saved snapshot
    #[cfg(test)]
    pub(crate) fn shares_any_with(&self, saved: &SettingsSnapshot) -> bool {
        SettingsCategory::ALL
            .into_iter()
            .any(|category| self.values.same_allocation(&saved.values, category))
    }
}
