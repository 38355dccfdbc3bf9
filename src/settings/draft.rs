//! Draft staging
//!
//! The draft is seeded from the saved snapshot and every edit produces a new
//! draft with exactly one category replaced. Values are stored as given;
//! range checks live in `settings::input`.

use log::debug;

use super::snapshot::{DraftSnapshot, SettingsSnapshot};
use crate::models::CategorySettings;

pub struct DraftManager;

impl DraftManager {
    /// Seeds a draft by value. Nothing is shared with `saved`, so edits to the
    /// draft can never show up through the baseline or the other way round.
    pub fn initialize(saved: &SettingsSnapshot) -> DraftSnapshot {
        DraftSnapshot::seeded_from(saved)
    }

    /// Returns `draft` with the category of `value` replaced. Every other
    /// category keeps the same value it had in `draft`.
    pub fn set_category(draft: &DraftSnapshot, value: impl Into<CategorySettings>) -> DraftSnapshot {
        let value = value.into();
        debug!("Staging edit for {}", value.category());
        draft.replaced(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        GeneralSettings, PhotoDiodePosition, PhotoDiodeSettings, SettingsCategory, TaskSettings,
    };

    #[test]
    fn test_initialize_does_not_share_values() {
        let saved = SettingsSnapshot::default();
        let draft = DraftManager::initialize(&saved);
        assert!(!draft.shares_any_with(&saved));
        assert_eq!(draft.task(), saved.task());
    }

    #[test]
    fn test_set_category_replaces_only_one_category() {
        let draft = DraftManager::initialize(&SettingsSnapshot::default());
        let edited = DraftManager::set_category(
            &draft,
            PhotoDiodeSettings {
                position: PhotoDiodePosition::TopLeft,
                size_px: 80,
            },
        );

        assert_eq!(edited.photo_diode().position, PhotoDiodePosition::TopLeft);
        assert_eq!(draft.photo_diode().position, PhotoDiodePosition::Off);

        for category in SettingsCategory::ALL {
            if category != SettingsCategory::PhotoDiode {
                assert!(edited.shares_value_with(&draft, category), "{} moved", category);
            }
        }
        assert!(!edited.shares_value_with(&draft, SettingsCategory::PhotoDiode));
    }

    #[test]
    fn test_set_category_stores_values_as_given() {
        let draft = DraftManager::initialize(&SettingsSnapshot::default());
        let edited = DraftManager::set_category(
            &draft,
            TaskSettings {
                random_skip_chance: 180,
                ..TaskSettings::default()
            },
        );
        assert_eq!(edited.task().random_skip_chance, 180);
    }

    #[test]
    fn test_saved_snapshot_unaffected_by_edits() {
        let saved = SettingsSnapshot::default();
        let draft = DraftManager::initialize(&saved);
        let _edited = DraftManager::set_category(
            &draft,
            GeneralSettings {
                data_directory: "/tmp/run".to_string(),
                ..GeneralSettings::default()
            },
        );
        assert_eq!(saved.general().data_directory, "data");
    }
}
