use super::snapshot::{DraftSnapshot, SettingsSnapshot};
use crate::models::SettingsCategory;

/// Compares the draft against the saved baseline. Pure; safe to call on every edit.
pub struct DirtyDetector;

impl DirtyDetector {
    /// True iff at least one category differs from its saved value.
    pub fn is_dirty(saved: &SettingsSnapshot, draft: &DraftSnapshot) -> bool {
        SettingsCategory::ALL
            .into_iter()
            .any(|category| !saved.category_eq(draft, category))
    }

    /// Categories whose draft differs from the saved value, in commit order
    pub fn dirty_categories(saved: &SettingsSnapshot, draft: &DraftSnapshot) -> Vec<SettingsCategory> {
        SettingsCategory::ALL
            .into_iter()
            .filter(|category| !saved.category_eq(draft, *category))
            .collect()
    }
}
