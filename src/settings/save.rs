//! Committing drafts to the settings store
//!
//! Every commit writes all six categories in `SettingsCategory::ALL` order,
//! changed or not. How a failed write is handled depends on [`CommitMode`].

use std::str::FromStr;

use log::{error, info};

use super::snapshot::{DraftSnapshot, SettingsSnapshot};
use crate::database::SettingsStore;
use crate::error::AppResult;
use crate::models::{CategorySettings, SettingsCategory};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommitMode {
    /// One all-or-nothing batch. The baseline only moves if every category was written.
    #[default]
    Atomic,
    /// Independent writes per category. The baseline moves for the categories
    /// that were written and the rest are reported as failed.
    BestEffort,
}

impl FromStr for CommitMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "atomic" => Ok(CommitMode::Atomic),
            "best_effort" | "best-effort" => Ok(CommitMode::BestEffort),
            other => Err(format!("unknown commit mode '{}'", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CommitReport {
    /// Baseline to compare future drafts against
    pub baseline: SettingsSnapshot,
    pub written: Vec<SettingsCategory>,
    pub failed: Vec<SettingsCategory>,
}

impl CommitReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SaveCoordinator {
    mode: CommitMode,
}

impl SaveCoordinator {
    pub fn new(mode: CommitMode) -> Self {
        Self { mode }
    }

    /// Writes every category of `draft` to `store`.
    ///
    /// In atomic mode a store failure is returned as-is and `saved` stays the
    /// baseline. In best-effort mode the call itself succeeds and the report
    /// lists which categories made it.
    pub async fn commit<S: SettingsStore>(
        &self,
        store: &S,
        saved: &SettingsSnapshot,
        draft: &DraftSnapshot,
    ) -> AppResult<CommitReport> {
        let values: Vec<CategorySettings> = SettingsCategory::ALL
            .into_iter()
            .map(|category| draft.get(category))
            .collect();

        match self.mode {
            CommitMode::Atomic => {
                store.write_all(&values).await?;
                info!("Committed {} settings categories", values.len());
                Ok(CommitReport {
                    baseline: SettingsSnapshot::from_draft(draft),
                    written: SettingsCategory::ALL.to_vec(),
                    failed: Vec::new(),
                })
            }
            CommitMode::BestEffort => {
                let mut written = Vec::new();
                let mut failed = Vec::new();
                for value in &values {
                    match store.write(value).await {
                        Ok(()) => written.push(value.category()),
                        Err(e) => {
                            error!("Failed to write {}: {}", value.category(), e);
                            failed.push(value.category());
                            // Keep going, the other categories are independent
                        }
                    }
                }
                Ok(CommitReport {
                    baseline: saved.advanced(draft, &written),
                    written,
                    failed,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::MemoryStore;
    use crate::models::{CalibrationSettings, TaskSettings};
    use crate::settings::dirty::DirtyDetector;
    use crate::settings::draft::DraftManager;

    #[tokio::test]
    async fn test_atomic_commit_writes_all_in_order() {
        let store = MemoryStore::new();
        let saved = SettingsSnapshot::default();
        let draft = DraftManager::set_category(
            &DraftManager::initialize(&saved),
            CalibrationSettings {
                repetitions: 8,
                ..CalibrationSettings::default()
            },
        );

        let report = SaveCoordinator::default()
            .commit(&store, &saved, &draft)
            .await
            .unwrap();

        assert!(report.is_complete());
        assert_eq!(store.write_log().unwrap(), SettingsCategory::ALL.to_vec());
        assert!(!DirtyDetector::is_dirty(&report.baseline, &draft));
        assert_eq!(report.baseline.calibration().repetitions, 8);
    }

    #[tokio::test]
    async fn test_best_effort_commit_on_healthy_store() {
        let store = MemoryStore::new();
        let saved = SettingsSnapshot::default();
        let draft = DraftManager::set_category(
            &DraftManager::initialize(&saved),
            TaskSettings {
                task_permutation_repetitions: 3,
                ..TaskSettings::default()
            },
        );

        let report = SaveCoordinator::new(CommitMode::BestEffort)
            .commit(&store, &saved, &draft)
            .await
            .unwrap();

        assert!(report.is_complete());
        assert_eq!(report.written.len(), 6);
        assert!(!DirtyDetector::is_dirty(&report.baseline, &draft));
    }

    #[test]
    fn test_commit_mode_from_str() {
        assert_eq!("atomic".parse::<CommitMode>().unwrap(), CommitMode::Atomic);
        assert_eq!("BEST_EFFORT".parse::<CommitMode>().unwrap(), CommitMode::BestEffort);
        assert!("sometimes".parse::<CommitMode>().is_err());
    }
}
