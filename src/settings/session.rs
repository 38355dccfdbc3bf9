//! Editing session
//!
//! One session per open settings view. It owns the saved baseline and the
//! draft, routes edits into the draft, gates saving on the dirty check and
//! advances the baseline after a commit.

use log::{debug, info, warn};
use uuid::Uuid;

use super::dirty::DirtyDetector;
use super::draft::DraftManager;
use super::input::{apply_task_edit, NumericInputPolicy, TaskEdit};
use super::save::{CommitMode, SaveCoordinator};
use super::snapshot::{DraftSnapshot, SettingsSnapshot};
use super::trials::{TrialCombinatoricsEngine, TrialCounts};
use crate::config::AppConfig;
use crate::database::SettingsStore;
use crate::error::{AppError, AppResult};
use crate::models::{CategorySettings, SettingsCategory};
use crate::utils::logging::log_commit;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionOptions {
    pub commit_mode: CommitMode,
    pub numeric_input: NumericInputPolicy,
}

impl From<&AppConfig> for SessionOptions {
    fn from(config: &AppConfig) -> Self {
        Self {
            commit_mode: config.commit_mode,
            numeric_input: config.numeric_input,
        }
    }
}

/// Reads every category once. Missing categories start from their defaults,
/// and so do stored values that no longer decode.
pub async fn load_snapshot<S: SettingsStore>(store: &S) -> AppResult<SettingsSnapshot> {
    let mut values = Vec::with_capacity(SettingsCategory::ALL.len());
    for category in SettingsCategory::ALL {
        let value = match store.read(category).await {
            Ok(Some(CategorySettings::Task(task))) => CategorySettings::Task(task.normalized()),
            Ok(Some(value)) => value,
            Ok(None) => {
                debug!("No stored value for {}, using defaults", category);
                CategorySettings::default_for(category)
            }
            Err(AppError::Serialization(e)) => {
                warn!("Stored {} could not be decoded ({}), using defaults", category, e);
                CategorySettings::default_for(category)
            }
            Err(e) => return Err(e),
        };
        values.push(value);
    }
    Ok(SettingsSnapshot::from_values(values))
}

pub struct EditingSession<S: SettingsStore> {
    id: Uuid,
    store: S,
    saved: SettingsSnapshot,
    draft: DraftSnapshot,
    coordinator: SaveCoordinator,
    numeric_input: NumericInputPolicy,
}

impl<S: SettingsStore> EditingSession<S> {
    pub async fn open(store: S, options: SessionOptions) -> AppResult<Self> {
        let saved = load_snapshot(&store).await?;
        let session = Self::with_snapshot(store, saved, options);
        info!("Opened settings session {}", session.id);
        Ok(session)
    }

    /// Starts a session from an already loaded baseline
    pub fn with_snapshot(store: S, saved: SettingsSnapshot, options: SessionOptions) -> Self {
        let draft = DraftManager::initialize(&saved);
        Self {
            id: Uuid::new_v4(),
            store,
            saved,
            draft,
            coordinator: SaveCoordinator::new(options.commit_mode),
            numeric_input: options.numeric_input,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn saved(&self) -> &SettingsSnapshot {
        &self.saved
    }

    pub fn draft(&self) -> &DraftSnapshot {
        &self.draft
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Stages a new value for the category it belongs to.
    pub fn on_edit(&mut self, value: impl Into<CategorySettings>) {
        self.draft = DraftManager::set_category(&self.draft, value);
    }

    /// Applies one task form interaction. On error the draft is unchanged.
    pub fn edit_task(&mut self, edit: TaskEdit) -> AppResult<()> {
        let next = apply_task_edit(self.draft.task(), edit, self.numeric_input)?;
        self.on_edit(next);
        Ok(())
    }

    pub fn is_save_enabled(&self) -> bool {
        DirtyDetector::is_dirty(&self.saved, &self.draft)
    }

    pub fn dirty_categories(&self) -> Vec<SettingsCategory> {
        DirtyDetector::dirty_categories(&self.saved, &self.draft)
    }

    pub fn derived_trial_counts(&self) -> TrialCounts {
        TrialCombinatoricsEngine::derive(self.draft.task())
    }

    /// Throws away staged edits
    pub fn discard_changes(&mut self) {
        self.draft = DraftManager::initialize(&self.saved);
    }

    /// Commits the draft and makes it the new baseline.
    ///
    /// Does nothing when there is nothing to save. Taking `&mut self` means a
    /// second save cannot start while this one is running.
    pub async fn save(&mut self) -> AppResult<()> {
        if !self.is_save_enabled() {
            debug!("Session {}: nothing to save", self.id);
            return Ok(());
        }

        let report = self
            .coordinator
            .commit(&self.store, &self.saved, &self.draft)
            .await?;

        log_commit(&self.id.to_string(), &report.written, &report.failed);
        let complete = report.is_complete();
        self.saved = report.baseline;

        if complete {
            Ok(())
        } else {
            Err(AppError::CommitFailed {
                failed: report.failed,
            })
        }
    }
}
