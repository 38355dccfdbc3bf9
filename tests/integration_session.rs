use std::collections::HashSet;

use experiment_settings::{
    AppError, AppResult, BoundsType, CalibrationSettings, CategorySettings, CommitMode,
    DirtyDetector, DraftManager, EditingSession, GeneralSettings, MemoryStore, SaveCoordinator,
    SessionOptions, SettingsCategory, SettingsSnapshot, SettingsStore, TaskEdit, TaskSettings,
};

/// Store whose writes fail for selected categories
struct FlakyStore {
    inner: MemoryStore,
    failing: HashSet<SettingsCategory>,
}

impl FlakyStore {
    fn failing_on(categories: &[SettingsCategory]) -> Self {
        Self {
            inner: MemoryStore::new(),
            failing: categories.iter().copied().collect(),
        }
    }
}

impl SettingsStore for FlakyStore {
    async fn read(&self, category: SettingsCategory) -> AppResult<Option<CategorySettings>> {
        self.inner.read(category).await
    }

    async fn write(&self, value: &CategorySettings) -> AppResult<()> {
        if self.failing.contains(&value.category()) {
            return Err(AppError::not_found(format!("{} is read-only", value.category())));
        }
        self.inner.write(value).await
    }

    async fn write_all(&self, values: &[CategorySettings]) -> AppResult<()> {
        if values.iter().any(|value| self.failing.contains(&value.category())) {
            return Err(AppError::not_found("batch rejected"));
        }
        self.inner.write_all(values).await
    }
}

fn options(commit_mode: CommitMode) -> SessionOptions {
    SessionOptions {
        commit_mode,
        ..SessionOptions::default()
    }
}

#[tokio::test]
async fn test_save_gating_lifecycle() {
    let mut session = EditingSession::open(MemoryStore::new(), SessionOptions::default())
        .await
        .unwrap();
    assert!(!session.is_save_enabled());

    session
        .edit_task(TaskEdit::ToggleBounds(BoundsType::Hard, false))
        .unwrap();
    assert!(session.is_save_enabled());

    session.save().await.unwrap();
    assert!(!session.is_save_enabled());
}

#[tokio::test]
async fn test_commit_baseline_equals_draft() {
    let store = MemoryStore::new();
    let saved = SettingsSnapshot::default();
    let draft = DraftManager::set_category(
        &DraftManager::initialize(&saved),
        GeneralSettings {
            fullscreen: false,
            show_progress: false,
            data_directory: "/srv/experiment".to_string(),
        },
    );
    let draft = DraftManager::set_category(
        &draft,
        TaskSettings {
            task_permutation_repetitions: 5,
            ..TaskSettings::default()
        },
    );

    let report = SaveCoordinator::new(CommitMode::Atomic)
        .commit(&store, &saved, &draft)
        .await
        .unwrap();

    assert!(!DirtyDetector::is_dirty(&report.baseline, &draft));
    for category in SettingsCategory::ALL {
        assert_eq!(report.baseline.get(category), draft.get(category));
    }
}

#[test]
fn test_task_edit_does_not_dirty_other_categories() {
    let saved = SettingsSnapshot::default();
    let draft = DraftManager::initialize(&saved);
    let edited = DraftManager::set_category(
        &draft,
        TaskSettings {
            task_block_repetitions: 12,
            ..saved.task().clone()
        },
    );

    let dirty = DirtyDetector::dirty_categories(&saved, &edited);
    assert_eq!(dirty, vec![SettingsCategory::Task]);
}

#[tokio::test]
async fn test_atomic_failure_keeps_baseline() {
    let store = FlakyStore::failing_on(&[SettingsCategory::Task]);
    let mut session = EditingSession::open(store, options(CommitMode::Atomic))
        .await
        .unwrap();
    session.on_edit(CalibrationSettings {
        skip_calibration: true,
        ..CalibrationSettings::default()
    });
    session
        .edit_task(TaskEdit::PermutationRepetitions("4".to_string()))
        .unwrap();

    let result = session.save().await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    // Nothing was written and both edits are still pending
    assert!(session.store().inner.write_log().unwrap().is_empty());
    assert!(session.is_save_enabled());
    assert_eq!(
        session.dirty_categories(),
        vec![SettingsCategory::Calibration, SettingsCategory::Task]
    );
    assert!(!session.saved().calibration().skip_calibration);
}

#[tokio::test]
async fn test_best_effort_failure_advances_written_categories() {
    let store = FlakyStore::failing_on(&[SettingsCategory::Task]);
    let mut session = EditingSession::open(store, options(CommitMode::BestEffort))
        .await
        .unwrap();
    session.on_edit(CalibrationSettings {
        skip_calibration: true,
        ..CalibrationSettings::default()
    });
    session
        .edit_task(TaskEdit::PermutationRepetitions("4".to_string()))
        .unwrap();

    let result = session.save().await;
    match result {
        Err(AppError::CommitFailed { failed }) => assert_eq!(failed, vec![SettingsCategory::Task]),
        other => panic!("expected CommitFailed, got {:?}", other),
    }

    // Five writes landed, calibration is now saved, task is still pending
    assert_eq!(session.store().inner.write_log().unwrap().len(), 5);
    assert!(session.saved().calibration().skip_calibration);
    assert_eq!(session.dirty_categories(), vec![SettingsCategory::Task]);
}

#[tokio::test]
async fn test_draft_survives_failed_save_and_retries() {
    let store = FlakyStore::failing_on(&[SettingsCategory::PhotoDiode]);
    let mut session = EditingSession::open(store, options(CommitMode::Atomic))
        .await
        .unwrap();
    session
        .edit_task(TaskEdit::ToggleBounds(BoundsType::Easy, false))
        .unwrap();
    assert!(session.save().await.is_err());

    let counts = session.derived_trial_counts();
    assert_eq!(counts.trials_per_block, 6);
    assert!(session
        .draft()
        .task()
        .task_bounds_included
        .iter()
        .all(|bounds| *bounds != BoundsType::Easy));
}
