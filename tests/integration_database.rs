use experiment_settings::{
    CategorySettings, Database, DelayType, EditingSession, PhotoDiodePosition, RewardType,
    SessionOptions, SettingsCategory, SettingsStore, TaskEdit, ValidationSettings,
};
use tempfile::NamedTempFile;

async fn create_test_database() -> (Database, String) {
    let temp_file = NamedTempFile::new().unwrap();
    let (_, path) = temp_file.keep().unwrap();
    let db_path = format!("sqlite:{}", path.to_str().unwrap());

    let db = Database::connect(&db_path).await.unwrap();
    (db, db_path)
}

#[tokio::test]
async fn test_fresh_database_opens_with_defaults() {
    let (db, _) = create_test_database().await;
    let session = EditingSession::open(db, SessionOptions::default()).await.unwrap();

    assert!(!session.is_save_enabled());
    assert_eq!(session.saved().task().task_blocks_included.len(), 3);
    assert_eq!(session.derived_trial_counts().trials_across_blocks, 27);
}

#[tokio::test]
async fn test_saved_settings_survive_reopen() {
    let (db, db_path) = create_test_database().await;

    // 1. Edit and save in a first session
    let mut session = EditingSession::open(db, SessionOptions::default()).await.unwrap();
    session
        .edit_task(TaskEdit::ToggleBlock(DelayType::WideAsync, false))
        .unwrap();
    session
        .edit_task(TaskEdit::ToggleReward(RewardType::Low, false))
        .unwrap();
    session
        .edit_task(TaskEdit::BlockRepetitions("3".to_string()))
        .unwrap();
    session.on_edit(ValidationSettings {
        skip_validation: true,
        ..ValidationSettings::default()
    });
    assert!(session.is_save_enabled());
    session.save().await.unwrap();
    assert!(!session.is_save_enabled());

    // 2. A new connection sees the committed values
    let reopened_db = Database::connect(&db_path).await.unwrap();
    let reopened = EditingSession::open(reopened_db, SessionOptions::default())
        .await
        .unwrap();

    let task = reopened.saved().task();
    assert!(!task.task_blocks_included.contains(&DelayType::WideAsync));
    assert!(!task.task_rewards_included.contains(&RewardType::Low));
    assert_eq!(task.task_block_repetitions, 3);
    assert!(reopened.saved().validation().skip_validation);

    // 3 bounds * 2 rewards * 1 = 6 per block, * 2 delays * 3 = 36
    assert_eq!(reopened.derived_trial_counts().trials_per_block, 6);
    assert_eq!(reopened.derived_trial_counts().trials_across_blocks, 36);
}

#[tokio::test]
async fn test_commit_writes_every_category_row() {
    let (db, _) = create_test_database().await;
    let rows_db = db.clone();

    let mut session = EditingSession::open(db, SessionOptions::default()).await.unwrap();
    session
        .edit_task(TaskEdit::RandomSkipChance("25".to_string()))
        .unwrap();
    session.save().await.unwrap();

    let rows = rows_db.get_stored_rows().await.unwrap();
    let mut keys: Vec<String> = rows.into_iter().map(|row| row.key).collect();
    keys.sort();
    let mut expected: Vec<String> = SettingsCategory::ALL
        .iter()
        .map(|category| category.key().to_string())
        .collect();
    expected.sort();
    assert_eq!(keys, expected);
}

#[tokio::test]
async fn test_undecodable_row_falls_back_to_defaults() {
    let (db, _) = create_test_database().await;
    sqlx::query("INSERT INTO settings (key, value) VALUES ('photoDiodeSettings', '\"TopLeft\"')")
        .execute(&db.pool)
        .await
        .unwrap();

    let session = EditingSession::open(db.clone(), SessionOptions::default())
        .await
        .unwrap();
    assert_eq!(session.saved().photo_diode().position, PhotoDiodePosition::Off);

    // The broken row is still there until the next save
    assert!(db.read(SettingsCategory::PhotoDiode).await.is_err());
}

#[tokio::test]
async fn test_store_round_trips_each_category() {
    let (db, _) = create_test_database().await;
    for category in SettingsCategory::ALL {
        let value = CategorySettings::default_for(category);
        db.write(&value).await.unwrap();
        assert_eq!(db.read(category).await.unwrap(), Some(value));
    }
}

#[tokio::test]
async fn test_out_of_range_skip_chance_row_keeps_task_settings() {
    let (db, _) = create_test_database().await;
    sqlx::query("INSERT INTO settings (key, value) VALUES ('taskSettings', ?)")
        .bind(
            r#"{"taskBlocksIncluded":["Sync"],"taskRewardsIncluded":["Low"],"taskBoundsIncluded":["Easy","Hard"],"taskPermutationRepetitions":1,"taskBlockRepetitions":7,"randomSkipChance":300}"#,
        )
        .execute(&db.pool)
        .await
        .unwrap();

    let session = EditingSession::open(db, SessionOptions::default()).await.unwrap();
    let task = session.saved().task();
    assert_eq!(task.random_skip_chance, 100);
    assert_eq!(task.task_block_repetitions, 7);
    // 2 bounds * 1 reward * 1 = 2 per block, * 1 delay * 7 = 14
    assert_eq!(session.derived_trial_counts().trials_across_blocks, 14);
    assert!(!session.is_save_enabled());
}
