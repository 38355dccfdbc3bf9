// Experiment Settings - prints the saved protocol settings and the trial
// counts they imply, as JSON.

use anyhow::Context;
use log::info;
use serde_json::json;

use experiment_settings::utils::logging::{init_logging, log_error_with_context};
use experiment_settings::{AppConfig, Database, EditingSession, SessionOptions};

async fn run() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("Failed to load configuration")?;

    if let Some(parent) = config.db_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let db = Database::connect(&config.database_url()).await?;
    let session = EditingSession::open(db, SessionOptions::from(&config))
        .await
        .context("Failed to load settings")?;

    let saved = session.saved();
    let report = json!({
        "generalSettings": saved.general(),
        "practiceSettings": saved.practice(),
        "calibrationSettings": saved.calibration(),
        "validationSettings": saved.validation(),
        "taskSettings": saved.task(),
        "photoDiodeSettings": saved.photo_diode(),
        "derivedTrialCounts": session.derived_trial_counts(),
    });

    println!("{}", serde_json::to_string_pretty(&report)?);
    info!("Settings report written for session {}", session.id());
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(e) = init_logging() {
        eprintln!("Failed to initialize logging: {}", e);
    }

    if let Err(e) = run().await {
        log_error_with_context(&e, "experiment-settings");
        std::process::exit(1);
    }
}
