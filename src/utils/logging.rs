use env_logger::{Builder, Target};
use log::{Level, LevelFilter, SetLoggerError};
use std::env;
use std::io::Write;

use crate::models::SettingsCategory;

fn parse_level(value: &str) -> LevelFilter {
    match value.to_lowercase().as_str() {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

pub fn init_logging() -> Result<(), SetLoggerError> {
    let env = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let log_level = parse_level(&env);

    let mut builder = Builder::from_default_env();

    builder.format(|buf, record| {
        let timestamp = buf.timestamp();
        let target = record.target();
        let file = record.file().unwrap_or("unknown");
        let line = record.line().unwrap_or(0);

        match record.level() {
            Level::Info => {
                writeln!(buf, "{} [INFO] [{}]: {}", timestamp, target, record.args())
            }
            level => {
                writeln!(
                    buf,
                    "{} [{}] [{}:{}] {}: {}",
                    timestamp,
                    level,
                    file,
                    line,
                    target,
                    record.args()
                )
            }
        }
    });

    // Filter out noisy modules in production
    if env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string()) == "production" {
        builder.filter_module("sqlx", LevelFilter::Warn);
        builder.filter_module("tokio", LevelFilter::Info);
    }

    builder.filter_level(log_level).target(Target::Stdout).try_init()
}

pub fn log_error_with_context(error: &anyhow::Error, context: &str) {
    log::error!("[{}] {}", context, error);

    // Log chain of causes for better debugging
    let mut source = error.source();
    while let Some(err) = source {
        log::error!("  Caused by: {}", err);
        source = err.source();
    }
}

pub fn log_store_operation(operation: &str, key: &str, duration_ms: u64) {
    log::debug!("[Store] {} on {} took {}ms", operation, key, duration_ms);
}

pub fn log_commit(session_id: &str, written: &[SettingsCategory], failed: &[SettingsCategory]) {
    if failed.is_empty() {
        log::info!(
            "[Settings] Session {} committed {} categories",
            session_id,
            written.len()
        );
    } else {
        log::warn!(
            "[Settings] Session {} committed {} categories, {} failed: {:?}",
            session_id,
            written.len(),
            failed.len(),
            failed
        );
    }
}
