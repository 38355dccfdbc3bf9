// file: src/database/mod.rs

use anyhow::{Context, Result};
use log::info;
use sqlx::{migrate::MigrateDatabase, sqlite::SqlitePool, Sqlite};

use crate::error::AppResult;
use crate::models::{CategorySettings, SettingsCategory};
use crate::utils::logging::log_store_operation;

// Declare submodules
pub mod memory;
pub mod settings;

pub use memory::MemoryStore;

/// Durable storage for settings, keyed by category.
#[allow(async_fn_in_trait)]
pub trait SettingsStore {
    /// Last persisted value for `category`, or `None` if it was never written.
    async fn read(&self, category: SettingsCategory) -> AppResult<Option<CategorySettings>>;

    async fn write(&self, value: &CategorySettings) -> AppResult<()>;

    /// Writes several categories. The default issues one `write` per value and
    /// stops at the first failure, leaving earlier writes in place; stores that
    /// can make the batch all-or-nothing override it.
    async fn write_all(&self, values: &[CategorySettings]) -> AppResult<()> {
        for value in values {
            self.write(value).await?;
        }
        Ok(())
    }
}

#[derive(Clone)]
pub struct Database {
    pub pool: SqlitePool,
}

impl Database {
    /// Opens (creating if needed) the SQLite database at `db_url`, e.g.
    /// `sqlite:/path/to/settings.db`.
    pub async fn connect(db_url: &str) -> Result<Self> {
        let db_exists = Sqlite::database_exists(db_url)
            .await
            .context("Failed to check if database exists")?;
        if !db_exists {
            info!("Creating database");
            Sqlite::create_database(db_url)
                .await
                .context("Failed to create database")?;
        }

        let pool = SqlitePool::connect(db_url)
            .await
            .context("Failed to connect to database")?;

        run_schema(&pool).await.context("Failed to run database schema")?;

        info!("Database initialized successfully");

        Ok(Database { pool })
    }

    // --- Settings Delegates ---

    pub async fn get_settings(&self, category: SettingsCategory) -> AppResult<Option<CategorySettings>> {
        settings::get(&self.pool, category).await
    }

    pub async fn get_stored_rows(&self) -> AppResult<Vec<settings::StoredSetting>> {
        settings::get_all(&self.pool).await
    }

    pub async fn update_settings(&self, value: &CategorySettings) -> AppResult<()> {
        settings::update(&self.pool, value).await
    }
}

impl SettingsStore for Database {
    async fn read(&self, category: SettingsCategory) -> AppResult<Option<CategorySettings>> {
        let started = std::time::Instant::now();
        let value = self.get_settings(category).await;
        log_store_operation("read", category.key(), started.elapsed().as_millis() as u64);
        value
    }

    async fn write(&self, value: &CategorySettings) -> AppResult<()> {
        let started = std::time::Instant::now();
        let result = self.update_settings(value).await;
        log_store_operation("write", value.category().key(), started.elapsed().as_millis() as u64);
        result
    }

    async fn write_all(&self, values: &[CategorySettings]) -> AppResult<()> {
        let started = std::time::Instant::now();
        let result = settings::update_all(&self.pool, values).await;
        log_store_operation("write_all", "settings", started.elapsed().as_millis() as u64);
        result
    }
}

async fn run_schema(pool: &SqlitePool) -> Result<()> {
    let schema = include_str!("schema.sql");

    let mut current_statement = String::new();
    let mut in_trigger = false;

    for line in schema.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with("--") || trimmed.is_empty() {
            continue;
        }

        if trimmed.to_uppercase().starts_with("CREATE TRIGGER") {
            in_trigger = true;
        }

        current_statement.push_str(line);
        current_statement.push('\n');

        if trimmed.ends_with(';') {
            if in_trigger {
                if trimmed.to_uppercase() == "END;" {
                    in_trigger = false;
                    sqlx::query(&current_statement).execute(pool).await?;
                    current_statement.clear();
                }
            } else {
                sqlx::query(&current_statement).execute(pool).await?;
                current_statement.clear();
            }
        }
    }
    Ok(())
}
