// file: src/database/settings.rs
use chrono::{DateTime, Utc};
use log::warn;
use sqlx::{FromRow, SqliteConnection, SqlitePool};

use crate::error::AppResult;
use crate::models::{CategorySettings, SettingsCategory};

#[derive(Debug, Clone, FromRow)]
pub struct StoredSetting {
    pub key: String,
    pub value: String,
    pub updated_at: DateTime<Utc>,
}

const UPSERT_SQL: &str = "INSERT INTO settings (key, value, updated_at) VALUES (?, ?, ?) \
     ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";

async fn get_row(pool: &SqlitePool, category: SettingsCategory) -> AppResult<Option<StoredSetting>> {
    let row = sqlx::query_as::<_, StoredSetting>(
        "SELECT key, value, updated_at FROM settings WHERE key = ?",
    )
    .bind(category.key())
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

pub async fn get(pool: &SqlitePool, category: SettingsCategory) -> AppResult<Option<CategorySettings>> {
    match get_row(pool, category).await? {
        Some(row) => Ok(Some(CategorySettings::from_json(category, &row.value)?)),
        None => Ok(None),
    }
}

pub async fn get_all(pool: &SqlitePool) -> AppResult<Vec<StoredSetting>> {
    let rows = sqlx::query_as::<_, StoredSetting>("SELECT key, value, updated_at FROM settings")
        .fetch_all(pool)
        .await?;

    // Rows written by something else are ignored rather than failing the read
    Ok(rows
        .into_iter()
        .filter(|row| match SettingsCategory::from_key(&row.key) {
            Ok(_) => true,
            Err(e) => {
                warn!("Ignoring settings row: {}", e);
                false
            }
        })
        .collect())
}

async fn upsert(conn: &mut SqliteConnection, value: &CategorySettings) -> AppResult<()> {
    let json = value.to_json()?;
    sqlx::query(UPSERT_SQL)
        .bind(value.category().key())
        .bind(json)
        .bind(Utc::now())
        .execute(conn)
        .await?;

    Ok(())
}

pub async fn update(pool: &SqlitePool, value: &CategorySettings) -> AppResult<()> {
    let mut conn = pool.acquire().await?;
    upsert(&mut *conn, value).await
}

/// Writes every value inside one transaction: either all rows change or none do.
pub async fn update_all(pool: &SqlitePool, values: &[CategorySettings]) -> AppResult<()> {
    let mut tx = pool.begin().await?;
    for value in values {
        upsert(&mut *tx, value).await?;
    }
    tx.commit().await?;

    Ok(())
}
