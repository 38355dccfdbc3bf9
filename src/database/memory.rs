// file: src/database/memory.rs
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use log::debug;

use super::SettingsStore;
use crate::error::{AppError, AppResult};
use crate::models::{CategorySettings, SettingsCategory};

/// Settings store kept in process memory. Values are held in their serialized
/// form, the same as the SQLite store, so decoding behaves identically.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<SettingsCategory, String>>,
    writes: Mutex<Vec<SettingsCategory>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores raw text for a category, bypassing serialization
    pub fn insert_raw(&self, category: SettingsCategory, raw: impl Into<String>) -> AppResult<()> {
        self.lock_values()?.insert(category, raw.into());
        Ok(())
    }

    /// Categories written so far, in write order
    pub fn write_log(&self) -> AppResult<Vec<SettingsCategory>> {
        Ok(self.lock_writes()?.clone())
    }

    fn lock_values(&self) -> AppResult<MutexGuard<'_, HashMap<SettingsCategory, String>>> {
        self.values
            .lock()
            .map_err(|_| AppError::Anyhow(anyhow::anyhow!("Memory store lock poisoned")))
    }

    // Taken before `values` wherever both are held
    fn lock_writes(&self) -> AppResult<MutexGuard<'_, Vec<SettingsCategory>>> {
        self.writes
            .lock()
            .map_err(|_| AppError::Anyhow(anyhow::anyhow!("Memory store write log poisoned")))
    }
}

impl SettingsStore for MemoryStore {
    async fn read(&self, category: SettingsCategory) -> AppResult<Option<CategorySettings>> {
        let raw = self.lock_values()?.get(&category).cloned();
        match raw {
            Some(raw) => Ok(Some(CategorySettings::from_json(category, &raw)?)),
            None => Ok(None),
        }
    }

    async fn write(&self, value: &CategorySettings) -> AppResult<()> {
        let raw = value.to_json()?;
        let mut writes = self.lock_writes()?;
        self.lock_values()?.insert(value.category(), raw);
        writes.push(value.category());
        debug!("Memory store wrote {}", value.category());
        Ok(())
    }

    /// Serializes the whole batch before touching the map, so a value that
    /// fails to encode leaves every category as it was.
    async fn write_all(&self, values: &[CategorySettings]) -> AppResult<()> {
        let encoded = values
            .iter()
            .map(|value| value.to_json().map(|raw| (value.category(), raw)))
            .collect::<AppResult<Vec<_>>>()?;

        let mut writes = self.lock_writes()?;
        let mut map = self.lock_values()?;
        for (category, raw) in encoded {
            map.insert(category, raw);
            writes.push(category);
        }
        Ok(())
    }
}
