//! Configuration module
//!
//! Settings for the editing session itself (where the store lives and how
//! commits and numeric input behave), read from the environment.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use log::info;

use crate::error::{AppError, AppResult};
use crate::settings::input::NumericInputPolicy;
use crate::settings::save::CommitMode;

pub const DB_PATH_VAR: &str = "EXPSET_DB_PATH";
pub const COMMIT_MODE_VAR: &str = "EXPSET_COMMIT_MODE";
pub const NUMERIC_INPUT_VAR: &str = "EXPSET_NUMERIC_INPUT";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub commit_mode: CommitMode,
    pub numeric_input: NumericInputPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            commit_mode: CommitMode::default(),
            numeric_input: NumericInputPolicy::default(),
        }
    }
}

fn default_db_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("experiment-settings")
        .join("settings.db")
}

fn parse_var<T>(name: &str) -> AppResult<Option<T>>
where
    T: FromStr<Err = String>,
{
    match env::var(name) {
        Ok(raw) if raw.trim().is_empty() => Ok(None),
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| AppError::config(format!("{}: {}", name, e))),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => {
            Err(AppError::config(format!("{} is not valid unicode", name)))
        }
    }
}

impl AppConfig {
    /// Reads the configuration, falling back to defaults for unset variables.
    ///
    /// # Returns
    ///
    /// * `Err(AppError::Config)` - a variable is set to an unrecognized value
    pub fn from_env() -> AppResult<Self> {
        let defaults = AppConfig::default();
        let db_path = env::var_os(DB_PATH_VAR)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.db_path);

        let config = Self {
            db_path,
            commit_mode: parse_var(COMMIT_MODE_VAR)?.unwrap_or(defaults.commit_mode),
            numeric_input: parse_var(NUMERIC_INPUT_VAR)?.unwrap_or(defaults.numeric_input),
        };
        config.validate()?;

        info!(
            "Configuration loaded: db={}, commit={:?}, numeric_input={:?}",
            config.db_path.display(),
            config.commit_mode,
            config.numeric_input
        );
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.db_path.as_os_str().is_empty() {
            return Err(AppError::config("database path is empty"));
        }
        if self.db_path.is_dir() {
            return Err(AppError::config(format!(
                "database path {} is a directory",
                self.db_path.display()
            )));
        }
        Ok(())
    }

    pub fn database_url(&self) -> String {
        format!("sqlite:{}", self.db_path.display())
    }
}
