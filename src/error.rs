use thiserror::Error;

use crate::models::SettingsCategory;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Error: {0}")]
    Anyhow(#[from] anyhow::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Commit failed for {}", format_categories(.failed))]
    CommitFailed { failed: Vec<SettingsCategory> },

    #[error("Not found: {0}")]
    NotFound(String),
}

fn format_categories(categories: &[SettingsCategory]) -> String {
    categories
        .iter()
        .map(|category| category.key())
        .collect::<Vec<_>>()
        .join(", ")
}

impl AppError {
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        Self::NotFound(msg.into())
    }
}

pub type AppResult<T> = Result<T, AppError>;
