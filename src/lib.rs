// Experiment Settings Library
// Draft staging, dirty checking and commits for the experiment protocol
// settings, plus the derived trial counts of the main task.

pub mod config;
pub mod database;
pub mod error;
pub mod models;
pub mod settings;
pub mod utils;

// Re-export commonly used types
pub use models::*;
pub use config::AppConfig;
pub use database::{Database, MemoryStore, SettingsStore};
pub use error::{AppError, AppResult};
pub use settings::{
    CommitMode, DirtyDetector, DraftManager, DraftSnapshot, EditingSession, NumericInputPolicy,
    SaveCoordinator, SessionOptions, SettingsSnapshot, TaskEdit, TrialCombinatoricsEngine,
    TrialCounts,
};
