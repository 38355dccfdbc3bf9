//! Settings editing engine: draft staging, dirty checking, commits and
//! derived trial counts.

pub mod dirty;
pub mod draft;
pub mod input;
pub mod save;
pub mod session;
pub mod snapshot;
pub mod trials;

pub use dirty::DirtyDetector;
pub use draft::DraftManager;
pub use input::{apply_task_edit, NumericInputPolicy, TaskEdit};
pub use save::{CommitMode, CommitReport, SaveCoordinator};
pub use session::{load_snapshot, EditingSession, SessionOptions};
pub use snapshot::{DraftSnapshot, SettingsSnapshot};
pub use trials::{TrialCombinatoricsEngine, TrialCounts};
