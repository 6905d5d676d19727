//! slimkit Project Library
//!
//! This library reads a Unity-layout project directory from disk: it enumerates
//! assets under `Assets/`, reads importer settings from their `.meta` sidecars,
//! and reads global build settings from `ProjectSettings/`.

pub mod importer;
pub mod settings;
pub mod unity_project;

pub use settings::read_platform_settings;
pub use unity_project::UnityProject;

use std::path::PathBuf;

/// Result type for slimkit-project operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for slimkit-project operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("slimkit core error: {0}")]
    Core(#[from] slimkit_core::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot walk project directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Not a project directory (no Assets folder): {0}")]
    NotAProject(PathBuf),

    #[error("Project settings not found: {0}")]
    MissingSettings(PathBuf),
}
