//! Path management for iou-wizard
//!
//! ## Path Resolution Order
//!
//! 1. `IOU_WIZARD_DATA_DIR` environment variable (if set)
//! 2. The platform config directory for `iou-wizard`
//!    (`~/.config/iou-wizard` on Linux, `~/Library/Application Support/iou-wizard`
//!    on macOS, `%APPDATA%\iou-wizard\config` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::WizardError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "IOU_WIZARD_DATA_DIR";

/// Manages all paths used by iou-wizard
#[derive(Debug, Clone)]
pub struct WizardPaths {
    /// Base directory for all iou-wizard data
    base_dir: PathBuf,
}

impl WizardPaths {
    /// Create a new WizardPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and the
    /// override variable is unset.
    pub fn new() -> Result<Self, WizardError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create WizardPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (`<base>/data/`)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the dispatched-action journal
    pub fn journal_file(&self) -> PathBuf {
        self.data_dir().join("actions.jsonl")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), WizardError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| WizardError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| WizardError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, WizardError> {
    ProjectDirs::from("", "", "iou-wizard")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| WizardError::Config("Could not determine a home directory".into()))
}
