//! User settings for iou-wizard
//!
//! Holds who the current user is, their default currency and locale, the
//! logging filter and a seed table of personal details for the local backend.

use serde::{Deserialize, Serialize};

use super::paths::WizardPaths;
use crate::error::WizardError;
use crate::models::{CurrentUser, PersonalDetailsList};

/// User settings for iou-wizard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Login of the signed-in user
    #[serde(default = "default_login")]
    pub current_user_login: String,

    /// Currency the wizard resets the draft to on mount
    #[serde(default = "default_currency")]
    pub local_currency_code: String,

    /// Locale passed to split actions and used for message lookup
    #[serde(default = "default_locale")]
    pub preferred_locale: String,

    /// `tracing` filter directive; `RUST_LOG` takes precedence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,

    /// Whether dispatched actions are appended to the journal
    #[serde(default = "default_true")]
    pub journal_enabled: bool,

    /// Known people, keyed by login
    #[serde(default)]
    pub personal_details: PersonalDetailsList,
}

fn default_schema_version() -> u32 {
    1
}

fn default_login() -> String {
    "me@example.com".to_string()
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_locale() -> String {
    "en".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            current_user_login: default_login(),
            local_currency_code: default_currency(),
            preferred_locale: default_locale(),
            log_filter: None,
            journal_enabled: true,
            personal_details: PersonalDetailsList::default(),
        }
    }
}

impl Settings {
    /// The signed-in user these settings describe
    pub fn current_user(&self) -> CurrentUser {
        CurrentUser::new(&self.current_user_login)
            .with_currency(&self.local_currency_code)
            .with_locale(&self.preferred_locale)
    }

    /// Load settings from disk, or create default settings if the file doesn't exist
    pub fn load_or_create(paths: &WizardPaths) -> Result<Self, WizardError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| WizardError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                WizardError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &WizardPaths) -> Result<(), WizardError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| WizardError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| WizardError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PersonalDetails;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.local_currency_code, "USD");
        assert_eq!(settings.preferred_locale, "en");
        assert!(settings.journal_enabled);
        assert!(settings.personal_details.is_empty());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WizardPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.local_currency_code = "EUR".into();
        settings
            .personal_details
            .insert(PersonalDetails::new("jane@example.com", "Jane"));
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.local_currency_code, "EUR");
        assert_eq!(
            loaded.personal_details.get("jane@example.com").unwrap().display_name,
            "Jane"
        );
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WizardPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();
        std::fs::write(paths.settings_file(), r#"{"current_user_login":"a@b.c"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.current_user().login, "a@b.c");
        assert_eq!(loaded.current_user().local_currency_code, "USD");
    }

    #[test]
    fn test_corrupt_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WizardPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();
        std::fs::write(paths.settings_file(), "{not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, WizardError::Config(_)));
    }
}
