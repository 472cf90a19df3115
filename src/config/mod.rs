//! Configuration module for iou-wizard
//!
//! This module provides configuration management including:
//! - Platform path resolution for settings and the action journal
//! - User settings persistence (current user, currency, locale)

pub mod paths;
pub mod settings;

pub use paths::WizardPaths;
pub use settings::Settings;
