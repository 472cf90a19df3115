//! iou-wizard - a multi-step money request wizard
//!
//! This library provides a headless wizard that walks a user through
//! requesting, splitting or sending money: enter an amount, pick the
//! participants when the report has none, then confirm. The wizard talks to
//! its host only through the traits in [`ports`], so the same state machine
//! runs under the `iou` CLI, the terminal UI and test fakes.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `logging`: `tracing` subscriber setup
//! - `models`: Money, participants, reports and the IOU draft
//! - `ports`: Traits the host implements
//! - `i18n`: Static message catalog
//! - `wizard`: Step sequence, navigation, titles, reactions and dispatch
//! - `backend`: In-process host and the action journal
//! - `export`: Journal export to CSV, JSON and YAML
//! - `cli`: Command handlers
//! - `tui`: Terminal modal
//!
//! # Example
//!
//! ```rust,ignore
//! use iou_wizard::backend::LocalBackend;
//! use iou_wizard::config::{Settings, WizardPaths};
//! use iou_wizard::wizard::{RequestWizard, WizardProps};
//!
//! let paths = WizardPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut backend = LocalBackend::from_settings(&settings);
//! let mut wizard = RequestWizard::mount(WizardProps::default(), &mut backend);
//! wizard.complete_amount_step("12.34");
//! ```

pub mod backend;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod i18n;
pub mod logging;
pub mod models;
pub mod ports;
pub mod tui;
pub mod wizard;

pub use error::{WizardError, WizardResult};
pub use wizard::RequestWizard;
