//! CLI command handlers
//!
//! Bridges clap argument parsing with the wizard and the local backend.

pub mod journal;
pub mod run;

pub use journal::{handle_journal_command, ExportFormat, JournalCommands};
pub use run::{handle_run_command, run_session, RunArgs, SessionOutcome};
