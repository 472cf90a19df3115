//! Terminal host for the wizard
//!
//! Renders the wizard as a modal with ratatui. The event thread forwards
//! crossterm events over a channel; all wizard state lives on the main
//! thread in [`App`].

pub mod app;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;
pub mod views;
pub mod widgets;

pub use app::App;
pub use terminal::run_tui;

use clap::Args;

/// Arguments for `iou tui`
#[derive(Args, Debug, Clone)]
pub struct TuiArgs {
    /// Flow to open: request, send or split
    #[arg(short = 't', long = "type", default_value = "request")]
    pub iou_type: String,

    /// Participant already on the report; skips the participants page (repeatable)
    #[arg(long = "report-participant")]
    pub report_participants: Vec<String>,

    /// Report id from the route
    #[arg(long)]
    pub report_id: Option<String>,

    /// Make the backend fail the dispatched action
    #[arg(long)]
    pub fail: bool,
}

impl Default for TuiArgs {
    fn default() -> Self {
        Self {
            iou_type: "request".into(),
            report_participants: Vec::new(),
            report_id: None,
            fail: false,
        }
    }
}
