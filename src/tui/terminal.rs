//! Terminal setup, teardown and the main loop

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;

use crate::backend::{ActionJournal, ActionRecord};
use crate::config::{Settings, WizardPaths};
use crate::error::WizardError;

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;
use super::TuiArgs;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Enter raw mode and the alternate screen. A panic hook restores the
/// terminal before the panic message prints.
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the wizard modal until it is dismissed, then journal what was sent
pub fn run_tui(paths: &WizardPaths, settings: &Settings, args: &TuiArgs) -> Result<()> {
    let mut app = App::new(settings, args)?;
    let mut terminal = init_terminal()?;
    let events = EventHandler::default();

    let outcome = event_loop(&mut terminal, &mut app, &events);
    restore_terminal()?;
    outcome?;

    let records = app.take_records();
    report(&records);
    if settings.journal_enabled {
        ActionJournal::new(paths.journal_file()).append_batch(&records)?;
    }
    Ok(())
}

fn event_loop(terminal: &mut Tui, app: &mut App, events: &EventHandler) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| super::views::render(frame, app))?;
        let event = events
            .next()
            .map_err(|e| WizardError::Tui(format!("Terminal event source stopped: {}", e)))?;
        handle_event(app, event);
    }
    Ok(())
}

fn report(records: &[ActionRecord]) {
    if records.is_empty() {
        println!("Closed without sending anything.");
    }
    for record in records {
        println!(
            "{} {} {} ({})",
            record.short_id(),
            record.kind,
            record.amount.format_for_currency(&record.currency),
            record.status
        );
    }
}
