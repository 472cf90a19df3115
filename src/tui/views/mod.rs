//! Wizard modal rendering
//!
//! Draws the modal frame (title with the direction arrow), then the page for
//! the current step, a status line and key hints.

pub mod amount;
pub mod confirm;
pub mod participants;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::app::App;
use super::layout::{centered_rect_fixed, ModalLayout};
use crate::wizard::Step;

/// Render the whole modal
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(64, 18, frame.area());
    frame.render_widget(Clear, area);

    let title = format!(" {} {} ", app.wizard.direction().arrow(), app.title());
    let step_counter = format!(
        " {}/{} ",
        app.wizard.current_step_index() + 1,
        app.wizard.steps().len()
    );
    let block = Block::default()
        .title(title)
        .title_bottom(Line::from(step_counter).right_aligned())
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = ModalLayout::new(inner);
    let hints = match app.current_step() {
        Step::Amount => {
            amount::render(frame, app, layout.body);
            amount::hints(app)
        }
        Step::Participants => {
            participants::render(frame, app, layout.body);
            participants::hints()
        }
        Step::Confirm => {
            confirm::render(frame, app, layout.body);
            confirm::hints(app)
        }
    };

    render_status(frame, app, layout.status);
    frame.render_widget(Paragraph::new(Line::from(hints)), layout.hints);
}

fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let line = if app.is_submitting() {
        Line::from(Span::styled("Working...", Style::default().fg(Color::Yellow)))
    } else if app.has_error() && app.current_step() == Step::Amount {
        Line::from(Span::styled(
            app.translate("iou.error.genericCreateFailureMessage"),
            Style::default().fg(Color::Red),
        ))
    } else if let Some(message) = &app.status_message {
        Line::from(Span::styled(message.as_str(), Style::default().fg(Color::Yellow)))
    } else {
        Line::from("")
    };
    frame.render_widget(Paragraph::new(line), area);
}

/// `[key] label` pair for the hint line
pub(crate) fn hint(key: &str, label: impl Into<String>) -> Vec<Span<'static>> {
    vec![
        Span::styled(format!("[{}]", key), Style::default().fg(Color::Green)),
        Span::raw(format!(" {}  ", label.into())),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::PersonalDetails;
    use crate::tui::TuiArgs;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_amount_page_renders_title_and_hints() {
        let app = App::new(&Settings::default(), &TuiArgs::default()).unwrap();
        let text = screen_text(&app);
        assert!(text.contains("Request money"));
        assert!(text.contains("1/3"));
        assert!(text.contains("Next"));
    }

    #[test]
    fn test_confirm_page_renders_amount_and_rails() {
        let args = TuiArgs {
            iou_type: "send".into(),
            report_participants: vec!["jane@example.com".into()],
            ..TuiArgs::default()
        };
        let mut app = App::new(&Settings::default(), &args).unwrap();
        app.amount_input.insert('9');
        app.submit_amount();

        let text = screen_text(&app);
        assert!(text.contains("Send $9.00"));
        assert!(text.contains("I'll settle up elsewhere"));
        assert!(text.contains("jane@example.com"));
        assert!(!text.contains("PayPal.me"));
        assert!(text.contains("F1-F2"));
    }

    #[test]
    fn test_confirm_page_offers_paypal_with_address() {
        let mut settings = Settings::default();
        settings
            .personal_details
            .insert(PersonalDetails::new("jane@example.com", "Jane").with_paypal_me("janepays"));
        let args = TuiArgs {
            iou_type: "send".into(),
            report_participants: vec!["jane@example.com".into()],
            ..TuiArgs::default()
        };
        let mut app = App::new(&settings, &args).unwrap();
        app.amount_input.insert('9');
        app.submit_amount();

        let text = screen_text(&app);
        assert!(text.contains("  F2 Pay with PayPal.me"));
        assert!(text.contains("F1-F3"));
    }
}
