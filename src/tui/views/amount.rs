//! Amount page

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::hint;
use crate::models::currency_symbol;
use crate::tui::app::App;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let currency = app.currency();
    let symbol = currency_symbol(&currency).unwrap_or("");

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!("  {} ", currency),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(symbol.to_string()),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), area);

    if area.height > 3 {
        let input_area = Rect::new(area.x + 2, area.y + 3, area.width.saturating_sub(4), 1);
        frame.render_widget(&app.amount_input, input_area);
    }
}

pub fn hints(app: &App) -> Vec<Span<'static>> {
    let mut spans = hint("Enter", app.wizard.amount_button_label(&app.translator));
    spans.extend(hint("Tab", "Currency"));
    spans.extend(hint("Esc", app.translate("common.back")));
    spans
}
