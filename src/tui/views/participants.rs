//! Participants page: a checklist of known people

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState},
    Frame,
};

use super::hint;
use crate::tui::app::App;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    if app.picker.entries.is_empty() {
        frame.render_widget(
            Line::from(Span::styled(
                "No contacts in settings.personal_details",
                Style::default().fg(Color::DarkGray),
            )),
            area,
        );
        return;
    }

    let items: Vec<ListItem> = app
        .picker
        .entries
        .iter()
        .zip(&app.picker.checked)
        .map(|(participant, checked)| {
            let mark = if *checked { "[x]" } else { "[ ]" };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", mark), Style::default().fg(Color::Green)),
                Span::raw(participant.text.clone()),
                Span::styled(
                    format!("  {}", participant.alternate_text),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    let mut state = ListState::default().with_selected(Some(app.picker.cursor));
    frame.render_stateful_widget(list, area, &mut state);
}

pub fn hints() -> Vec<Span<'static>> {
    let mut spans = hint("Space", "Toggle");
    spans.extend(hint("Enter", "Next"));
    spans.extend(hint("Esc", "Back"));
    spans
}
