//! Confirmation page

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::hint;
use crate::models::{IouType, Money, PaymentMethod};
use crate::ports::WizardSource;
use crate::tui::app::App;

fn rail_label(method: PaymentMethod) -> &'static str {
    match method {
        PaymentMethod::Elsewhere => "iou.settleElsewhere",
        PaymentMethod::PayPalMe => "iou.settlePaypalMe",
        PaymentMethod::Wallet => "iou.settleExpensify",
    }
}

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let me = app.backend.current_user().login;
    let amount = Money::from_draft(app.wizard.amount())
        .unwrap_or_default()
        .format_for_currency(&app.currency());

    let mut lines = vec![Line::from(vec![
        Span::styled(
            format!("{}: ", app.translate("iou.amount")),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(amount, Style::default().add_modifier(Modifier::BOLD)),
    ])];

    lines.push(Line::from(Span::styled(
        format!("{}:", app.translate("iou.to")),
        Style::default().fg(Color::Cyan),
    )));
    for participant in app.wizard.confirmation_participants(&me) {
        lines.push(Line::from(format!(
            "  {}  {}",
            participant.text, participant.alternate_text
        )));
    }

    if app.wizard.props().iou_type == IouType::Send {
        lines.push(Line::from(""));
        for (i, method) in app.payment_rails().iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled(format!("  F{} ", i + 1), Style::default().fg(Color::Green)),
                Span::raw(app.translate(rail_label(*method))),
            ]));
        }
    }

    let comment_row = lines.len() as u16 + 1;
    frame.render_widget(Paragraph::new(lines), area);

    if comment_row < area.height {
        let input_area = Rect::new(area.x, area.y + comment_row, area.width, 1);
        frame.render_widget(&app.comment_input, input_area);
    }
}

pub fn hints(app: &App) -> Vec<Span<'static>> {
    let mut spans = if app.wizard.props().iou_type == IouType::Send {
        hint(&format!("F1-F{}", app.payment_rails().len()), "Pay")
    } else {
        hint("Enter", "Confirm")
    };
    spans.extend(hint("Ctrl+E", "Edit amount"));
    spans.extend(hint("Esc", app.translate("common.back")));
    spans
}
