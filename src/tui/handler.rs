//! Key handling
//!
//! Routes key presses to the page for the current step. After every key the
//! wizard observes the backend so reactions apply before the next draw.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::App;
use super::event::Event;
use crate::models::{IouType, PaymentMethod};
use crate::wizard::Step;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) => {
            handle_key_event(app, key);
            if !app.should_quit {
                app.sync();
            }
        }
        Event::Tick => app.tick(),
        Event::Resize(_, _) => {}
    }
}

fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.close();
        return;
    }
    if key.code == KeyCode::Esc {
        app.go_back();
        return;
    }
    if app.is_submitting() {
        return;
    }

    match app.current_step() {
        Step::Amount => handle_amount_key(app, key),
        Step::Participants => handle_participants_key(app, key),
        Step::Confirm => handle_confirm_key(app, key),
    }
}

fn handle_amount_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_amount(),
        KeyCode::Tab => app.cycle_currency(),
        KeyCode::Char(c) if c.is_ascii_digit() || c == '.' || c == ',' => {
            app.amount_input.insert(if c == ',' { '.' } else { c })
        }
        KeyCode::Backspace => app.amount_input.backspace(),
        KeyCode::Delete => app.amount_input.delete(),
        KeyCode::Left => app.amount_input.move_left(),
        KeyCode::Right => app.amount_input.move_right(),
        KeyCode::Home => app.amount_input.move_start(),
        KeyCode::End => app.amount_input.move_end(),
        _ => {}
    }
}

fn handle_participants_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.picker.move_up(),
        KeyCode::Down | KeyCode::Char('j') => app.picker.move_down(),
        KeyCode::Char(' ') => app.picker.toggle(),
        KeyCode::Enter => app.submit_participants(),
        _ => {}
    }
}

fn handle_confirm_key(app: &mut App, key: KeyEvent) {
    let sending = app.wizard.props().iou_type == IouType::Send;

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if key.code == KeyCode::Char('e') {
            app.edit_amount();
        }
        return;
    }

    match key.code {
        KeyCode::Enter if sending => app.pay(PaymentMethod::Elsewhere),
        KeyCode::Enter => app.confirm(),
        KeyCode::F(n) if sending => {
            let rail = usize::from(n)
                .checked_sub(1)
                .and_then(|i| app.payment_rails().get(i).copied());
            if let Some(method) = rail {
                app.pay(method);
            }
        }
        KeyCode::Char(c) => {
            app.comment_input.insert(c);
            app.sync_comment();
        }
        KeyCode::Backspace => {
            app.comment_input.backspace();
            app.sync_comment();
        }
        KeyCode::Delete => {
            app.comment_input.delete();
            app.sync_comment();
        }
        KeyCode::Left => app.comment_input.move_left(),
        KeyCode::Right => app.comment_input.move_right(),
        _ => {}
    }
}
