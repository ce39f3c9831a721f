//! Event handler for the TUI
//!
//! Routes keyboard events to the handler for the current dashboard phase.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{ActiveView, App};
use super::event::Event;
use crate::services::Phase;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick | Event::Resize(_, _) => {}
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    match app.phase() {
        Phase::Locked => handle_unlock_key(app, key),
        Phase::Ready => handle_dashboard_key(app, key),
        Phase::LoadError => {
            if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter) {
                app.quit();
            }
        }
        Phase::Loading => {}
    }
}

/// Handle keys on the locked screen
fn handle_unlock_key(app: &mut App, key: KeyEvent) {
    if app.unlock_in_flight {
        return;
    }

    match key.code {
        KeyCode::Esc => app.quit(),
        KeyCode::Enter => app.submit_password(),
        KeyCode::Char(c) => {
            app.password_input.insert(c);
            app.clear_status();
        }
        KeyCode::Backspace => app.password_input.backspace(),
        KeyCode::Delete => app.password_input.delete(),
        KeyCode::Left => app.password_input.move_left(),
        KeyCode::Right => app.password_input.move_right(),
        KeyCode::Home => app.password_input.move_start(),
        KeyCode::End => app.password_input.move_end(),
        _ => {}
    }
}

/// Handle keys on the unlocked dashboard
fn handle_dashboard_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.quit(),

        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => {
            let next = app.active_view.next();
            app.switch_view(next);
        }
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => {
            let previous = app.active_view.previous();
            app.switch_view(previous);
        }

        KeyCode::Char('1') => app.switch_view(ActiveView::Overview),
        KeyCode::Char('2') => app.switch_view(ActiveView::Monthly),
        KeyCode::Char('3') => app.switch_view(ActiveView::Daily),
        KeyCode::Char('4') => app.switch_view(ActiveView::Categories),

        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),

        _ => {}
    }
}
