use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::App;

/// Poll for events with a timeout
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.kind == KeyEventKind::Release {
        return;
    }

    // If help is shown, any key closes it
    if app.show_help {
        app.show_help = false;
        return;
    }

    // The error dialog sits on top of everything else
    if app.error_dialog.is_open() {
        if matches!(
            key.code,
            KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace | KeyCode::Char('q')
        ) {
            app.dismiss_error();
        }
        return;
    }

    if app.confirm_dialog.is_open() {
        match key.code {
            KeyCode::Enter | KeyCode::Char('s') | KeyCode::Char('y') => app.confirm_reservation(),
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('q') => app.cancel_reservation(),
            _ => {}
        }
        return;
    }

    if app.route_input_active {
        handle_route_input(app, key);
        return;
    }

    match key.code {
        // Quit
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),

        // Tab switching
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.prev_tab();
            } else {
                app.next_tab();
            }
        }
        KeyCode::BackTab => app.prev_tab(),
        KeyCode::Left | KeyCode::Char('h') => app.prev_tab(),
        KeyCode::Right | KeyCode::Char('l') => app.next_tab(),

        // Direct tab access
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            app.select_tab(index);
        }

        // Type a route
        KeyCode::Char('g') | KeyCode::Char(':') => app.start_route_input(),

        // Go back
        KeyCode::Esc | KeyCode::Backspace => app.go_back(),

        // Reservation flow
        KeyCode::Char('b') => app.request_reservation(),

        // Refresh
        KeyCode::Char('r') => {
            if !app.refresh_metrics() {
                app.set_status_message("Sin cambios en el estado");
            }
        }

        // Help
        KeyCode::Char('?') => app.toggle_help(),

        _ => {}
    }
}

/// Handle key input while the route prompt is active
fn handle_route_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_route_input(),
        KeyCode::Esc => app.cancel_route_input(),
        KeyCode::Backspace => app.route_input_pop(),
        KeyCode::Char(c) => app.route_input_push(c),
        _ => {}
    }
}
