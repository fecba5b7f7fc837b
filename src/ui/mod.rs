//! Terminal UI rendering using ratatui.
//!
//! ## Submodules
//!
//! - [`screens`]: Body of each guest tab, including the live status table
//! - [`dialog`]: Error and confirmation overlays
//! - [`common`]: Shared components (header, tabs, status bar, help overlay)
//! - [`theme`]: Light/dark theme support with terminal auto-detection
//!
//! ## Rendering Architecture
//!
//! [`draw`] composes a [`ViewModel`] from the app and lays it out:
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │ Header (common::render_header)       │
//! ├──────────────────────────────────────┤
//! │ Tabs (common::render_tabs)           │
//! ├──────────────────────────────────────┤
//! │                                      │
//! │ Screen body (screens::render)        │
//! │                                      │
//! ├──────────────────────────────────────┤
//! │ Status Bar (common::render_status)   │
//! └──────────────────────────────────────┘
//!         ↑
//!    Overlays rendered on top:
//!    - dialog::render_overlays
//!    - common::render_help
//! ```

pub mod common;
pub mod dialog;
pub mod screens;
pub mod theme;

pub use theme::Theme;

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::view::ViewModel;

/// Minimum terminal size for usable display.
pub const MIN_WIDTH: u16 = 50;
pub const MIN_HEIGHT: u16 = 12;

/// Draw the whole screen for the current app state.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let msg = format!(
            "Terminal pequeña: {}x{}\nMínimo: {}x{}",
            area.width, area.height, MIN_WIDTH, MIN_HEIGHT
        );
        let paragraph = Paragraph::new(msg)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Yellow));
        let y = area.height.saturating_sub(2) / 2;
        frame.render_widget(paragraph, Rect::new(0, y, area.width, 2.min(area.height)));
        return;
    }

    let view = ViewModel::compose(app);

    let chunks = Layout::vertical([
        Constraint::Length(1), // Header bar
        Constraint::Length(1), // Tabs
        Constraint::Min(8),    // Screen body
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    common::render_header(frame, app, &view, chunks[0]);
    common::render_tabs(frame, app, &view, chunks[1]);
    screens::render(frame, app, &view, chunks[2]);
    common::render_status_bar(frame, app, &view, chunks[3]);

    dialog::render_overlays(frame, app, &view, area);

    if app.show_help {
        common::render_help(frame, app, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::feed::{default_metrics, StaticSource};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn app(route: &str) -> App {
        let settings = Settings {
            initial_route: route.to_string(),
            ..Settings::default()
        };
        let mut app = App::new(Box::new(StaticSource::new(default_metrics())), &settings, Theme::dark());
        app.refresh_metrics();
        app
    }

    fn render_to_string(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_resorts_screen_shows_metrics() {
        let out = render_to_string(&app("/huesped/resorts"), 100, 24);
        assert!(out.contains("Resorts"));
        assert!(out.contains("Wi-Fi"));
        assert!(out.contains("Alerta"));
        assert!(out.contains("Crítico"));
    }

    #[test]
    fn test_unknown_route_screen() {
        let out = render_to_string(&app("/huesped/spa"), 100, 24);
        assert!(out.contains("Ruta no encontrada: /huesped/spa"));
    }

    #[test]
    fn test_error_dialog_is_drawn() {
        let mut app = app("/huesped/account");
        app.show_error("Las fechas no están disponibles");
        let out = render_to_string(&app, 100, 24);
        assert!(out.contains("Error"));
        assert!(out.contains("Las fechas no están disponibles"));
    }

    #[test]
    fn test_confirmation_dialog_is_drawn() {
        let mut app = app("/huesped/reservations");
        app.request_reservation();
        let out = render_to_string(&app, 100, 24);
        assert!(out.contains("Confirmar reserva"));
    }

    #[test]
    fn test_small_terminal_message() {
        let out = render_to_string(&app("/huesped/resorts"), 30, 6);
        assert!(out.contains("Terminal"));
    }
}
