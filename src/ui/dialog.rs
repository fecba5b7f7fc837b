//! Modal dialog overlays.
//!
//! Drawn on top of the screen whenever the matching controller is open.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::common::centered;
use crate::app::App;
use crate::dialog::DialogState;
use crate::view::ViewModel;

/// Render whichever dialogs are open. The error dialog draws last, on top.
pub fn render_overlays(frame: &mut Frame, app: &App, view: &ViewModel, area: Rect) {
    if view.dialogs.confirmation == DialogState::Open {
        render_confirmation(frame, app, area);
    }
    if view.dialogs.error == DialogState::Open {
        let message = view.dialogs.error_message.as_deref().unwrap_or("Error desconocido");
        render_error(frame, app, message, area);
    }
}

fn render_confirmation(frame: &mut Frame, app: &App, area: Rect) {
    let text = vec![
        Line::from(""),
        Line::from(" ¿Confirmar la solicitud de reserva?"),
        Line::from(""),
        Line::from(Span::styled(
            " Enter/s: confirmar   Esc/n: cancelar",
            Style::default().add_modifier(Modifier::DIM),
        )),
    ];

    let block = Block::default()
        .title(" Confirmar reserva ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(app.theme.accent_style());

    let dialog_area = centered(area, 44, 7);
    frame.render_widget(Clear, dialog_area);
    frame.render_widget(Paragraph::new(text).block(block), dialog_area);
}

fn render_error(frame: &mut Frame, app: &App, message: &str, area: Rect) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!(" {}", message),
            Style::default().fg(app.theme.danger),
        )),
        Line::from(""),
        Line::from(Span::styled(
            " Pulsa Esc para cerrar",
            Style::default().add_modifier(Modifier::DIM),
        )),
    ];

    let block = Block::default()
        .title(" Error ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.danger));

    let dialog_area = centered(area, 52, 8);
    frame.render_widget(Clear, dialog_area);
    frame.render_widget(
        Paragraph::new(text).block(block).wrap(Wrap { trim: false }),
        dialog_area,
    );
}
