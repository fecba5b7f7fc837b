//! Screen bodies for each guest tab.
//!
//! The resorts screen carries the live status panel; the other tabs are
//! static placeholders for flows that live outside this app.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::app::App;
use crate::view::ViewModel;

/// Render the body for the active tab.
pub fn render(frame: &mut Frame, app: &App, view: &ViewModel, area: Rect) {
    match view.active_tab.as_deref() {
        Some("resorts") => render_resorts(frame, app, view, area),
        Some("reservations") => render_reservations(frame, app, area),
        Some("account") => render_account(frame, app, area),
        Some(other) => render_placeholder(frame, app, other, area),
        None => render_not_found(frame, app, view, area),
    }
}

fn block<'a>(app: &App, title: String) -> Block<'a> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.muted))
}

fn render_resorts(frame: &mut Frame, app: &App, view: &ViewModel, area: Rect) {
    let chunks = Layout::vertical([Constraint::Length(4), Constraint::Min(4)]).split(area);

    let intro = Paragraph::new(vec![
        Line::from(Span::styled(
            " Resort Costa Azul",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(" Estado de las instalaciones en tiempo real"),
    ])
    .block(block(app, " Resorts ".to_string()));
    frame.render_widget(intro, chunks[0]);

    render_metrics(frame, app, view, chunks[1]);
}

/// Render the metrics table in display order.
pub fn render_metrics(frame: &mut Frame, app: &App, view: &ViewModel, area: Rect) {
    let header = Row::new(vec![
        Cell::from("Indicador"),
        Cell::from("Valor"),
        Cell::from("Estado"),
        Cell::from("Actualizado"),
    ])
    .height(1)
    .style(app.theme.header_style());

    let rows: Vec<Row> = view
        .metrics
        .iter()
        .map(|m| {
            Row::new(vec![
                Cell::from(m.label.clone()),
                Cell::from(m.value.clone()),
                Cell::from(m.status.label()).style(app.theme.status_style(m.status)),
                Cell::from(m.last_update_label.clone())
                    .style(Style::default().add_modifier(Modifier::DIM)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Fill(3),
        Constraint::Fill(2),
        Constraint::Length(12),
        Constraint::Length(12),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block(app, format!(" Estado ({}) ", view.metrics.len())));

    frame.render_widget(table, area);
}

fn render_reservations(frame: &mut Frame, app: &App, area: Rect) {
    let text = vec![
        Line::from(""),
        Line::from(" Suite Vista al Mar · 2 huéspedes · 3 noches"),
        Line::from(""),
        Line::from(vec![
            Span::raw(" Pulsa "),
            Span::styled("b", app.theme.accent_style().add_modifier(Modifier::BOLD)),
            Span::raw(" para solicitar la reserva"),
        ]),
    ];
    frame.render_widget(Paragraph::new(text).block(block(app, " Reservas ".to_string())), area);
}

fn render_account(frame: &mut Frame, app: &App, area: Rect) {
    let text = vec![
        Line::from(""),
        Line::from(" Huésped: Ana Torres"),
        Line::from(" Programa: Socio Oro"),
        Line::from(" Estancias: 4"),
    ];
    frame.render_widget(Paragraph::new(text).block(block(app, " Cuenta ".to_string())), area);
}

fn render_placeholder(frame: &mut Frame, app: &App, tab: &str, area: Rect) {
    let text = Line::from(Span::styled(
        " Sin contenido para esta pestaña",
        Style::default().add_modifier(Modifier::DIM),
    ));
    frame.render_widget(Paragraph::new(text).block(block(app, format!(" {} ", tab))), area);
}

fn render_not_found(frame: &mut Frame, app: &App, view: &ViewModel, area: Rect) {
    let text = vec![
        Line::from(""),
        Line::from(format!(" Ruta no encontrada: {}", view.route)),
        Line::from(Span::styled(
            " Pulsa Esc para volver o Tab para ir a una pestaña",
            Style::default().add_modifier(Modifier::DIM),
        )),
    ];
    frame.render_widget(Paragraph::new(text).block(block(app, " Huésped ".to_string())), area);
}
