//! Common UI components shared across screens.
//!
//! This module contains the header bar, tab bar, status bar, and help overlay.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs},
    Frame,
};

use crate::app::App;
use crate::feed::{MetricStatus, Tone};
use crate::view::ViewModel;

/// Render the header bar with the resort status overview.
///
/// Displays: worst status indicator, metric counts by status, current route.
pub fn render_header(frame: &mut Frame, app: &App, view: &ViewModel, area: Rect) {
    let mut normal = 0;
    let mut warning = 0;
    let mut critical = 0;

    for metric in &view.metrics {
        match metric.status {
            MetricStatus::Normal => normal += 1,
            MetricStatus::Warning => warning += 1,
            MetricStatus::Critical => critical += 1,
            MetricStatus::Unknown => {}
        }
    }

    let status_style = if critical > 0 {
        app.theme.status_style(MetricStatus::Critical)
    } else if warning > 0 {
        app.theme.status_style(MetricStatus::Warning)
    } else {
        app.theme.status_style(MetricStatus::Normal)
    };

    let line = Line::from(vec![
        Span::styled(" ● ", status_style),
        Span::styled("HUÉSPED ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("│ "),
        Span::styled(format!("{}", normal), app.theme.tone_style(Tone::Success)),
        Span::raw(" ok "),
        count_span(warning, app.theme.tone_style(Tone::Warning)),
        Span::raw(" alerta "),
        count_span(critical, app.theme.tone_style(Tone::Danger)),
        Span::raw(" crítico │ "),
        Span::styled(view.route.clone(), Style::default().add_modifier(Modifier::DIM)),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

fn count_span(count: usize, style: Style) -> Span<'static> {
    if count > 0 {
        Span::styled(format!("{}", count), style)
    } else {
        Span::styled("0", Style::default().add_modifier(Modifier::DIM))
    }
}

/// Render the tab bar.
///
/// Highlights the tab owning the current route; a route no tab owns
/// leaves every tab unhighlighted.
pub fn render_tabs(frame: &mut Frame, app: &App, view: &ViewModel, area: Rect) {
    let titles: Vec<Line> = view
        .tabs
        .iter()
        .enumerate()
        .map(|(i, tab)| Line::from(format!(" {}:{} ", i + 1, tab.label)))
        .collect();

    let selected = view.tabs.iter().position(|tab| tab.active);

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(app.theme.tab_style(false))
        .highlight_style(app.theme.tab_style(true))
        .divider("|");

    frame.render_widget(tabs, area);
}

/// Render the status bar at the bottom.
///
/// Shows the route prompt while it is active, then any temporary status
/// message, then feed freshness and the available controls.
pub fn render_status_bar(frame: &mut Frame, app: &App, view: &ViewModel, area: Rect) {
    if app.route_input_active {
        let paragraph = Paragraph::new(format!(" ir a: {}_ | Enter:ir Esc:cancelar", app.route_input))
            .style(app.theme.accent_style());
        frame.render_widget(paragraph, area);
        return;
    }

    if let Some(msg) = app.get_status_message() {
        let paragraph =
            Paragraph::new(format!(" {} ", msg)).style(app.theme.accent_style());
        frame.render_widget(paragraph, area);
        return;
    }

    let freshness = match app.last_refresh {
        Some(at) => format!("actualizado hace {:.0}s", at.elapsed().as_secs_f64()),
        None => "cargando...".to_string(),
    };

    let status = format!(
        " {} | {} | ciclos: {} | Tab:cambiar g:ir b:reservar ?:ayuda q:salir",
        app.source_description(),
        freshness,
        view.ticks,
    );

    let paragraph = Paragraph::new(status).style(Style::default().add_modifier(Modifier::DIM));
    frame.render_widget(paragraph, area);
}

/// Render the help overlay with keyboard shortcuts.
///
/// Displayed as a centered modal on top of the current screen.
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let section = |title: &'static str| {
        Line::from(vec![Span::styled(title, Style::default().add_modifier(Modifier::BOLD))])
    };

    let help_text = vec![
        Line::from(vec![Span::styled("Atajos de teclado", app.theme.header_style())]),
        Line::from(""),
        section(" Navegación"),
        Line::from("  ←/→ h/l     Cambiar pestaña"),
        Line::from("  1-9         Ir a la pestaña"),
        Line::from("  g           Escribir una ruta"),
        Line::from("  Esc         Volver"),
        Line::from(""),
        section(" Reservas"),
        Line::from("  b           Solicitar reserva"),
        Line::from("  Enter/s     Confirmar"),
        Line::from("  Esc/n       Cancelar"),
        Line::from(""),
        section(" General"),
        Line::from("  r           Refrescar estado"),
        Line::from("  q           Salir"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Pulsa cualquier tecla para cerrar",
            Style::default().add_modifier(Modifier::DIM),
        )]),
    ];

    let block = Block::default()
        .title(" Ayuda ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(app.theme.accent_style());

    let paragraph = Paragraph::new(help_text).block(block);

    let help_area = centered(area, 42, 21);
    frame.render_widget(Clear, help_area);
    frame.render_widget(paragraph, help_area);
}

/// Center a `width` x `height` box in `area`, shrinking it to fit.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
