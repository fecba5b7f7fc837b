//! Plain-data rendering output.
//!
//! [`ViewModel`] is everything a renderer needs: the active tab, both dialog
//! states and the current metrics. The terminal UI draws from it and the
//! `--dump` mode prints it as JSON.

use serde::Serialize;

use crate::app::App;
use crate::dialog::DialogState;
use crate::feed::Metric;

/// A tab as the renderer sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabView {
    pub id: String,
    pub label: String,
    pub href: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DialogsView {
    pub error: DialogState,
    pub error_message: Option<String>,
    pub confirmation: DialogState,
}

/// Snapshot of the screen state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewModel {
    pub route: String,
    pub active_tab: Option<String>,
    pub tabs: Vec<TabView>,
    pub dialogs: DialogsView,
    pub ticks: u64,
    pub metrics: Vec<Metric>,
}

impl ViewModel {
    /// Assemble the view model from the current app state.
    pub fn compose(app: &App) -> Self {
        let active_tab = app.nav.active_tab().map(str::to_string);
        let tabs = app
            .nav
            .items()
            .iter()
            .map(|item| TabView {
                id: item.id.clone(),
                label: item.label.clone(),
                href: item.href.clone(),
                active: app.nav.is_active(&item.id),
            })
            .collect();

        Self {
            route: app.nav.current_path().to_string(),
            active_tab,
            tabs,
            dialogs: DialogsView {
                error: app.error_dialog.state(),
                error_message: app.error_message.clone(),
                confirmation: app.confirm_dialog.state(),
            },
            ticks: app.feed.ticks,
            metrics: app.feed.metrics.clone(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::feed::{default_metrics, StaticSource};
    use crate::ui::Theme;

    fn app(route: &str) -> App {
        let settings = Settings {
            initial_route: route.to_string(),
            ..Settings::default()
        };
        let mut app = App::new(Box::new(StaticSource::new(default_metrics())), &settings, Theme::dark());
        app.refresh_metrics();
        app
    }

    #[test]
    fn test_compose_marks_single_active_tab() {
        let view = ViewModel::compose(&app("/huesped/account"));
        assert_eq!(view.active_tab.as_deref(), Some("account"));
        let active: Vec<_> = view.tabs.iter().filter(|t| t.active).map(|t| t.id.as_str()).collect();
        assert_eq!(active, vec!["account"]);
    }

    #[test]
    fn test_compose_unmatched_route() {
        let view = ViewModel::compose(&app("/huesped/spa"));
        assert!(view.active_tab.is_none());
        assert!(view.tabs.iter().all(|t| !t.active));
    }

    #[test]
    fn test_compose_dialogs_and_metrics() {
        let mut app = app("/huesped/reservations");
        app.request_reservation();
        let view = ViewModel::compose(&app);
        assert_eq!(view.dialogs.confirmation, DialogState::Open);
        assert_eq!(view.dialogs.error, DialogState::Closed);
        assert_eq!(view.metrics, default_metrics());
        assert_eq!(view.ticks, 0);
    }

    #[test]
    fn test_json_shape() {
        let json = ViewModel::compose(&app("/huesped/resorts/")).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["active_tab"], "resorts");
        assert_eq!(value["dialogs"]["error"], "closed");
        assert_eq!(value["metrics"][0]["id"], "occupancy");
        assert_eq!(value["metrics"][1]["status"], "warning");
    }
}
