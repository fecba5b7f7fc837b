//! Application state and guest-flow logic.

use std::time::{Duration, Instant};

use crate::config::{BookingSettings, Settings};
use crate::dialog::DialogController;
use crate::feed::{FeedSnapshot, MetricsSource};
use crate::nav::NavigationState;
use crate::ui::Theme;

/// How long a status message stays in the status bar.
const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(3);

/// Shown in the error dialog when the booking stub reports no availability.
pub const DATES_UNAVAILABLE: &str = "Las fechas seleccionadas no están disponibles";

/// Main application state.
pub struct App {
    pub running: bool,
    pub show_help: bool,

    pub nav: NavigationState,

    pub error_dialog: DialogController,
    pub error_message: Option<String>,
    pub confirm_dialog: DialogController,

    // Metrics
    source: Box<dyn MetricsSource>,
    pub feed: FeedSnapshot,
    pub last_refresh: Option<Instant>,
    feed_failure_reported: bool,

    // Route prompt
    pub route_input: String,
    pub route_input_active: bool,

    booking: BookingSettings,

    // UI
    pub theme: Theme,

    // Status message (temporary feedback)
    pub status_message: Option<(String, Instant)>,
}

impl App {
    /// Create a new App reading metrics from `source`.
    pub fn new(source: Box<dyn MetricsSource>, settings: &Settings, theme: Theme) -> Self {
        Self {
            running: true,
            show_help: false,
            nav: NavigationState::new(settings.nav.clone(), settings.initial_route.clone()),
            error_dialog: DialogController::new("error"),
            error_message: None,
            confirm_dialog: DialogController::new("confirm"),
            source,
            feed: FeedSnapshot::default(),
            last_refresh: None,
            feed_failure_reported: false,
            route_input: String::new(),
            route_input_active: false,
            booking: settings.booking.clone(),
            theme,
            status_message: None,
        }
    }

    /// Returns a description of the current metrics source.
    pub fn source_description(&self) -> &str {
        self.source.description()
    }

    /// Set a temporary status message that will be shown for a few seconds.
    pub fn set_status_message(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), Instant::now()));
    }

    /// Get the current status message if it hasn't expired.
    pub fn get_status_message(&self) -> Option<&str> {
        match &self.status_message {
            Some((msg, time)) if time.elapsed() < STATUS_MESSAGE_TTL => Some(msg),
            _ => None,
        }
    }

    /// Poll the metrics source for a new snapshot.
    ///
    /// Returns true if new data was received. A source that stops producing
    /// data opens the error dialog once.
    pub fn refresh_metrics(&mut self) -> bool {
        if let Some(snapshot) = self.source.poll() {
            self.feed = snapshot;
            self.last_refresh = Some(Instant::now());
            return true;
        }

        let failure = self.source.error().map(str::to_string);
        if let Some(message) = failure {
            if !self.feed_failure_reported {
                self.feed_failure_reported = true;
                tracing::warn!(error = %message, "metrics source failed");
                self.show_error(message);
            }
        }
        false
    }

    /// Open the error dialog with `message`.
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
        self.error_dialog.open();
    }

    /// Close the error dialog and forget its message.
    pub fn dismiss_error(&mut self) {
        self.error_dialog.on_open_change(false);
        self.error_message = None;
    }

    /// Ask the guest to confirm a reservation.
    pub fn request_reservation(&mut self) {
        self.confirm_dialog.open();
    }

    /// Guest confirmed the reservation in the confirmation dialog.
    pub fn confirm_reservation(&mut self) {
        if !self.confirm_dialog.is_open() {
            return;
        }
        self.confirm_dialog.close();
        if self.booking.dates_available {
            tracing::info!(route = %self.nav.current_path(), "reservation requested");
            self.set_status_message("Solicitud de reserva enviada");
        } else {
            tracing::info!("reservation rejected: dates unavailable");
            self.show_error(DATES_UNAVAILABLE);
        }
    }

    /// Guest dismissed the confirmation dialog.
    pub fn cancel_reservation(&mut self) {
        self.confirm_dialog.on_open_change(false);
    }

    /// Whether any modal dialog is currently shown.
    pub fn dialog_open(&self) -> bool {
        self.error_dialog.is_open() || self.confirm_dialog.is_open()
    }

    pub fn next_tab(&mut self) {
        self.nav.next_tab();
    }

    pub fn prev_tab(&mut self) {
        self.nav.prev_tab();
    }

    pub fn select_tab(&mut self, index: usize) {
        self.nav.select_tab(index);
    }

    /// Navigate back: close the topmost dialog first, then the previous route.
    pub fn go_back(&mut self) {
        if self.error_dialog.is_open() {
            self.dismiss_error();
            return;
        }
        if self.confirm_dialog.is_open() {
            self.cancel_reservation();
            return;
        }
        self.nav.back();
    }

    /// Enter route input mode.
    pub fn start_route_input(&mut self) {
        self.route_input.clear();
        self.route_input_active = true;
    }

    /// Leave route input mode without navigating.
    pub fn cancel_route_input(&mut self) {
        self.route_input.clear();
        self.route_input_active = false;
    }

    /// Navigate to the typed route and leave input mode.
    pub fn submit_route_input(&mut self) {
        let route = std::mem::take(&mut self.route_input);
        self.route_input_active = false;
        let route = route.trim();
        if !route.is_empty() {
            self.nav.navigate(route);
        }
    }

    pub fn route_input_push(&mut self, c: char) {
        self.route_input.push(c);
    }

    pub fn route_input_pop(&mut self) {
        self.route_input.pop();
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Signal the application to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }
}
