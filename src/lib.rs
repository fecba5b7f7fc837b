//! # huesped
//!
//! Terminal front end for the hotel guest app.
//!
//! The crate holds the presentation state behind the guest views: which
//! tab the current route belongs to, which dialogs are open, and a resort
//! status panel that refreshes itself on a timer. A ratatui front end
//! renders that state; the same state can also be dumped as JSON.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                         Application                          │
//! │  ┌─────────┐    ┌──────────┐    ┌─────────┐    ┌──────────┐ │
//! │  │  app    │───▶│   view   │───▶│   ui    │───▶│ Terminal │ │
//! │  │ (state) │    │(ViewModel)    │(ratatui)│    │          │ │
//! │  └────┬────┘    └──────────┘    └─────────┘    └──────────┘ │
//! │       │  nav · dialog                                       │
//! │       ▼                                                      │
//! │  ┌─────────┐                                                 │
//! │  │  feed   │◀── poller task (tick every 30s) | StaticSource  │
//! │  └─────────┘                                                 │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`nav`]**: active tab derived from the current route
//! - **[`dialog`]**: open/closed controller, one per dialog
//! - **[`feed`]**: metrics, the periodic refresh task and the
//!   [`MetricsSource`] trait the app reads through
//! - **[`app`]**: application state tying the above together
//! - **[`view`]**: the plain-data [`ViewModel`] handed to renderers
//! - **[`ui`]**: ratatui rendering
//! - **[`config`]**: layered [`Settings`]
//!
//! ## Usage
//!
//! ```
//! use huesped::nav::{compute_active_tab, default_items};
//!
//! let items = default_items();
//! assert_eq!(compute_active_tab("/huesped/resorts/", &items), Some("resorts"));
//! assert_eq!(compute_active_tab("/huesped/spa", &items), None);
//! ```
//!
//! ### With a live feed
//!
//! ```
//! use std::time::Duration;
//! use huesped::{App, MetricsFeed, Settings, ViewModel};
//! use huesped::feed::spawn_poller;
//! use huesped::ui::Theme;
//!
//! # tokio_test::block_on(async {
//! let settings = Settings::default();
//! let feed = MetricsFeed::new(settings.metrics.clone());
//! let (handle, source) = spawn_poller(feed, settings.refresh_period());
//!
//! let mut app = App::new(Box::new(source), &settings, Theme::dark());
//! app.refresh_metrics();
//! let view = ViewModel::compose(&app);
//! assert_eq!(view.active_tab.as_deref(), Some("resorts"));
//!
//! handle.shutdown().await;
//! # });
//! ```

pub mod app;
pub mod config;
pub mod dialog;
pub mod events;
pub mod feed;
pub mod nav;
pub mod ui;
pub mod view;

// Re-export main types for convenience
pub use app::App;
pub use config::Settings;
pub use dialog::{DialogController, DialogState};
pub use feed::{
    FeedSnapshot, FeedSource, Metric, MetricStatus, MetricsFeed, MetricsSource, PollerHandle,
    StaticSource,
};
pub use nav::{compute_active_tab, NavItem, NavigationState};
pub use view::ViewModel;
