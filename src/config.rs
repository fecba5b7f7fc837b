//! Layered settings.
//!
//! Built-in defaults, then an optional TOML file, then `HUESPED__*`
//! environment variables. Command-line flags are applied on top by the
//! binary.
//!
//! ```toml
//! refresh_secs = 30
//! initial_route = "/huesped/resorts"
//!
//! [booking]
//! dates_available = false
//!
//! [[nav]]
//! id = "resorts"
//! label = "Resorts"
//! href = "/huesped/resorts"
//!
//! [[metrics]]
//! id = "wifi"
//! label = "Wi-Fi"
//! value = "Estable"
//! status = "normal"
//! last_update_label = "Hace 1 min"
//! ```

use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

use crate::feed::{default_metrics, Metric, DEFAULT_PERIOD};
use crate::nav::{default_items, NavItem};

/// Route shown when nothing else is configured.
pub const DEFAULT_ROUTE: &str = "/huesped/resorts";

/// Booking stub behaviour.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BookingSettings {
    /// When false, confirming a reservation opens the error dialog.
    pub dates_available: bool,
}

impl Default for BookingSettings {
    fn default() -> Self {
        Self {
            dates_available: true,
        }
    }
}

/// Everything the guest app can be configured with.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Seconds between metric refreshes.
    pub refresh_secs: u64,
    pub initial_route: String,
    pub nav: Vec<NavItem>,
    pub metrics: Vec<Metric>,
    pub booking: BookingSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            refresh_secs: DEFAULT_PERIOD.as_secs(),
            initial_route: DEFAULT_ROUTE.to_string(),
            nav: default_items(),
            metrics: default_metrics(),
            booking: BookingSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings, layering an optional file and the environment over
    /// the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
        }
        builder = builder.add_source(Environment::with_prefix("HUESPED").separator("__"));

        let settings: Settings = builder
            .build()
            .context("failed to read settings")?
            .try_deserialize()
            .context("invalid settings")?;
        settings.validate()?;
        Ok(settings)
    }

    /// Parse settings from a TOML string layered over the defaults.
    pub fn from_toml(content: &str) -> Result<Self> {
        let settings: Settings = Config::builder()
            .add_source(File::from_str(content, FileFormat::Toml))
            .build()
            .context("failed to read settings")?
            .try_deserialize()
            .context("invalid settings")?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.refresh_secs == 0 {
            bail!("refresh_secs must be at least 1");
        }
        if self.nav.is_empty() {
            bail!("at least one nav item is required");
        }
        Ok(())
    }

    pub fn refresh_period(&self) -> Duration {
        Duration::from_secs(self.refresh_secs)
    }
}
