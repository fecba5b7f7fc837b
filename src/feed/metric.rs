//! Resort status metrics and their presentation mapping.

use std::ops::RangeInclusive;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Range the simulated "minutes since last update" is drawn from.
pub const DELAY_MINUTES: RangeInclusive<u8> = 1..=5;

/// Health of a single metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricStatus {
    Normal,
    Warning,
    Critical,
    /// Any status string not recognized above.
    #[serde(other)]
    Unknown,
}

/// Color classification for a status, resolved to a concrete style by the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Danger,
    Neutral,
}

impl MetricStatus {
    /// Label shown to guests.
    pub fn label(&self) -> &'static str {
        match self {
            MetricStatus::Normal => "Normal",
            MetricStatus::Warning => "Alerta",
            MetricStatus::Critical => "Crítico",
            MetricStatus::Unknown => "Desconocido",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            MetricStatus::Normal => Tone::Success,
            MetricStatus::Warning => Tone::Warning,
            MetricStatus::Critical => Tone::Danger,
            MetricStatus::Unknown => Tone::Neutral,
        }
    }
}

/// A single entry in the resort status panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    pub id: String,
    pub label: String,
    pub value: String,
    pub status: MetricStatus,
    pub last_update_label: String,
}

impl Metric {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        value: impl Into<String>,
        status: MetricStatus,
        last_update_label: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            value: value.into(),
            status,
            last_update_label: last_update_label.into(),
        }
    }
}

/// Metrics the status panel starts with.
pub fn default_metrics() -> Vec<Metric> {
    vec![
        Metric::new("occupancy", "Ocupación", "87%", MetricStatus::Normal, "Hace 2 min"),
        Metric::new("wifi", "Wi-Fi", "Intermitente", MetricStatus::Warning, "Hace 1 min"),
        Metric::new("temperature", "Temperatura piscina", "26°C", MetricStatus::Normal, "Hace 4 min"),
        Metric::new("elevator", "Ascensor B", "Fuera de servicio", MetricStatus::Critical, "Hace 3 min"),
    ]
}

/// Format a "minutes ago" label.
pub fn minutes_ago_label(minutes: u8) -> String {
    format!("Hace {} min", minutes)
}

/// Parse the minute count back out of a label produced by [`minutes_ago_label`].
pub fn parse_minutes_ago(label: &str) -> Option<u8> {
    label.strip_prefix("Hace ")?.strip_suffix(" min")?.parse().ok()
}

/// Give every metric a fresh "minutes ago" label.
///
/// Only `last_update_label` changes; ids, order, values and statuses are
/// left as they are.
pub fn refresh_labels<R: Rng + ?Sized>(metrics: &mut [Metric], rng: &mut R) {
    for metric in metrics.iter_mut() {
        metric.last_update_label = minutes_ago_label(rng.gen_range(DELAY_MINUTES));
    }
}
