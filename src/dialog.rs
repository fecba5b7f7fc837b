//! Open/closed state for modal dialogs.
//!
//! Each dialog owns its own [`DialogController`]; semantically different
//! dialogs (error, confirmation) never share one.

use serde::Serialize;

/// Visibility of a single dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DialogState {
    #[default]
    Closed,
    Open,
}

/// Two-state controller for one dialog instance.
///
/// Both transitions are idempotent: opening an open dialog or closing a
/// closed one leaves the state unchanged.
#[derive(Debug, Clone, Default)]
pub struct DialogController {
    name: &'static str,
    state: DialogState,
}

impl DialogController {
    /// Create a closed controller. `name` only appears in logs.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            state: DialogState::Closed,
        }
    }

    pub fn state(&self) -> DialogState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == DialogState::Open
    }

    pub fn open(&mut self) {
        if self.state == DialogState::Closed {
            tracing::debug!(dialog = self.name, "dialog opened");
        }
        self.state = DialogState::Open;
    }

    pub fn close(&mut self) {
        if self.state == DialogState::Open {
            tracing::debug!(dialog = self.name, "dialog closed");
        }
        self.state = DialogState::Closed;
    }

    /// Apply a visibility change requested by the rendering layer.
    pub fn on_open_change(&mut self, open: bool) {
        if open {
            self.open();
        } else {
            self.close();
        }
    }
}
