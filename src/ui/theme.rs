//! Light and dark palettes for the TUI.
//!
//! Status colors are shared by both palettes and looked up through
//! [`Tone`]; only the accent and muted colors depend on the terminal
//! background.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::block::BorderType;

use crate::feed::{MetricStatus, Tone};

/// Colors the renderers draw with.
///
/// Use [`Theme::auto_detect()`] to pick a palette from the terminal
/// background, or [`Theme::dark()`]/[`Theme::light()`] explicitly.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Prompts, focused borders and the active tab.
    pub accent: Color,
    /// Frames and anything that should recede.
    pub muted: Color,
    pub success: Color,
    pub warning: Color,
    /// Critical metrics and the error dialog.
    pub danger: Color,
    pub border_type: BorderType,
}

impl Theme {
    fn with_accent(accent: Color, muted: Color) -> Self {
        Self {
            accent,
            muted,
            success: Color::Green,
            warning: Color::Yellow,
            danger: Color::Red,
            border_type: BorderType::Rounded,
        }
    }

    /// Palette for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self::with_accent(Color::Cyan, Color::Gray)
    }

    /// Palette for light terminal backgrounds.
    pub fn light() -> Self {
        Self::with_accent(Color::Blue, Color::DarkGray)
    }

    /// Pick a palette from the terminal's background luminance.
    ///
    /// Falls back to dark when the terminal does not answer.
    pub fn auto_detect() -> Self {
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => Self::light(),
            _ => Self::dark(),
        }
    }

    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Section titles and table header rows.
    pub fn header_style(&self) -> Style {
        self.accent_style().add_modifier(Modifier::BOLD)
    }

    pub fn tab_style(&self, active: bool) -> Style {
        if active {
            self.header_style()
        } else {
            Style::default().fg(self.muted)
        }
    }

    pub fn tone_style(&self, tone: Tone) -> Style {
        match tone {
            Tone::Success => Style::default().fg(self.success),
            Tone::Warning => Style::default().fg(self.warning),
            Tone::Danger => Style::default().fg(self.danger).add_modifier(Modifier::BOLD),
            Tone::Neutral => Style::default().fg(self.muted),
        }
    }

    pub fn status_style(&self, status: MetricStatus) -> Style {
        self.tone_style(status.tone())
    }
}
