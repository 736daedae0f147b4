//! Colour palettes for the dark and light themes

use crate::config::Theme;
use ratatui::style::{Color, Modifier, Style};

/// Colours used across the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Focus, titles, active borders
    pub accent: Color,
    /// Inactive borders and hints
    pub muted: Color,
    pub text: Color,
    pub background: Color,
    pub success: Color,
    pub danger: Color,
    pub warning: Color,
    pub status_bar: Color,
    pub status_text: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                accent: Color::Cyan,
                muted: Color::DarkGray,
                text: Color::White,
                background: Color::Reset,
                success: Color::Green,
                danger: Color::Red,
                warning: Color::Yellow,
                status_bar: Color::DarkGray,
                status_text: Color::Gray,
            },
            Theme::Light => Self {
                accent: Color::Blue,
                muted: Color::Gray,
                text: Color::Black,
                background: Color::White,
                success: Color::Green,
                danger: Color::Red,
                warning: Color::Magenta,
                status_bar: Color::Gray,
                status_text: Color::Black,
            },
        }
    }

    pub fn border(&self, focused: bool) -> Style {
        Style::default().fg(if focused { self.accent } else { self.muted })
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn hint(&self) -> Style {
        Style::default().fg(self.muted)
    }
}
