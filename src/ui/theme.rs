//! Theme definitions for carewheel
//!
//! Provides two built-in themes: Midnight and High contrast.
//! Option cards take their colors from the option table; the theme
//! covers everything around them.

use crate::config::ThemeName;
use ratatui::style::{Color, Modifier, Style};

/// Complete theme with all required colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Base colors
    pub bg: Color,
    pub fg: Color,
    pub fg_dim: Color,

    // Accent colors
    pub accent: Color,
    pub accent_dim: Color,

    // Status colors
    pub success: Color,
    pub error: Color,

    // UI element colors
    pub border: Color,
    pub border_focused: Color,
}

impl Theme {
    /// Create a theme from a theme name
    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Midnight => Self::midnight(),
            ThemeName::HighContrast => Self::high_contrast(),
        }
    }

    /// Midnight theme (default): calm dark blue ward-room look
    pub fn midnight() -> Self {
        Self {
            // Base
            bg: Color::Rgb(13, 17, 40),           // #0d1128
            fg: Color::Rgb(226, 232, 240),        // #e2e8f0
            fg_dim: Color::Rgb(120, 130, 155),    // #78829b

            // Accent (sky blue)
            accent: Color::Rgb(56, 189, 248),     // #38bdf8
            accent_dim: Color::Rgb(14, 116, 178), // #0e74b2

            // Status
            success: Color::Rgb(74, 222, 128),    // #4ade80
            error: Color::Rgb(248, 113, 113),     // #f87171

            // UI elements
            border: Color::Rgb(45, 55, 90),       // #2d375a
            border_focused: Color::Rgb(56, 189, 248), // #38bdf8
        }
    }

    /// High contrast theme: terminal palette colors only
    ///
    /// Sticks to the named ANSI colors so low-vision palettes set at
    /// the terminal level carry through.
    pub fn high_contrast() -> Self {
        Self {
            // Base
            bg: Color::Black,
            fg: Color::White,
            fg_dim: Color::Gray,

            // Accent
            accent: Color::Yellow,
            accent_dim: Color::DarkGray,

            // Status
            success: Color::Green,
            error: Color::Red,

            // UI elements
            border: Color::White,
            border_focused: Color::Yellow,
        }
    }

    // Style helpers for common UI patterns

    /// Default text style
    pub fn text(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    /// Dimmed text style
    pub fn text_dim(&self) -> Style {
        Style::default().fg(self.fg_dim).bg(self.bg)
    }

    /// Title/header style
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .bg(self.bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Background fill for blocks
    pub fn block_style(&self) -> Style {
        Style::default().bg(self.bg)
    }

    /// Border style (unfocused)
    pub fn border(&self) -> Style {
        Style::default().fg(self.border).bg(self.bg)
    }

    /// Border style (focused)
    pub fn border_focused(&self) -> Style {
        Style::default().fg(self.border_focused).bg(self.bg)
    }

    /// Success message style
    pub fn success(&self) -> Style {
        Style::default().fg(self.success).bg(self.bg)
    }

    /// Error message style
    pub fn error(&self) -> Style {
        Style::default().fg(self.error).bg(self.bg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_from_name() {
        let midnight = Theme::from_name(ThemeName::Midnight);
        assert_eq!(midnight.bg, Color::Rgb(13, 17, 40));

        let high_contrast = Theme::from_name(ThemeName::HighContrast);
        assert_eq!(high_contrast.bg, Color::Black);
        assert_eq!(high_contrast.fg, Color::White);
    }
}
