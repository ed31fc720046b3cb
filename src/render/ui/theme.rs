//! Color theme and styling definitions using ratatui colors
//!
//! Themes map game elements onto ratatui styles directly; there is no intermediate
//! palette type.

use crate::game::FoodKind;
use ratatui::style::{Color, Modifier, Style};

/// Color theme for the board, side panel and status line
#[derive(Debug, Clone, PartialEq)]
pub struct ColorTheme {
    /// Board border and panel frames
    pub border: Style,

    /// Snake head
    pub snake_head: Style,

    /// Snake head while phasing through walls
    pub snake_head_phase: Style,

    /// Snake body
    pub snake_body: Style,

    /// Food colors, indexed by kind
    pub food: [Style; 7],

    /// Panel labels
    pub label: Style,

    /// Highlighted panel values (score, active power-ups)
    pub highlight: Style,

    /// Status line background
    pub status_bg: Color,

    /// Status line text
    pub status_fg: Color,

    /// Overlay box (menu, pause, game over)
    pub overlay: Style,
}

impl Default for ColorTheme {
    fn default() -> Self {
        let fg = |color| Style::default().fg(color);
        Self {
            border: fg(Color::DarkGray),
            snake_head: fg(Color::LightGreen).add_modifier(Modifier::BOLD),
            snake_head_phase: fg(Color::LightMagenta).add_modifier(Modifier::BOLD),
            snake_body: fg(Color::Green),
            food: [
                fg(Color::Red),
                fg(Color::Yellow),
                fg(Color::Cyan),
                fg(Color::LightYellow).add_modifier(Modifier::BOLD),
                fg(Color::Magenta),
                fg(Color::LightMagenta),
                fg(Color::LightRed).add_modifier(Modifier::BOLD | Modifier::SLOW_BLINK),
            ],
            label: fg(Color::Gray),
            highlight: fg(Color::LightCyan).add_modifier(Modifier::BOLD),
            status_bg: Color::Blue,
            status_fg: Color::White,
            overlay: Style::default().fg(Color::White).bg(Color::Black),
        }
    }
}

impl ColorTheme {
    /// Monochrome theme for terminals without color support
    pub fn monochrome() -> Self {
        let plain = Style::default();
        let bold = plain.add_modifier(Modifier::BOLD);
        Self {
            border: plain,
            snake_head: bold,
            snake_head_phase: bold.add_modifier(Modifier::REVERSED),
            snake_body: plain,
            food: [
                plain, bold, bold, bold, bold, bold, bold,
            ],
            label: plain,
            highlight: bold,
            status_bg: Color::Black,
            status_fg: Color::White,
            overlay: plain.add_modifier(Modifier::REVERSED),
        }
    }

    /// High-contrast theme for accessibility
    pub fn high_contrast() -> Self {
        let fg = |color| Style::default().fg(color).add_modifier(Modifier::BOLD);
        Self {
            border: fg(Color::White),
            snake_head: fg(Color::LightGreen),
            snake_head_phase: fg(Color::LightMagenta),
            snake_body: fg(Color::White),
            food: [
                fg(Color::LightRed),
                fg(Color::LightYellow),
                fg(Color::LightCyan),
                fg(Color::Yellow),
                fg(Color::LightMagenta),
                fg(Color::LightBlue),
                fg(Color::LightRed),
            ],
            label: fg(Color::White),
            highlight: fg(Color::LightYellow),
            status_bg: Color::White,
            status_fg: Color::Black,
            overlay: Style::default().fg(Color::Black).bg(Color::White),
        }
    }

    pub fn food_style(&self, kind: FoodKind) -> Style {
        let index = FoodKind::ALL
            .iter()
            .position(|&candidate| candidate == kind)
            .unwrap_or(0);
        self.food[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme() {
        let theme = ColorTheme::default();
        assert_eq!(theme.status_fg, Color::White);
        assert_eq!(theme.status_bg, Color::Blue);
        assert_eq!(theme.snake_body.fg, Some(Color::Green));
        assert_eq!(theme.food_style(FoodKind::Normal).fg, Some(Color::Red));
        assert_eq!(theme.food_style(FoodKind::Speed).fg, Some(Color::Yellow));
    }

    #[test]
    fn test_monochrome_theme() {
        let theme = ColorTheme::monochrome();
        assert_eq!(theme.snake_body.fg, None);
        assert_eq!(theme.status_bg, Color::Black);
        for kind in FoodKind::ALL {
            assert_eq!(theme.food_style(kind).fg, None);
        }
    }

    #[test]
    fn test_high_contrast_theme() {
        let theme = ColorTheme::high_contrast();
        assert_eq!(theme.status_bg, Color::White);
        assert_eq!(theme.status_fg, Color::Black);
        assert_eq!(theme.food_style(FoodKind::Mega).fg, Some(Color::LightRed));
    }
}
