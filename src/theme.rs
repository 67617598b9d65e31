// Theme system for the TUI
//
// Two palettes, dark and light, mirroring the page's dark-mode toggle.
// The active theme is persisted to the config file the moment it changes,
// so the choice survives restarts.

use ratatui::style::{Color, Modifier, Style};

/// Available themes. Toggling flips between the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
}

impl ThemeKind {
    pub fn toggle(self) -> Self {
        match self {
            ThemeKind::Dark => ThemeKind::Light,
            ThemeKind::Light => ThemeKind::Dark,
        }
    }

    /// Display name, also the value written to the config file.
    pub fn name(&self) -> &'static str {
        match self {
            ThemeKind::Dark => "dark",
            ThemeKind::Light => "light",
        }
    }

    /// Parse a config value; unknown names fall back to dark.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "light" => ThemeKind::Light,
            _ => ThemeKind::Dark,
        }
    }

    pub fn theme(&self) -> Theme {
        match self {
            ThemeKind::Dark => Theme::dark(),
            ThemeKind::Light => Theme::light(),
        }
    }
}

/// Complete theme definition with all UI colors.
#[derive(Debug, Clone)]
pub struct Theme {
    // Base colors
    pub bg: Color,
    pub fg: Color,
    pub border: Color,

    // Header and footer
    pub title: Color,
    pub shadow: Color,
    pub status_bar: Color,

    // Nav dots
    pub dot: Color,
    pub dot_active: Color,

    // Section content
    pub heading: Color,
    pub rule: Color,
    pub dim: Color,
    pub faint: Color,

    // Product grid
    pub price: Color,
    pub badge: Color,
    pub search_match: Color,
    pub hint: Color,

    // Selection in menus
    pub selected_bg: Color,
    pub selected_fg: Color,

    // Overlays
    pub toast_border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb(24, 24, 28),
            fg: Color::Rgb(224, 222, 214),
            border: Color::Rgb(90, 88, 82),

            title: Color::Rgb(240, 198, 116),
            shadow: Color::Rgb(60, 58, 52),
            status_bar: Color::Rgb(150, 148, 140),

            dot: Color::Rgb(90, 88, 82),
            dot_active: Color::Rgb(240, 198, 116),

            heading: Color::Rgb(240, 198, 116),
            rule: Color::Rgb(90, 88, 82),
            dim: Color::Rgb(130, 128, 120),
            faint: Color::Rgb(70, 68, 62),

            price: Color::Rgb(163, 190, 140),
            badge: Color::Rgb(224, 108, 117),
            search_match: Color::Rgb(240, 198, 116),
            hint: Color::Rgb(130, 128, 120),

            selected_bg: Color::Rgb(58, 56, 50),
            selected_fg: Color::Rgb(240, 198, 116),

            toast_border: Color::Rgb(224, 108, 117),
        }
    }

    pub fn light() -> Self {
        Self {
            bg: Color::Rgb(247, 243, 235),
            fg: Color::Rgb(52, 48, 40),
            border: Color::Rgb(170, 162, 148),

            title: Color::Rgb(146, 100, 12),
            shadow: Color::Rgb(200, 192, 178),
            status_bar: Color::Rgb(120, 112, 98),

            dot: Color::Rgb(170, 162, 148),
            dot_active: Color::Rgb(146, 100, 12),

            heading: Color::Rgb(146, 100, 12),
            rule: Color::Rgb(170, 162, 148),
            dim: Color::Rgb(130, 122, 108),
            faint: Color::Rgb(200, 192, 178),

            price: Color::Rgb(90, 118, 60),
            badge: Color::Rgb(176, 58, 66),
            search_match: Color::Rgb(146, 100, 12),
            hint: Color::Rgb(130, 122, 108),

            selected_bg: Color::Rgb(230, 222, 206),
            selected_fg: Color::Rgb(146, 100, 12),

            toast_border: Color::Rgb(176, 58, 66),
        }
    }

    // Helper methods for creating styles

    pub fn base_style(&self) -> Style {
        Style::default().fg(self.fg)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn title_style(&self) -> Style {
        Style::default().fg(self.title).add_modifier(Modifier::BOLD)
    }

    pub fn heading_style(&self) -> Style {
        Style::default()
            .fg(self.heading)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_style(&self) -> Style {
        Style::default().fg(self.status_bar)
    }

    pub fn hint_style(&self) -> Style {
        Style::default().fg(self.hint).add_modifier(Modifier::ITALIC)
    }

    pub fn selected_style(&self) -> Style {
        Style::default()
            .bg(self.selected_bg)
            .fg(self.selected_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for section body text at a given reveal progress.
    /// Early in the enter animation text renders faint, then dim, then full.
    pub fn reveal_style(&self, progress: f64) -> Style {
        if progress < 0.35 {
            Style::default().fg(self.faint)
        } else if progress < 0.8 {
            Style::default().fg(self.dim)
        } else {
            self.base_style()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_between_the_two() {
        assert_eq!(ThemeKind::Dark.toggle(), ThemeKind::Light);
        assert_eq!(ThemeKind::Light.toggle(), ThemeKind::Dark);
        assert_eq!(ThemeKind::Dark.toggle().toggle(), ThemeKind::Dark);
    }

    #[test]
    fn from_name_round_trips_and_defaults_to_dark() {
        assert_eq!(ThemeKind::from_name("light"), ThemeKind::Light);
        assert_eq!(ThemeKind::from_name("Light "), ThemeKind::Light);
        assert_eq!(ThemeKind::from_name("dark"), ThemeKind::Dark);
        assert_eq!(ThemeKind::from_name("solarized"), ThemeKind::Dark);
        for kind in [ThemeKind::Dark, ThemeKind::Light] {
            assert_eq!(ThemeKind::from_name(kind.name()), kind);
        }
    }

    #[test]
    fn reveal_style_settles_on_base() {
        let theme = Theme::dark();
        assert_eq!(theme.reveal_style(1.0), theme.base_style());
        assert_ne!(theme.reveal_style(0.0), theme.base_style());
    }
}
