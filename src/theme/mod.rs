//! Color schemes for the terminal front end.

mod light;
mod slate;

use ratatui::style::{Color, Style};

pub use light::LIGHT;
pub use slate::SLATE;

pub const DEFAULT_THEME: &str = "slate";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub header: Style,
    pub row_highlight: Style,
    pub accent: Style,
    pub muted: Style,
    pub error: Style,
    pub badge: Style,
    pub cluster: Style,
    pub selected_pin: Style,
    pub coastline: Color,
}

impl Theme {
    #[must_use]
    pub fn header_style(&self) -> Style {
        self.header
    }

    #[must_use]
    pub fn row_highlight_style(&self) -> Style {
        self.row_highlight
    }

    #[must_use]
    pub fn accent_style(&self) -> Style {
        self.accent
    }

    #[must_use]
    pub fn muted_style(&self) -> Style {
        self.muted
    }

    #[must_use]
    pub fn error_style(&self) -> Style {
        self.error
    }

    #[must_use]
    pub fn badge_style(&self) -> Style {
        self.badge
    }

    #[must_use]
    pub fn cluster_style(&self) -> Style {
        self.cluster
    }

    #[must_use]
    pub fn selected_pin_style(&self) -> Style {
        self.selected_pin
    }

    #[must_use]
    pub fn header_fg(&self) -> Color {
        self.header.fg.unwrap_or(Color::Reset)
    }

    #[must_use]
    pub fn header_bg(&self) -> Color {
        self.header.bg.unwrap_or(Color::Reset)
    }

    #[must_use]
    pub fn row_highlight_bg(&self) -> Color {
        self.row_highlight.bg.unwrap_or(Color::Reset)
    }

    #[must_use]
    pub fn tab_inactive_style(&self) -> Style {
        Style::new()
            .fg(self.header_fg())
            .bg(self.row_highlight_bg())
    }

    #[must_use]
    pub fn tab_highlight_style(&self) -> Style {
        Style::new().bg(self.header_bg()).fg(self.header_fg())
    }
}

impl Default for Theme {
    fn default() -> Self {
        SLATE
    }
}

/// Definition for a built-in theme.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDefinition {
    pub name: &'static str,
    pub theme: Theme,
    pub aliases: &'static [&'static str],
}

const BUILTINS: [ThemeDefinition; 2] = [
    ThemeDefinition {
        name: "slate",
        theme: SLATE,
        aliases: &["dark", "default"],
    },
    ThemeDefinition {
        name: "light",
        theme: LIGHT,
        aliases: &[],
    },
];

/// Canonical names of the bundled themes.
#[must_use]
pub fn names() -> Vec<&'static str> {
    BUILTINS.iter().map(|definition| definition.name).collect()
}

/// Look a theme up by name or alias, ignoring case.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
    let wanted = name.trim();
    BUILTINS
        .iter()
        .find(|definition| {
            definition.name.eq_ignore_ascii_case(wanted)
                || definition
                    .aliases
                    .iter()
                    .any(|alias| alias.eq_ignore_ascii_case(wanted))
        })
        .map(|definition| definition.theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_accepts_aliases_and_case() {
        assert_eq!(by_name("Slate"), Some(SLATE));
        assert_eq!(by_name("dark"), Some(SLATE));
        assert_eq!(by_name("light"), Some(LIGHT));
        assert_eq!(by_name("solarized"), None);
    }

    #[test]
    fn default_theme_is_listed() {
        assert!(names().contains(&DEFAULT_THEME));
        assert_eq!(Theme::default(), SLATE);
    }
}
