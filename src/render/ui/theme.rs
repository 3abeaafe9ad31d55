//! Color theme and styling definitions using ratatui colors
//!
//! Regions do not pick colors directly; they name a [`ColorRole`] for their focused and
//! unfocused state and the active [`ColorTheme`] resolves the role to a style.

use ratatui::style::{Color, Modifier, Style};
use std::fmt;
use std::str::FromStr;

use crate::error::DashboardError;

/// Named rendering style applied to a region's border and title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    /// Unfocused border
    Idle,
    SearchAccent,
    LibraryAccent,
    PlaylistAccent,
    MainAccent,
    ProgressAccent,
    HelpAccent,
}

/// Theme selectable from the command line or the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeChoice {
    #[default]
    Default,
    Monochrome,
    HighContrast,
}

impl FromStr for ThemeChoice {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" => Ok(Self::Default),
            "monochrome" | "mono" => Ok(Self::Monochrome),
            "high-contrast" | "high_contrast" => Ok(Self::HighContrast),
            other => Err(DashboardError::invalid_argument(format!(
                "unknown theme '{other}' (expected default, monochrome or high-contrast)"
            ))),
        }
    }
}

impl fmt::Display for ThemeChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ThemeChoice::Default => "default",
            ThemeChoice::Monochrome => "monochrome",
            ThemeChoice::HighContrast => "high-contrast",
        };
        f.write_str(name)
    }
}

/// Color theme for terminal UI elements
#[derive(Debug, Clone)]
pub struct ColorTheme {
    /// Region background and body text
    pub base: Style,

    /// Border and title of unfocused regions
    pub idle: Style,

    /// Per-region accent colors used while focused
    pub search_accent: Color,
    pub library_accent: Color,
    pub playlist_accent: Color,
    pub main_accent: Color,
    pub progress_accent: Color,
    pub help_accent: Color,

    /// Highlighted library entry in list selection
    pub selection: Style,

    /// Key names in the help overlay and help hint
    pub key_hint: Style,

    /// Error modal text
    pub error_text: Color,

    /// Whether this theme needs a color-capable terminal
    pub requires_color: bool,
}

const BACKGROUND: Color = Color::Rgb(4, 37, 46);
const FOREGROUND: Color = Color::Rgb(61, 94, 103);

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            base: Style::default().fg(FOREGROUND).bg(BACKGROUND),
            idle: Style::default().fg(FOREGROUND).bg(BACKGROUND),
            search_accent: Color::Rgb(0, 255, 255),
            library_accent: Color::Rgb(226, 140, 236),
            playlist_accent: Color::Rgb(255, 121, 198),
            main_accent: Color::Rgb(0, 255, 255),
            progress_accent: Color::Rgb(61, 255, 255),
            help_accent: FOREGROUND,
            selection: Style::default()
                .fg(Color::Rgb(226, 140, 236))
                .add_modifier(Modifier::BOLD),
            key_hint: Style::default().fg(Color::Yellow),
            error_text: Color::Red,
            requires_color: true,
        }
    }
}

impl ColorTheme {
    pub fn from_choice(choice: ThemeChoice) -> Self {
        match choice {
            ThemeChoice::Default => Self::default(),
            ThemeChoice::Monochrome => Self::monochrome(),
            ThemeChoice::HighContrast => Self::high_contrast(),
        }
    }

    /// Theme for terminals without color support; focus is shown with bold borders only.
    pub fn monochrome() -> Self {
        Self {
            base: Style::default(),
            idle: Style::default(),
            search_accent: Color::Reset,
            library_accent: Color::Reset,
            playlist_accent: Color::Reset,
            main_accent: Color::Reset,
            progress_accent: Color::Reset,
            help_accent: Color::Reset,
            selection: Style::default().add_modifier(Modifier::REVERSED),
            key_hint: Style::default().add_modifier(Modifier::UNDERLINED),
            error_text: Color::Reset,
            requires_color: false,
        }
    }

    /// Create a high-contrast theme for accessibility
    pub fn high_contrast() -> Self {
        Self {
            base: Style::default().fg(Color::White).bg(Color::Black),
            idle: Style::default().fg(Color::Gray).bg(Color::Black),
            search_accent: Color::LightYellow,
            library_accent: Color::LightMagenta,
            playlist_accent: Color::LightRed,
            main_accent: Color::LightCyan,
            progress_accent: Color::LightGreen,
            help_accent: Color::White,
            selection: Style::default()
                .fg(Color::Black)
                .bg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
            key_hint: Style::default().fg(Color::LightYellow),
            error_text: Color::LightRed,
            requires_color: true,
        }
    }

    /// Resolve a role to the border/title style.
    pub fn role_style(&self, role: ColorRole) -> Style {
        let accent = match role {
            ColorRole::Idle => return self.idle,
            ColorRole::SearchAccent => self.search_accent,
            ColorRole::LibraryAccent => self.library_accent,
            ColorRole::PlaylistAccent => self.playlist_accent,
            ColorRole::MainAccent => self.main_accent,
            ColorRole::ProgressAccent => self.progress_accent,
            ColorRole::HelpAccent => self.help_accent,
        };
        if self.requires_color {
            self.idle.fg(accent)
        } else {
            self.idle.add_modifier(Modifier::BOLD)
        }
    }
}

/// Whether the environment describes a color-capable terminal.
///
/// `TERM` unset or `dumb` means no color unless `COLORTERM` says otherwise.
pub fn supports_color(term: Option<&str>, colorterm: Option<&str>) -> bool {
    if colorterm.is_some_and(|value| !value.is_empty()) {
        return true;
    }
    match term {
        Some(term) => !term.is_empty() && term != "dumb",
        None => cfg!(windows),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_uses_original_palette() {
        let theme = ColorTheme::default();
        assert_eq!(theme.base.bg, Some(Color::Rgb(4, 37, 46)));
        assert_eq!(theme.idle.fg, Some(Color::Rgb(61, 94, 103)));
        assert_eq!(
            theme.role_style(ColorRole::LibraryAccent).fg,
            Some(Color::Rgb(226, 140, 236))
        );
        assert_eq!(
            theme.role_style(ColorRole::PlaylistAccent).fg,
            Some(Color::Rgb(255, 121, 198))
        );
        assert_eq!(theme.role_style(ColorRole::Idle), theme.idle);
        assert!(theme.requires_color);
    }

    #[test]
    fn test_monochrome_marks_focus_with_bold() {
        let theme = ColorTheme::monochrome();
        let focused = theme.role_style(ColorRole::MainAccent);
        assert!(focused.add_modifier.contains(Modifier::BOLD));
        assert!(!theme
            .role_style(ColorRole::Idle)
            .add_modifier
            .contains(Modifier::BOLD));
        assert!(!theme.requires_color);
    }

    #[test]
    fn test_high_contrast_theme() {
        let theme = ColorTheme::high_contrast();
        assert_eq!(theme.base.fg, Some(Color::White));
        assert_eq!(theme.error_text, Color::LightRed);
        assert_eq!(
            theme.role_style(ColorRole::SearchAccent).fg,
            Some(Color::LightYellow)
        );
    }

    #[test]
    fn test_theme_choice_parsing() {
        assert_eq!("default".parse::<ThemeChoice>().unwrap(), ThemeChoice::Default);
        assert_eq!("Mono".parse::<ThemeChoice>().unwrap(), ThemeChoice::Monochrome);
        assert_eq!(
            "high-contrast".parse::<ThemeChoice>().unwrap(),
            ThemeChoice::HighContrast
        );
        assert!("solarized".parse::<ThemeChoice>().is_err());
        assert_eq!(ThemeChoice::HighContrast.to_string(), "high-contrast");
    }

    #[test]
    fn test_color_detection() {
        assert!(supports_color(Some("xterm-256color"), None));
        assert!(!supports_color(Some("dumb"), None));
        assert!(!supports_color(Some(""), None));
        assert!(supports_color(Some("dumb"), Some("truecolor")));
        assert!(!supports_color(Some("dumb"), Some("")));
        assert_eq!(supports_color(None, None), cfg!(windows));
    }
}
