//! Terminal rendering components.
//!
//! This module hosts the concrete terminal UI implementation along with the per-frame view
//! data, region painting, and styling utilities.

pub mod renderer;
pub mod state;
pub mod terminal;
pub mod theme;
pub mod widgets;

pub use renderer::UIRenderer;
pub use state::{DashboardView, HELP_HINT};
pub use terminal::TerminalUI;
pub use theme::{ColorRole, ColorTheme, ThemeChoice};

#[cfg(test)]
pub use renderer::tests::MockUIRenderer;

pub use ratatui::style::{Color, Style};
