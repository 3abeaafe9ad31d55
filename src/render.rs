//! Rendering subsystem: the renderer trait, the crossterm terminal, and region painting.

pub mod ui;

pub use ui::{ColorTheme, DashboardView, TerminalUI, UIRenderer};
