//! Per-frame view data handed to the renderer.

use crate::app::state::AppState;

/// Hint shown in the help region.
pub const HELP_HINT: &str = "Type ? for help";

/// Everything a frame needs besides the region registry.
#[derive(Debug, Clone, Copy)]
pub struct DashboardView<'a> {
    pub state: &'a AppState,
    pub library: &'a [String],
    pub welcome: &'a str,
    /// Draw the key binding popup over this frame.
    pub help_overlay: bool,
}

impl<'a> DashboardView<'a> {
    pub fn new(state: &'a AppState, library: &'a [String], welcome: &'a str) -> Self {
        Self {
            state,
            library,
            welcome,
            help_overlay: false,
        }
    }

    pub fn with_help_overlay(mut self, show: bool) -> Self {
        self.help_overlay = show;
        self
    }
}
