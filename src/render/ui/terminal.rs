//! Terminal UI implementation using ratatui
//!
//! This module provides the concrete implementation of UIRenderer on top of the crossterm
//! backend. It owns the terminal session and the raw input collector; dashboard state stays
//! with the Application.

use crate::error::{DashboardError, Result};
use crate::input::{RawInputCollector, RawInputEvent};
use crate::registry::WindowRegistry;
use crate::render::ui::state::DashboardView;
use crate::render::ui::theme::{supports_color, ColorTheme};
use crate::render::ui::widgets::{draw_frame, paint_error_modal, paint_regions};
use crate::render::ui::UIRenderer;
use log::{debug, error};
use ratatui::crossterm::{
    event::KeyEventKind,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Terminal UI implementation with ratatui backend
pub struct TerminalUI {
    terminal: Option<CrosstermTerminal>,
    theme: ColorTheme,
    input: RawInputCollector,
}

impl TerminalUI {
    /// Create a new terminal UI instance with the default theme
    pub fn new() -> Self {
        Self::with_theme(ColorTheme::default())
    }

    /// Create terminal UI with custom theme
    pub fn with_theme(theme: ColorTheme) -> Self {
        Self {
            terminal: None,
            theme,
            input: RawInputCollector::new(),
        }
    }

    pub fn theme(&self) -> &ColorTheme {
        &self.theme
    }

    /// Color check against explicit `TERM`/`COLORTERM` values.
    fn check_color(theme: &ColorTheme, term: Option<&str>, colorterm: Option<&str>) -> Result<()> {
        if !theme.requires_color || supports_color(term, colorterm) {
            return Ok(());
        }
        Err(DashboardError::ColorUnsupported {
            term: term.unwrap_or("").to_string(),
        })
    }

    /// Wait for a key press, ignoring resizes and releases.
    fn wait_for_key(&mut self) -> Result<()> {
        loop {
            if let RawInputEvent::Key(key) = self.input.read_event()? {
                if key.kind != KeyEventKind::Release {
                    return Ok(());
                }
            }
        }
    }
}

impl Default for TerminalUI {
    fn default() -> Self {
        Self::new()
    }
}

impl UIRenderer for TerminalUI {
    fn render(&mut self, registry: &mut WindowRegistry, view: &DashboardView<'_>) -> Result<()> {
        paint_regions(registry, view, &self.theme)?;

        let theme = &self.theme;
        if let Some(terminal) = self.terminal.as_mut() {
            let registry = &*registry;
            terminal
                .draw(|frame| draw_frame(registry, view, theme, frame.buffer_mut()))
                .map_err(|err| DashboardError::terminal("Failed to draw frame", err))?;
        }
        Ok(())
    }

    fn next_event(&mut self) -> Result<Option<RawInputEvent>> {
        self.input.read_event().map(Some)
    }

    fn initialize(&mut self) -> Result<()> {
        enable_raw_mode().map_err(|err| DashboardError::terminal("Failed to enable raw mode", err))?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)
            .map_err(|err| DashboardError::terminal("Failed to enter alternate screen", err))?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;
        terminal.clear()?;
        self.terminal = Some(terminal);

        debug!("terminal initialized");
        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        if let Some(mut terminal) = self.terminal.take() {
            disable_raw_mode()?;
            execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
            terminal.show_cursor()?;
            debug!("terminal restored");
        }
        Ok(())
    }

    fn get_terminal_size(&self) -> Result<(u16, u16)> {
        let (cols, rows) = ratatui::crossterm::terminal::size()?;
        Ok((cols, rows))
    }

    fn check_environment(&self) -> Result<()> {
        let term = std::env::var("TERM").ok();
        let colorterm = std::env::var("COLORTERM").ok();
        Self::check_color(&self.theme, term.as_deref(), colorterm.as_deref())
    }

    fn show_fatal(&mut self, message: &str) -> Result<()> {
        error!("{message}");
        let theme = &self.theme;
        match self.terminal.as_mut() {
            Some(terminal) => {
                terminal.draw(|frame| paint_error_modal(frame.buffer_mut(), message, theme))?;
                self.wait_for_key()
            }
            None => {
                eprintln!("Error: {message}");
                Ok(())
            }
        }
    }
}

impl Drop for TerminalUI {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
