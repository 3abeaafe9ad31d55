//! Application orchestration layer
//!
//! The `Application` owns the dashboard state (mode, focus, region registry) and runs the
//! single-threaded event loop: wait for an event, apply it, redraw. The renderer and the
//! search/activation collaborators are injected as trait objects.

pub mod actions;
pub mod content;
pub mod resize;
pub mod state;

use crate::config::DashboardConfig;
use crate::error::Result;
use crate::input::{InputAction, InputStateMachine};
use crate::layout::SplitRatio;
use crate::registry::{WindowRegistry, REGION_SPECS};
use crate::render::ui::{DashboardView, UIRenderer};
use actions::DashboardActions;
use content::WelcomeText;
use log::{debug, error, info};
use state::AppState;

/// Application orchestrator - owns dashboard state and drives the event loop
pub struct Application {
    ui_renderer: Box<dyn UIRenderer>,
    actions: Box<dyn DashboardActions>,
    ratio: SplitRatio,
    registry: WindowRegistry,
    state: AppState,
    input: InputStateMachine,
    library: Vec<String>,
    welcome: WelcomeText,
}

impl Application {
    /// Wire the configured content to a renderer and collaborators.
    ///
    /// The welcome file is read here; a missing file degrades to the placeholder text.
    pub fn new(
        config: &DashboardConfig,
        ui_renderer: Box<dyn UIRenderer>,
        actions: Box<dyn DashboardActions>,
    ) -> Self {
        let welcome = WelcomeText::load(&config.welcome_path);
        info!(
            "dashboard configured: ratio {}, theme {}, {} library items",
            config.library_ratio,
            config.theme,
            config.library_items.len()
        );

        Self {
            ui_renderer,
            actions,
            ratio: config.library_ratio,
            registry: WindowRegistry::new(),
            state: AppState::default(),
            input: InputStateMachine::new(config.library_items.len()),
            library: config.library_items.clone(),
            welcome,
        }
    }

    /// Replace the main region text.
    pub fn with_welcome(mut self, welcome: WelcomeText) -> Self {
        self.welcome = welcome;
        self
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn registry(&self) -> &WindowRegistry {
        &self.registry
    }

    /// Run the dashboard until quit or end of input.
    ///
    /// The terminal is restored on every exit path, including errors.
    pub fn run(&mut self) -> Result<()> {
        self.ui_renderer.initialize()?;

        let result = self.event_loop();
        if let Err(ref err) = result {
            error!("event loop stopped: {err}");
        }

        let cleanup = self.ui_renderer.cleanup();
        result.and(cleanup)
    }

    fn event_loop(&mut self) -> Result<()> {
        if let Err(err) = self.ui_renderer.check_environment() {
            self.ui_renderer.show_fatal(&err.to_string())?;
            return Err(err);
        }

        let (width, height) = self.ui_renderer.get_terminal_size()?;
        self.relayout(width, height)?;
        self.render(false)?;

        while let Some(event) = self.ui_renderer.next_event()? {
            let action = self
                .input
                .handle_event(&mut self.state, event, &self.registry)?;
            debug!("{action:?}");

            match action {
                InputAction::Quit => break,
                InputAction::Resize { width, height } => {
                    self.relayout(width, height)?;
                    self.render(false)?;
                }
                InputAction::ShowHelp => self.render(true)?,
                InputAction::Search(query) => {
                    self.actions.on_search(&query);
                    self.render(false)?;
                }
                InputAction::Activate(index) => {
                    self.actions.on_activate(index);
                    self.render(false)?;
                }
                InputAction::Redraw => self.render(false)?,
                InputAction::NoAction => {}
            }
        }

        info!("event loop finished");
        Ok(())
    }

    fn relayout(&mut self, width: u16, height: u16) -> Result<()> {
        resize::rebuild_registry(&mut self.registry, &REGION_SPECS, self.ratio, width, height)
    }

    fn render(&mut self, help_overlay: bool) -> Result<()> {
        let view = DashboardView::new(&self.state, &self.library, self.welcome.as_str())
            .with_help_overlay(help_overlay);
        self.ui_renderer.render(&mut self.registry, &view)
    }
}
