//! UI renderer trait and event handling
//!
//! This module defines the `UIRenderer` trait the event loop drives: drawing the region
//! registry, delivering input events, and the terminal lifecycle hooks around them.

use crate::error::Result;
use crate::input::RawInputEvent;
use crate::registry::WindowRegistry;
use crate::render::ui::state::DashboardView;

/// Core trait for UI rendering and event handling
pub trait UIRenderer {
    /// Paint every region and present one frame.
    ///
    /// Regions paint into their own surfaces first; the frame is composed from those surfaces,
    /// so a region never draws outside its bounds.
    fn render(&mut self, registry: &mut WindowRegistry, view: &DashboardView<'_>) -> Result<()>;

    /// Block for the next input event; `None` once input is exhausted.
    fn next_event(&mut self) -> Result<Option<RawInputEvent>>;

    /// Initialize the terminal UI
    ///
    /// This method should:
    /// - Set up raw mode
    /// - Enter the alternate screen
    /// - Hide cursor
    fn initialize(&mut self) -> Result<()>;

    /// Clean up and restore terminal state
    fn cleanup(&mut self) -> Result<()>;

    /// Get current terminal dimensions
    fn get_terminal_size(&self) -> Result<(u16, u16)>; // (width, height)

    /// Verify the terminal can display the configured theme.
    fn check_environment(&self) -> Result<()> {
        Ok(())
    }

    /// Show a blocking error modal and wait for any key.
    fn show_fatal(&mut self, message: &str) -> Result<()>;
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::error::DashboardError;
    use crate::render::ui::theme::ColorTheme;
    use crate::render::ui::widgets::{buffer_lines, render_to_buffer};
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::layout::Rect;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    /// Mock UI renderer for testing
    ///
    /// Replays a scripted event queue and keeps a text snapshot of every rendered frame.
    /// Frames and fatal messages are shared so a test can keep a handle after boxing the mock.
    pub struct MockUIRenderer {
        pub render_count: usize,
        pub terminal_size: (u16, u16),
        pub is_initialized: bool,
        pub events: VecDeque<RawInputEvent>,
        pub frames: Rc<RefCell<Vec<Vec<String>>>>,
        pub fatal_messages: Rc<RefCell<Vec<String>>>,
        pub color_supported: bool,
        theme: ColorTheme,
    }

    impl Default for MockUIRenderer {
        fn default() -> Self {
            Self::new()
        }
    }

    impl MockUIRenderer {
        /// Create a new mock renderer with default settings
        pub fn new() -> Self {
            Self {
                render_count: 0,
                terminal_size: (80, 24),
                is_initialized: false,
                events: VecDeque::new(),
                frames: Rc::default(),
                fatal_messages: Rc::default(),
                color_supported: true,
                theme: ColorTheme::default(),
            }
        }

        pub fn push_key(&mut self, code: KeyCode) {
            self.push_key_with(code, KeyModifiers::NONE);
        }

        pub fn push_key_with(&mut self, code: KeyCode, modifiers: KeyModifiers) {
            self.events
                .push_back(RawInputEvent::Key(KeyEvent::new(code, modifiers)));
        }

        pub fn push_text(&mut self, text: &str) {
            for ch in text.chars() {
                self.push_key(KeyCode::Char(ch));
            }
        }

        pub fn push_resize(&mut self, width: u16, height: u16) {
            self.events
                .push_back(RawInputEvent::Resize { width, height });
        }

        pub fn last_frame(&self) -> Option<String> {
            self.frames.borrow().last().map(|lines| lines.join("\n"))
        }
    }

    impl UIRenderer for MockUIRenderer {
        fn render(
            &mut self,
            registry: &mut WindowRegistry,
            view: &DashboardView<'_>,
        ) -> Result<()> {
            let (width, height) = self.terminal_size;
            let area = Rect::new(0, 0, width, height);
            let buffer = render_to_buffer(registry, view, &self.theme, area)?;
            self.frames.borrow_mut().push(buffer_lines(&buffer));
            self.render_count += 1;
            Ok(())
        }

        fn next_event(&mut self) -> Result<Option<RawInputEvent>> {
            let event = self.events.pop_front();
            if let Some(RawInputEvent::Resize { width, height }) = event {
                self.terminal_size = (width, height);
            }
            Ok(event)
        }

        fn initialize(&mut self) -> Result<()> {
            self.is_initialized = true;
            Ok(())
        }

        fn cleanup(&mut self) -> Result<()> {
            self.is_initialized = false;
            Ok(())
        }

        fn get_terminal_size(&self) -> Result<(u16, u16)> {
            Ok(self.terminal_size)
        }

        fn check_environment(&self) -> Result<()> {
            if self.color_supported {
                Ok(())
            } else {
                Err(DashboardError::ColorUnsupported {
                    term: "dumb".to_string(),
                })
            }
        }

        fn show_fatal(&mut self, message: &str) -> Result<()> {
            self.fatal_messages.borrow_mut().push(message.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_mock_renderer_basic() {
        use crate::app::state::AppState;
        use crate::layout::SplitRatio;
        use crate::registry::REGION_SPECS;

        let mut renderer = MockUIRenderer::new();
        let mut registry = WindowRegistry::new();
        crate::app::resize::rebuild_registry(
            &mut registry,
            &REGION_SPECS,
            SplitRatio::QUARTER,
            80,
            24,
        )
        .unwrap();
        let state = AppState::default();
        let view = DashboardView::new(&state, &[], "hi");

        assert!(!renderer.is_initialized);
        renderer.initialize().unwrap();
        assert!(renderer.is_initialized);

        assert_eq!(renderer.render_count, 0);
        renderer.render(&mut registry, &view).unwrap();
        assert_eq!(renderer.render_count, 1);
        assert_eq!(renderer.frames.borrow()[0].len(), 24);
        assert!(renderer.last_frame().unwrap().contains("Welcome!"));

        assert_eq!(renderer.get_terminal_size().unwrap(), (80, 24));
        renderer.cleanup().unwrap();
        assert!(!renderer.is_initialized);
    }

    #[test]
    fn test_mock_renderer_resize_handling() {
        let mut renderer = MockUIRenderer::new();
        renderer.push_resize(120, 30);
        assert_eq!(
            renderer.next_event().unwrap(),
            Some(RawInputEvent::Resize {
                width: 120,
                height: 30
            })
        );
        assert_eq!(renderer.get_terminal_size().unwrap(), (120, 30));
        assert_eq!(renderer.next_event().unwrap(), None);
    }
}
