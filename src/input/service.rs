//! Input mode state machine.
//!
//! Classifies terminal key events into symbolic keys, applies the transition table for the
//! current [`Mode`](crate::app::state::Mode), and yields the `InputAction` the event loop has to
//! carry out. Every `(mode, key)` pair has a defined outcome; pairs the table does not name
//! fall through to a plain redraw.

use crate::app::state::{AppState, Mode, ModeKind};
use crate::error::Result;
use crate::focus::{self, Direction};
use crate::input::raw::RawInputEvent;
use crate::registry::{RegionRole, WindowRegistry};
use log::debug;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Keyboard surface in symbolic form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Quit,
    Help,
    Confirm,
    Escape,
    Backspace,
    Move(Direction),
    Char(char),
    Other,
}

impl Key {
    /// Classify a key event. In text entry letters are always printable, so `q`, `?` and
    /// `hjkl` lose their command meaning there.
    ///
    /// Windows reports AltGr as Control+Alt, so that combination still types its character.
    pub fn classify(key_event: KeyEvent, text_entry: bool) -> Key {
        let modifiers = key_event.modifiers;
        let plain = !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
        let typed = plain || modifiers.contains(KeyModifiers::CONTROL | KeyModifiers::ALT);

        match key_event.code {
            KeyCode::Enter | KeyCode::Char('\n') | KeyCode::Char('\r') => Key::Confirm,
            KeyCode::Esc => Key::Escape,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Up => Key::Move(Direction::Up),
            KeyCode::Down => Key::Move(Direction::Down),
            KeyCode::Left => Key::Move(Direction::Left),
            KeyCode::Right => Key::Move(Direction::Right),
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                if text_entry {
                    Key::Escape
                } else {
                    Key::Quit
                }
            }
            KeyCode::Char(ch) if text_entry && typed && !ch.is_control() => Key::Char(ch),
            KeyCode::Char('q') if plain => Key::Quit,
            KeyCode::Char('?') if plain => Key::Help,
            KeyCode::Char('h') if plain => Key::Move(Direction::Left),
            KeyCode::Char('j') if plain => Key::Move(Direction::Down),
            KeyCode::Char('k') if plain => Key::Move(Direction::Up),
            KeyCode::Char('l') if plain => Key::Move(Direction::Right),
            KeyCode::Char(ch) if plain && !ch.is_control() => Key::Char(ch),
            _ => Key::Other,
        }
    }
}

/// What the event loop must do after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// Leave the event loop.
    Quit,
    /// Re-run the layout for the new terminal size.
    Resize { width: u16, height: u16 },
    /// Draw the help overlay on top of the next frame.
    ShowHelp,
    /// Hand the query to the search collaborator.
    Search(String),
    /// Hand the selected library index to the activation collaborator.
    Activate(usize),
    /// Redraw the current state.
    Redraw,
    /// Nothing happened (key release, repeat); no redraw needed.
    NoAction,
}

/// Transition table for the dashboard's input modes.
#[derive(Debug, Clone)]
pub struct InputStateMachine {
    library_len: usize,
}

impl InputStateMachine {
    /// `library_len` bounds the selection index in list mode.
    pub fn new(library_len: usize) -> Self {
        Self { library_len }
    }

    /// Apply one event to `state`.
    ///
    /// Fails only when the registry no longer holds the focused index, which is an
    /// invariant violation.
    pub fn handle_event(
        &self,
        state: &mut AppState,
        event: RawInputEvent,
        registry: &WindowRegistry,
    ) -> Result<InputAction> {
        match event {
            RawInputEvent::Resize { width, height } => Ok(InputAction::Resize { width, height }),
            RawInputEvent::Key(key_event) => self.handle_key_event(state, key_event, registry),
        }
    }

    pub fn handle_key_event(
        &self,
        state: &mut AppState,
        key_event: KeyEvent,
        registry: &WindowRegistry,
    ) -> Result<InputAction> {
        if key_event.kind != KeyEventKind::Press {
            return Ok(InputAction::NoAction);
        }

        let mode = state.mode_kind();
        let key = Key::classify(key_event, mode == ModeKind::TextEntry);

        let action = match (mode, key) {
            (ModeKind::Normal, Key::Quit) => InputAction::Quit,
            (ModeKind::Normal, Key::Help) => InputAction::ShowHelp,
            (ModeKind::Normal, Key::Move(direction)) => {
                let next = focus::step(registry, state.focused(), direction)?;
                state.set_focus(next);
                InputAction::Redraw
            }
            (ModeKind::Normal, Key::Confirm) => {
                match registry.get(state.focused())?.role() {
                    RegionRole::Search => state.enter_text_entry(),
                    RegionRole::Library => state.enter_list_select(),
                    _ => {}
                }
                InputAction::Redraw
            }

            (ModeKind::TextEntry, Key::Char(ch)) => {
                state.push_char(ch);
                InputAction::Redraw
            }
            (ModeKind::TextEntry, Key::Backspace) => {
                state.pop_char();
                InputAction::Redraw
            }
            (ModeKind::TextEntry, Key::Confirm) => match state.return_to_normal() {
                Mode::TextEntry { buffer } => InputAction::Search(buffer),
                _ => InputAction::Redraw,
            },
            (ModeKind::TextEntry, Key::Escape) => {
                state.return_to_normal();
                InputAction::Redraw
            }

            (ModeKind::ListSelect, Key::Move(Direction::Up)) => {
                state.select_previous();
                InputAction::Redraw
            }
            (ModeKind::ListSelect, Key::Move(Direction::Down)) => {
                state.select_next(self.library_len);
                InputAction::Redraw
            }
            (ModeKind::ListSelect, Key::Confirm) => match state.return_to_normal() {
                Mode::ListSelect { selected } if selected < self.library_len => {
                    InputAction::Activate(selected)
                }
                _ => InputAction::Redraw,
            },
            (ModeKind::ListSelect, Key::Escape) => {
                state.return_to_normal();
                InputAction::Redraw
            }

            _ => InputAction::Redraw,
        };

        if state.mode_kind() != mode {
            debug!("mode {mode:?} -> {:?} on {key:?}", state.mode_kind());
        }
        Ok(action)
    }
}
