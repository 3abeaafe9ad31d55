//! Application state owned by the event loop.
//!
//! `AppState` is the only mutable model besides the window registry. The input state machine
//! changes it exclusively through the transition methods below, so mode-local data can only
//! exist while its mode is active.

use crate::registry::INITIAL_FOCUS;

/// Maximum number of characters accepted in the search buffer.
pub const MAX_QUERY_LEN: usize = 255;

/// Current interpretation of keyboard input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    /// Typing into the search bar.
    TextEntry { buffer: String },
    /// Picking an entry in the library list.
    ListSelect { selected: usize },
}

impl Mode {
    pub fn kind(&self) -> ModeKind {
        match self {
            Mode::Normal => ModeKind::Normal,
            Mode::TextEntry { .. } => ModeKind::TextEntry,
            Mode::ListSelect { .. } => ModeKind::ListSelect,
        }
    }
}

/// Data-less discriminant of [`Mode`], convenient for matching and assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModeKind {
    Normal,
    TextEntry,
    ListSelect,
}

/// Mode plus focused region index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    mode: Mode,
    focused: usize,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(INITIAL_FOCUS)
    }
}

impl AppState {
    pub fn new(focused: usize) -> Self {
        Self {
            mode: Mode::Normal,
            focused,
        }
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn mode_kind(&self) -> ModeKind {
        self.mode.kind()
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    /// Text typed so far, `None` outside text entry.
    pub fn query(&self) -> Option<&str> {
        match &self.mode {
            Mode::TextEntry { buffer } => Some(buffer),
            _ => None,
        }
    }

    /// Highlighted library entry, `None` outside list selection.
    pub fn selection(&self) -> Option<usize> {
        match self.mode {
            Mode::ListSelect { selected } => Some(selected),
            _ => None,
        }
    }

    pub(crate) fn set_focus(&mut self, index: usize) {
        self.focused = index;
    }

    pub(crate) fn enter_text_entry(&mut self) {
        self.mode = Mode::TextEntry {
            buffer: String::new(),
        };
    }

    pub(crate) fn enter_list_select(&mut self) {
        self.mode = Mode::ListSelect { selected: 0 };
    }

    /// Switch back to normal mode, handing back the mode that was active.
    pub(crate) fn return_to_normal(&mut self) -> Mode {
        std::mem::take(&mut self.mode)
    }

    /// Append a character; returns false when the buffer is full or not in text entry.
    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        match &mut self.mode {
            Mode::TextEntry { buffer } if buffer.chars().count() < MAX_QUERY_LEN => {
                buffer.push(ch);
                true
            }
            _ => false,
        }
    }

    /// Drop the last character; returns false when there was nothing to remove.
    pub(crate) fn pop_char(&mut self) -> bool {
        match &mut self.mode {
            Mode::TextEntry { buffer } => buffer.pop().is_some(),
            _ => false,
        }
    }

    pub(crate) fn select_previous(&mut self) {
        if let Mode::ListSelect { selected } = &mut self.mode {
            *selected = selected.saturating_sub(1);
        }
    }

    /// Move the highlight down, clamped to the last of `count` items.
    pub(crate) fn select_next(&mut self, count: usize) {
        if let Mode::ListSelect { selected } = &mut self.mode {
            *selected = (*selected + 1).min(count.saturating_sub(1));
        }
    }
}
