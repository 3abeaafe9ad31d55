//! Low-level input collection: blocking crossterm reads, resize coalescing, and translation
//! into primitive events that the input state machine consumes.

use crate::error::Result;
use ratatui::crossterm::event::{self, Event, KeyEvent};
use std::collections::VecDeque;
use std::time::Duration;

/// Low-level events surfaced by the raw input collector.
///
/// Resizes travel on the same queue as keys, so the event loop sees them in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawInputEvent {
    Key(KeyEvent),
    Resize { width: u16, height: u16 },
}

/// Collector that reads crossterm events and folds resize bursts into one event.
#[derive(Debug, Default)]
pub struct RawInputCollector {
    pending_events: VecDeque<RawInputEvent>,
}

impl RawInputCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether the collector has no pending events.
    pub fn is_idle(&self) -> bool {
        self.pending_events.is_empty()
    }

    /// Process a synthetic event (primarily used by unit tests).
    pub fn process_event(&mut self, event: Event) {
        self.enqueue_event(event);
    }

    /// Pop the next pending raw event without touching the terminal.
    pub fn pop_pending(&mut self) -> Option<RawInputEvent> {
        self.pending_events.pop_front()
    }

    /// Block until the next relevant event is available.
    ///
    /// Events already waiting in the terminal are drained first so a burst of resizes
    /// collapses into its final size.
    pub fn read_event(&mut self) -> Result<RawInputEvent> {
        loop {
            if let Some(event) = self.pop_pending() {
                return Ok(event);
            }

            let event = event::read()?;
            self.enqueue_event(event);
            while event::poll(Duration::ZERO)? {
                let event = event::read()?;
                self.enqueue_event(event);
            }
        }
    }

    fn enqueue_event(&mut self, event: Event) {
        match event {
            Event::Key(key_event) => {
                self.pending_events.push_back(RawInputEvent::Key(key_event));
            }
            Event::Resize(width, height) => {
                if let Some(RawInputEvent::Resize { .. }) = self.pending_events.back() {
                    self.pending_events.pop_back();
                }
                self.pending_events
                    .push_back(RawInputEvent::Resize { width, height });
            }
            _ => {}
        }
    }
}
