//! Input subsystem.
//!
//! `raw` turns terminal events into [`RawInputEvent`]s; `service` runs the mode state machine
//! over them and yields [`InputAction`]s for the event loop.

pub mod raw;
pub mod service;

// Modules outside this crate should prefer importing from `crate::input` rather than reaching
// into submodules.
pub use raw::{RawInputCollector, RawInputEvent};
pub use service::{InputAction, InputStateMachine, Key};
