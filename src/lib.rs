//! # tunedeck - Tiled Terminal Music Dashboard
//!
//! A keyboard-driven terminal dashboard that tiles the screen into six fixed regions (search
//! bar, library, playlists, main content, progress bar, help hint) and lets the user move
//! focus between them, type a search query, or pick an entry from the library list.
//!
//! ## Architecture
//!
//! - [`error`] - Centralized error types and handling
//! - [`config`] - Defaults, optional TOML file, command-line overrides
//! - [`layout`] - Pure layout computation from terminal size
//! - [`registry`] - Regions, their static metadata, and the window registry
//! - [`focus`] - Directional focus navigation over the region grid
//! - [`input`] - Terminal event collection and the input mode state machine
//! - [`render::ui`](crate::render::ui) - Region painting and the terminal renderer
//! - [`app`] - Event loop and component coordination

// Core modules
pub mod error;
pub mod config;

// Pure dashboard model
pub mod focus;
pub mod layout;
pub mod registry;

// Subsystems
pub mod input;
pub mod render;

// Core components
pub mod app;

// Re-export commonly used types for convenience
pub use error::{DashboardError, Result};

// Public API surface for external usage
pub use app::actions::{DashboardActions, LoggingActions};
pub use app::Application;
pub use config::{ConfigOverrides, DashboardConfig};
pub use layout::{compute_layout, SplitRatio};
pub use registry::{RegionRole, WindowRegistry};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
