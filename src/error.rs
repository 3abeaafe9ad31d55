//! Error types and handling infrastructure for tunedeck.
//!
//! This module provides a centralized error handling system using `thiserror` for
//! library error types. The binary layers `anyhow` on top for context.
//!
//! ## Taxonomy
//!
//! - **Environment errors** (`Terminal`, `ColorUnsupported`): fatal, reported to the user
//! - **Bounds errors** (`RegionOutOfRange`, `DuplicateGridCoordinate`): invariant
//!   violations in the window registry, never retried
//! - **Configuration errors** (`InvalidRatio`, `ConfigError`, `InvalidArgument`):
//!   rejected before the terminal is touched
//!
//! Missing resources and navigation dead-ends are absorbed where they happen and have
//! no variant here.

use thiserror::Error;

/// The main error type for tunedeck operations.
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Terminal I/O failed (raw mode, alternate screen, draw, event read)
    #[error("Terminal operation failed: {message}")]
    Terminal {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// The terminal cannot display the selected color theme
    #[error("Your terminal does not support color (TERM={term})")]
    ColorUnsupported { term: String },

    /// A region index outside the registry was requested
    #[error("Region index {index} out of range (registry holds {count})")]
    RegionOutOfRange { index: usize, count: usize },

    /// Two regions claimed the same navigation grid cell
    #[error("Grid coordinate ({x}, {y}) is claimed by more than one region")]
    DuplicateGridCoordinate { x: i16, y: i16 },

    /// Library split ratio could not be parsed or is out of bounds
    #[error("Invalid split ratio '{value}': expected N/D with D > 0 and N <= D")]
    InvalidRatio { value: String },

    /// Configuration file errors
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// Invalid command line arguments
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },
}

/// Standard Result type for tunedeck operations.
pub type Result<T> = std::result::Result<T, DashboardError>;

impl DashboardError {
    /// Create a Terminal error from an io::Error with additional context
    pub fn terminal(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Terminal {
            message: message.into(),
            source,
        }
    }

    /// Create a ConfigError with a descriptive message
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Create an InvalidArgument error with a descriptive message
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for DashboardError {
    fn from(err: std::io::Error) -> Self {
        Self::Terminal {
            message: "IO operation failed".to_string(),
            source: err,
        }
    }
}
