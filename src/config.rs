//! Runtime configuration.
//!
//! Values are resolved in three layers: built-in defaults, then an optional TOML file
//! (cargo feature `config`), then command-line overrides.

use crate::app::content::default_library_items;
use crate::error::{DashboardError, Result};
use crate::layout::SplitRatio;
use crate::render::ui::ThemeChoice;
use std::path::{Path, PathBuf};

/// Default location of the welcome text, relative to the working directory.
pub const DEFAULT_WELCOME_PATH: &str = "welcome.txt";

/// Everything the dashboard needs before it touches the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Share of the left column given to the library region.
    pub library_ratio: SplitRatio,
    pub welcome_path: PathBuf,
    pub theme: ThemeChoice,
    pub library_items: Vec<String>,
    /// Redirect log output here instead of stderr.
    pub log_file: Option<PathBuf>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            library_ratio: SplitRatio::default(),
            welcome_path: PathBuf::from(DEFAULT_WELCOME_PATH),
            theme: ThemeChoice::default(),
            library_items: default_library_items(),
            log_file: None,
        }
    }
}

/// Values given on the command line; `None` keeps the lower layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub library_ratio: Option<SplitRatio>,
    pub welcome_path: Option<PathBuf>,
    pub theme: Option<ThemeChoice>,
    pub log_file: Option<PathBuf>,
}

impl DashboardConfig {
    /// Resolve defaults, the config file and `overrides`, in that order.
    ///
    /// An explicit `config_path` must exist. Without one, the default location is used when
    /// a file is present there.
    pub fn resolve(config_path: Option<&Path>, overrides: ConfigOverrides) -> Result<Self> {
        let mut config = Self::from_layers(config_path)?;
        config.apply(overrides);
        Ok(config)
    }

    #[cfg(feature = "config")]
    fn from_layers(config_path: Option<&Path>) -> Result<Self> {
        match config_path {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.is_file() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    #[cfg(not(feature = "config"))]
    fn from_layers(config_path: Option<&Path>) -> Result<Self> {
        match config_path {
            Some(path) => Err(DashboardError::invalid_argument(format!(
                "--config {} requires the `config` feature",
                path.display()
            ))),
            None => Ok(Self::default()),
        }
    }

    /// Overlay command-line values.
    pub fn apply(&mut self, overrides: ConfigOverrides) {
        if let Some(ratio) = overrides.library_ratio {
            self.library_ratio = ratio;
        }
        if let Some(path) = overrides.welcome_path {
            self.welcome_path = path;
        }
        if let Some(theme) = overrides.theme {
            self.theme = theme;
        }
        if overrides.log_file.is_some() {
            self.log_file = overrides.log_file;
        }
    }

    /// Reject values that would leave the dashboard unusable.
    pub fn validate(&self) -> Result<()> {
        if self.welcome_path.as_os_str().is_empty() {
            return Err(DashboardError::config("welcome_path must not be empty"));
        }
        Ok(())
    }
}

#[cfg(feature = "config")]
mod file {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default, deny_unknown_fields)]
    pub(super) struct FileConfig {
        layout: LayoutSection,
        content: ContentSection,
        ui: UiSection,
    }

    #[derive(Debug, Default, Deserialize)]
    #[serde(default, deny_unknown_fields)]
    struct LayoutSection {
        library_ratio: Option<String>,
    }

    #[derive(Debug, Default, Deserialize)]
    #[serde(default, deny_unknown_fields)]
    struct ContentSection {
        welcome_path: Option<PathBuf>,
        library_items: Option<Vec<String>>,
    }

    #[derive(Debug, Default, Deserialize)]
    #[serde(default, deny_unknown_fields)]
    struct UiSection {
        theme: Option<String>,
    }

    impl FileConfig {
        pub(super) fn merge_into(self, config: &mut DashboardConfig) -> Result<()> {
            if let Some(ratio) = self.layout.library_ratio {
                config.library_ratio = ratio.parse()?;
            }
            if let Some(path) = self.content.welcome_path {
                config.welcome_path = path;
            }
            if let Some(items) = self.content.library_items {
                config.library_items = items;
            }
            if let Some(theme) = self.ui.theme {
                config.theme = theme.parse()?;
            }
            Ok(())
        }
    }

    impl DashboardConfig {
        /// Load configuration from a TOML file on top of the defaults
        pub fn from_file(path: &Path) -> Result<Self> {
            let contents = std::fs::read_to_string(path).map_err(|err| {
                DashboardError::config(format!("cannot read {}: {err}", path.display()))
            })?;
            let config = Self::from_toml(&contents)?;
            log::info!("loaded configuration from {}", path.display());
            Ok(config)
        }

        /// Load configuration from a TOML string on top of the defaults
        pub fn from_toml(toml_str: &str) -> Result<Self> {
            let file: FileConfig = toml::from_str(toml_str)
                .map_err(|err| DashboardError::config(err.to_string()))?;
            let mut config = Self::default();
            file.merge_into(&mut config)?;
            config.validate()?;
            Ok(config)
        }

        /// `<config_dir>/tunedeck/config.toml`, when the platform has a config directory.
        pub fn default_path() -> Option<PathBuf> {
            dirs::config_dir().map(|dir| dir.join("tunedeck").join("config.toml"))
        }
    }
}
