//! Static content fed to the dashboard before the event loop starts.

use log::{info, warn};
use std::path::Path;

/// Placeholder shown in the main region when the welcome file cannot be read.
pub const WELCOME_PLACEHOLDER: &str = "Welcome file not found.";

/// Entries listed in the library region unless configured otherwise.
pub const DEFAULT_LIBRARY_ITEMS: [&str; 6] = [
    "Made For You",
    "Recently Played",
    "Liked Songs",
    "Albums",
    "Artists",
    "Podcasts",
];

/// Text displayed in the main region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WelcomeText {
    Loaded(String),
    Missing,
}

impl WelcomeText {
    /// Read the welcome file; any failure degrades to [`WelcomeText::Missing`].
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(text) => {
                info!("loaded welcome text from {}", path.display());
                Self::Loaded(text)
            }
            Err(err) => {
                warn!("welcome text unavailable at {}: {err}", path.display());
                Self::Missing
            }
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            WelcomeText::Loaded(text) => text,
            WelcomeText::Missing => WELCOME_PLACEHOLDER,
        }
    }
}

pub fn default_library_items() -> Vec<String> {
    DEFAULT_LIBRARY_ITEMS.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn missing_file_degrades_to_placeholder() {
        let text = WelcomeText::load(Path::new("/nonexistent/tunedeck/welcome.txt"));
        assert_eq!(text, WelcomeText::Missing);
        assert_eq!(text.as_str(), WELCOME_PLACEHOLDER);
    }

    #[test]
    fn existing_file_is_loaded() {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(file, "Hello there").expect("Failed to write welcome text");
        file.flush().expect("Failed to flush welcome text");

        let text = WelcomeText::load(file.path());
        assert_eq!(text.as_str(), "Hello there\n");
    }

    #[test]
    fn default_library_has_six_entries() {
        let items = default_library_items();
        assert_eq!(items.len(), 6);
        assert_eq!(items[0], "Made For You");
        assert_eq!(items[5], "Podcasts");
    }
}
