//! tunedeck - Tiled Terminal Music Dashboard
//!
//! A keyboard-driven terminal dashboard for browsing a music library.

use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command};
use std::path::{Path, PathBuf};
use tunedeck::render::ui::{ColorTheme, TerminalUI, ThemeChoice};
use tunedeck::{Application, ConfigOverrides, DashboardConfig, LoggingActions, SplitRatio};

fn cli() -> Command {
    Command::new("tunedeck")
        .version(tunedeck::VERSION)
        .about("A keyboard-driven terminal dashboard for browsing a music library")
        .long_about(
            "tunedeck tiles the terminal into search, library, playlist, main, progress and \
             help regions. Move focus with the arrow keys, press Enter to search or pick a \
             library entry, ? for help and q to quit.",
        )
        .arg(
            Arg::new("ratio")
                .long("ratio")
                .value_name("N/D")
                .help("Share of the left column given to the library region (default 1/4)"),
        )
        .arg(
            Arg::new("welcome")
                .long("welcome")
                .value_name("PATH")
                .help("Text file shown in the main region (default welcome.txt)"),
        )
        .arg(
            Arg::new("theme")
                .long("theme")
                .value_name("THEME")
                .value_parser(["default", "monochrome", "high-contrast"])
                .help("Color theme; monochrome skips the color support check"),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .value_name("PATH")
                .help("Write log output (filtered by RUST_LOG) to this file"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("TOML configuration file (requires the `config` feature)"),
        )
}

fn overrides(matches: &ArgMatches) -> Result<ConfigOverrides> {
    let library_ratio = matches
        .get_one::<String>("ratio")
        .map(|value| value.parse::<SplitRatio>())
        .transpose()?;
    let theme = matches
        .get_one::<String>("theme")
        .map(|value| value.parse::<ThemeChoice>())
        .transpose()?;

    Ok(ConfigOverrides {
        library_ratio,
        welcome_path: matches.get_one::<String>("welcome").map(PathBuf::from),
        theme,
        log_file: matches.get_one::<String>("log-file").map(PathBuf::from),
    })
}

/// Logs go to stderr by default, which the alternate screen hides; `--log-file` redirects them.
fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(path) = log_file {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.try_init().context("Failed to initialize logging")?;
    Ok(())
}

fn main() -> Result<()> {
    let matches = cli().get_matches();

    let config_path = matches.get_one::<String>("config").map(PathBuf::from);
    let config = DashboardConfig::resolve(config_path.as_deref(), overrides(&matches)?)
        .context("Invalid configuration")?;
    config.validate()?;

    init_logging(config.log_file.as_deref())?;

    let ui_renderer = Box::new(TerminalUI::with_theme(ColorTheme::from_choice(config.theme)));
    let mut app = Application::new(&config, ui_renderer, Box::new(LoggingActions));

    app.run().context("Dashboard terminated with an error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_constant() {
        assert!(!tunedeck::VERSION.is_empty());
    }

    #[test]
    fn test_cli_overrides() {
        let matches = cli().get_matches_from([
            "tunedeck",
            "--ratio",
            "1/2",
            "--theme",
            "monochrome",
            "--welcome",
            "motd.txt",
        ]);
        let overrides = overrides(&matches).unwrap();
        assert_eq!(overrides.library_ratio, Some(SplitRatio::HALF));
        assert_eq!(overrides.theme, Some(ThemeChoice::Monochrome));
        assert_eq!(overrides.welcome_path, Some(PathBuf::from("motd.txt")));
        assert_eq!(overrides.log_file, None);
    }

    #[test]
    fn test_bad_ratio_is_rejected() {
        let matches = cli().get_matches_from(["tunedeck", "--ratio", "5/4"]);
        assert!(overrides(&matches).is_err());
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        cli().debug_assert();
    }
}
