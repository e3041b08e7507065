use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `drive` binary.
#[derive(Parser, Debug)]
#[command(
    name = "drive",
    version,
    long_version = long_version(),
    about = "Browse rental vehicles on a map and in a list",
    color = ColorChoice::Auto,
    styles = cli_styles()
)]
pub(crate) struct CliArgs {
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "DRIVE_CONFIG",
        action = ArgAction::Append,
        help = "Additional configuration file to merge (default: none)"
    )]
    pub(crate) config: Vec<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-config",
        help = "Skip loading default configuration files (default: disabled)"
    )]
    pub(crate) no_config: bool,
    #[arg(
        long = "backend-url",
        value_name = "URL",
        help = "Base URL of the hosted backend (default: from configuration)"
    )]
    pub(crate) backend_url: Option<String>,
    #[arg(
        long = "anon-key",
        value_name = "KEY",
        help = "Public API key sent with every backend request (default: from configuration)"
    )]
    pub(crate) anon_key: Option<String>,
    #[arg(
        short = 'f',
        long,
        value_name = "FILE",
        help = "Serve listings from a JSON file instead of the backend (default: disabled)"
    )]
    pub(crate) fixture: Option<PathBuf>,
    #[arg(
        long,
        value_name = "TAG",
        help = "Category to start on (default: All)"
    )]
    pub(crate) category: Option<String>,
    #[arg(
        long,
        value_name = "DEGREES",
        allow_negative_numbers = true,
        requires = "longitude",
        help = "Latitude reported as the device position (default: location denied)"
    )]
    pub(crate) latitude: Option<f64>,
    #[arg(
        long,
        value_name = "DEGREES",
        allow_negative_numbers = true,
        requires = "latitude",
        help = "Longitude reported as the device position (default: location denied)"
    )]
    pub(crate) longitude: Option<f64>,
    #[arg(
        long,
        value_name = "THEME",
        help = "Select a theme by name (default: slate)"
    )]
    pub(crate) theme: Option<String>,
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        help = "Minimum level shown in the log console (default: info)"
    )]
    pub(crate) log_level: Option<String>,
    #[arg(long = "print-config", help = "Print the effective configuration before starting")]
    pub(crate) print_config: bool,
    #[arg(long = "list-themes", help = "List the available themes and exit")]
    pub(crate) list_themes: bool,
    #[arg(
        short = 'l',
        long,
        help = "Print the listings of the chosen category and exit"
    )]
    pub(crate) list: bool,
    #[arg(
        short,
        long,
        value_enum,
        default_value_t = OutputFormat::Plain,
        help = "Output format used by --list"
    )]
    pub(crate) output: OutputFormat,
}
