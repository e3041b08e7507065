use std::path::PathBuf;

use clap::Parser;
use drive::listings::Category;
use drive::theme::LIGHT;
use log::LevelFilter;

use super::explore::{DEFAULT_CATEGORIES, sanitize_categories};
use super::{RawConfig, SettingSource, detect_source};
use crate::cli::CliArgs;

fn parse(args: &[&str]) -> CliArgs {
    let mut argv = vec!["drive"];
    argv.extend_from_slice(args);
    CliArgs::parse_from(argv)
}

fn backend_config() -> RawConfig {
    let mut config = RawConfig::default();
    config.backend.url = Some("https://example.supabase.co".into());
    config.backend.anon_key = Some("anon".into());
    config
}

#[test]
fn cli_overrides_take_precedence() {
    let cli = parse(&[
        "--backend-url",
        "https://cli.example.com",
        "--anon-key",
        "cli-key",
        "--fixture",
        "cars.json",
        "--category",
        "SUV",
        "--latitude",
        "-33.86",
        "--longitude",
        "151.2",
        "--theme",
        "light",
        "--log-level",
        "debug",
    ]);

    let mut config = backend_config();
    config.ui.theme = Some("slate".into());
    config.apply_cli_overrides(&cli);

    assert_eq!(config.backend.url.as_deref(), Some("https://cli.example.com"));
    assert_eq!(config.backend.anon_key.as_deref(), Some("cli-key"));
    assert_eq!(config.backend.fixture, Some(PathBuf::from("cars.json")));
    assert_eq!(config.explore.category.as_deref(), Some("SUV"));
    assert_eq!(config.location.latitude, Some(-33.86));
    assert_eq!(config.location.longitude, Some(151.2));
    assert_eq!(config.ui.theme.as_deref(), Some("light"));
    assert_eq!(config.logging.level.as_deref(), Some("debug"));
}

#[test]
fn defaults_resolve_against_a_backend() {
    let cli = parse(&[]);
    let resolved = backend_config().resolve(&cli).unwrap();

    let backend = resolved.backend.expect("backend");
    assert_eq!(backend.anon_key, "anon");
    assert_eq!(backend.table, "listings");
    assert_eq!(resolved.fixture, None);
    assert_eq!(resolved.location, None);
    assert_eq!(resolved.categories.len(), DEFAULT_CATEGORIES.len());
    assert_eq!(resolved.categories[0], Category::all());
    assert_eq!(resolved.initial_category, Category::all());
    assert_eq!(resolved.currency_symbol, "$");
    assert_eq!(resolved.theme_name, "slate");
    assert_eq!(resolved.log_level, LevelFilter::Info);
}

#[test]
fn configured_values_flow_through() {
    let cli = parse(&[]);
    let mut config = backend_config();
    config.backend.table = Some("cars".into());
    config.explore.categories = Some(vec!["SUV".into(), "Van".into()]);
    config.explore.category = Some("Van".into());
    config.explore.currency_symbol = Some("€".into());
    config.location.latitude = Some(48.85);
    config.location.longitude = Some(2.35);
    config.ui.theme = Some("Light".into());

    let resolved = config.resolve(&cli).unwrap();

    assert_eq!(resolved.backend.unwrap().table, "cars");
    assert_eq!(
        resolved.categories,
        vec![Category::all(), Category::new("SUV"), Category::new("Van")]
    );
    assert_eq!(resolved.initial_category, Category::new("Van"));
    assert_eq!(resolved.currency_symbol, "€");
    let location = resolved.location.unwrap();
    assert_eq!(location.latitude, 48.85);
    assert_eq!(location.longitude, 2.35);
    assert_eq!(resolved.theme, LIGHT);
    assert_eq!(resolved.theme_name, "light");
}

#[test]
fn unparsable_backend_url_names_the_flag() {
    let cli = parse(&["--backend-url", "not a url", "--anon-key", "anon"]);
    let mut config = RawConfig::default();
    config.apply_cli_overrides(&cli);

    let message = config.resolve(&cli).unwrap_err().to_string();
    assert!(message.contains("backend.url"));
    assert!(message.contains("CLI flag `--backend-url`"));
}

#[test]
fn backend_url_requires_an_anon_key() {
    let cli = parse(&[]);
    let mut config = backend_config();
    config.backend.anon_key = None;

    let message = config.resolve(&cli).unwrap_err().to_string();
    assert!(message.contains("backend.anon_key"));
    assert!(message.contains("(unset)"));
}

#[test]
fn half_a_location_is_rejected() {
    let cli = parse(&[]);
    let mut config = backend_config();
    config.location.latitude = Some(10.0);

    let message = config.resolve(&cli).unwrap_err().to_string();
    assert!(message.contains("location.latitude"));
    assert!(message.contains("location.longitude must be set as well"));
}

#[test]
fn out_of_range_location_is_rejected() {
    let cli = parse(&["--latitude", "91", "--longitude", "0"]);
    let mut config = backend_config();
    config.apply_cli_overrides(&cli);

    let message = config.resolve(&cli).unwrap_err().to_string();
    assert!(message.contains("location.latitude"));
    assert!(message.contains("CLI flag `--latitude`"));

    let cli = parse(&["--latitude", "10", "--longitude", "-200"]);
    let mut config = backend_config();
    config.apply_cli_overrides(&cli);
    let message = config.resolve(&cli).unwrap_err().to_string();
    assert!(message.contains("location.longitude"));
}

#[test]
fn unknown_theme_and_level_are_rejected() {
    let cli = parse(&["--theme", "neon"]);
    let mut config = backend_config();
    config.apply_cli_overrides(&cli);
    let message = config.resolve(&cli).unwrap_err().to_string();
    assert!(message.contains("ui.theme"));
    assert!(message.contains("slate, light"));

    let cli = parse(&["--log-level", "chatty"]);
    let mut config = backend_config();
    config.apply_cli_overrides(&cli);
    let message = config.resolve(&cli).unwrap_err().to_string();
    assert!(message.contains("logging.level"));
}

#[test]
fn category_list_always_leads_with_all() {
    let categories = sanitize_categories(vec![
        " SUV ".into(),
        "All".into(),
        String::new(),
        "SUV".into(),
        "Van".into(),
    ]);
    assert_eq!(
        categories,
        vec![Category::all(), Category::new("SUV"), Category::new("Van")]
    );

    let categories = sanitize_categories(vec!["Truck".into()]);
    assert_eq!(categories, vec![Category::all(), Category::new("Truck")]);
}

#[test]
fn detect_source_prefers_cli_flags() {
    assert_eq!(
        detect_source(true, true, "DRIVE__UI__THEME", "--theme", "ui.theme"),
        Some(SettingSource::CliFlag("--theme"))
    );
    assert_eq!(
        detect_source(false, false, "DRIVE__UI__THEME", "--theme", "ui.theme"),
        None
    );
}
