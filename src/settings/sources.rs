use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use config::{Config, ConfigError, Environment, File};

use crate::cli::CliArgs;
use drive::app_dirs;

pub(super) const ENV_PREFIX: &str = "drive";

/// Build a [`Config`] instance by combining default locations with CLI overrides.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
    let mut builder = Config::builder();

    if !cli.no_config {
        for path in default_config_files() {
            builder = builder.add_source(File::from(path).required(false));
        }
    }

    for path in &cli.config {
        builder = builder.add_source(File::from(path.clone()).required(true));
    }

    builder = builder.add_source(environment());

    builder.build().map_err(|err| match err {
        ConfigError::Frozen => anyhow!("configuration builder is frozen"),
        other => other.into(),
    })
}

/// `DRIVE__SECTION__KEY` variables; only the category list is split on commas.
fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("explore.categories")
}

/// Discover the default configuration file locations that should be consulted.
pub(super) fn default_config_files() -> Vec<PathBuf> {
    let mut files = Vec::new();

    if let Ok(dir) = app_dirs::get_config_dir() {
        files.push(dir.join("config.toml"));
    }

    if let Ok(current_dir) = env::current_dir() {
        files.push(current_dir.join(".drive.toml"));
        files.push(current_dir.join("drive.toml"));
    }

    files
}

#[cfg(test)]
mod tests {
    use std::fs;

    use clap::Parser;

    use super::*;

    #[test]
    fn default_files_include_current_directory_variants() {
        let files = default_config_files();
        assert!(files.iter().any(|path| path.ends_with(".drive.toml")));
        assert!(files.iter().any(|path| path.ends_with("drive.toml")));
    }

    #[test]
    fn explicit_config_file_is_merged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(
            &path,
            concat!(
                "[backend]\nurl = \"https://example.supabase.co\"\n\n",
                "[explore]\ncategories = [\"SUV\", \"Van\"]\n",
            ),
        )
        .unwrap();

        let cli = CliArgs::parse_from([
            "drive",
            "--no-config",
            "--config",
            path.to_str().unwrap(),
        ]);
        let config = build_config(&cli).unwrap();

        assert_eq!(
            config.get_string("backend.url").unwrap(),
            "https://example.supabase.co"
        );
        assert_eq!(
            config.get::<Vec<String>>("explore.categories").unwrap(),
            vec!["SUV".to_string(), "Van".to_string()]
        );
    }

    #[test]
    fn missing_explicit_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let cli = CliArgs::parse_from([
            "drive",
            "--no-config",
            "--config",
            path.to_str().unwrap(),
        ]);

        assert!(build_config(&cli).is_err());
    }
}
