use super::ResolvedConfig;

pub(super) fn summary_lines(config: &ResolvedConfig) -> Vec<String> {
    let mut lines = vec!["Effective configuration:".to_string()];
    match (&config.fixture, &config.backend) {
        (Some(path), _) => lines.push(format!("  Listings: fixture {}", path.display())),
        (None, Some(backend)) => {
            lines.push(format!("  Backend URL: {}", backend.url));
            lines.push(format!("  Anon key: {}", redact(&backend.anon_key)));
            lines.push(format!("  Table: {}", backend.table));
        }
        (None, None) => lines.push("  Listings: (none)".to_string()),
    }
    match config.location {
        Some(coordinate) => lines.push(format!(
            "  Location: {:.4}, {:.4}",
            coordinate.latitude, coordinate.longitude
        )),
        None => lines.push("  Location: denied".to_string()),
    }
    let categories: Vec<&str> = config.categories.iter().map(|c| c.as_str()).collect();
    lines.push(format!("  Categories: {}", categories.join(", ")));
    lines.push(format!("  Start category: {}", config.initial_category));
    lines.push(format!("  Currency symbol: {}", config.currency_symbol));
    lines.push(format!("  UI theme: {}", config.theme_name));
    lines.push(format!("  Log level: {}", config.log_level));
    lines
}

pub(super) fn print_summary(config: &ResolvedConfig) {
    for line in summary_lines(config) {
        println!("{line}");
    }
}

/// Keep a short prefix so different keys stay distinguishable.
fn redact(key: &str) -> String {
    let prefix: String = key.chars().take(4).collect();
    if prefix.chars().count() == key.chars().count() {
        "****".to_string()
    } else {
        format!("{prefix}****")
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use drive::listings::{BackendConfig, Category, Coordinate};
    use drive::theme::Theme;
    use log::LevelFilter;
    use url::Url;

    use super::*;

    fn config() -> ResolvedConfig {
        let url = Url::parse("https://example.supabase.co").unwrap();
        ResolvedConfig {
            backend: Some(BackendConfig::new(url, "eyJhbGciOiJIUzI1NiJ9.secret")),
            fixture: None,
            location: Coordinate::new(37.7749, -122.4194),
            categories: vec![Category::all(), Category::new("SUV")],
            initial_category: Category::all(),
            currency_symbol: "$".into(),
            theme_name: "slate".into(),
            theme: Theme::default(),
            log_level: LevelFilter::Info,
        }
    }

    #[test]
    fn anon_key_is_redacted() {
        assert_eq!(redact("abc"), "****");
        assert_eq!(redact("eyJhbGciOi"), "eyJh****");

        let lines = summary_lines(&config());
        assert!(lines.iter().any(|line| line == "  Anon key: eyJh****"));
        assert!(!lines.iter().any(|line| line.contains("secret")));
    }

    #[test]
    fn summary_names_fixture_and_location() {
        let config = ResolvedConfig {
            fixture: Some(PathBuf::from("cars.json")),
            location: None,
            ..config()
        };

        let lines = summary_lines(&config);
        assert!(lines.contains(&"  Listings: fixture cars.json".to_string()));
        assert!(lines.contains(&"  Location: denied".to_string()));
        assert!(lines.contains(&"  Categories: All, SUV".to_string()));

        print_summary(&config);
    }
}
