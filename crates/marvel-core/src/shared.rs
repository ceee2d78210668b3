//! Shared configuration used by the core and the gateway.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application name used in page titles when none is configured.
pub const DEFAULT_APP_NAME: &str = "Marvel App";

/// Global application configuration. Load from TOML or env.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Application identity, shown in the header and appended to every page title.
    pub app_name: String,
    /// HTTP port for the gateway.
    pub port: u16,
    /// Optional path to a characters JSON file. When unset the bundled dataset is used.
    #[serde(default)]
    pub dataset_path: Option<String>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            port: 3001,
            dataset_path: None,
        }
    }
}

impl CoreConfig {
    /// `"{page} | {app_name}"`, or just the app name for an empty page label.
    pub fn page_title(&self, page: &str) -> String {
        if page.is_empty() {
            self.app_name.clone()
        } else {
            format!("{} | {}", page, self.app_name)
        }
    }

    /// Dataset path, ignoring blank values coming from env overrides.
    pub fn resolved_dataset_path(&self) -> Option<&str> {
        self.dataset_path
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Load config from file and environment. Precedence: env `MARVEL_CONFIG` path > `config/marvel` > defaults.
    pub fn load() -> Result<Self, config::ConfigError> {
        let config_path = std::env::var("MARVEL_CONFIG").unwrap_or_else(|_| "config/marvel".to_string());
        let builder = config::Config::builder()
            .set_default("app_name", DEFAULT_APP_NAME)?
            .set_default("port", 3001_i64)?;

        // `config::File::with_name` resolves the extension, so `config/marvel` finds `config/marvel.toml`.
        let path = Path::new(&config_path);
        let builder = if path.exists() {
            builder.add_source(config::File::from(path))
        } else {
            builder.add_source(config::File::with_name(&config_path).required(false))
        };

        let built = builder
            .add_source(config::Environment::with_prefix("MARVEL").separator("__"))
            .build()?;

        built.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_title_appends_app_name() {
        let config = CoreConfig::default();
        assert_eq!(config.page_title("Characters"), "Characters | Marvel App");
        assert_eq!(config.page_title(""), "Marvel App");
    }

    #[test]
    fn blank_dataset_path_is_ignored() {
        let config = CoreConfig {
            dataset_path: Some("   ".to_string()),
            ..CoreConfig::default()
        };
        assert_eq!(config.resolved_dataset_path(), None);

        let config = CoreConfig {
            dataset_path: Some("data/heroes.json".to_string()),
            ..CoreConfig::default()
        };
        assert_eq!(config.resolved_dataset_path(), Some("data/heroes.json"));
    }

    #[test]
    fn load_reads_file_then_env_overrides() {
        use std::io::Write;

        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "app_name = \"File App\"\nport = 4000\ndataset_path = \"heroes.json\"").unwrap();

        std::env::remove_var("MARVEL__APP_NAME");
        std::env::set_var("MARVEL_CONFIG", file.path());
        let config = CoreConfig::load().unwrap();
        assert_eq!(config.app_name, "File App");
        assert_eq!(config.port, 4000);
        assert_eq!(config.resolved_dataset_path(), Some("heroes.json"));

        std::env::set_var("MARVEL__APP_NAME", "Env App");
        let config = CoreConfig::load().unwrap();
        assert_eq!(config.app_name, "Env App");
        assert_eq!(config.port, 4000);

        std::env::remove_var("MARVEL__APP_NAME");
        std::env::set_var("MARVEL_CONFIG", file.path().with_file_name("no-such-marvel-config"));
        let config = CoreConfig::load().unwrap();
        assert_eq!(config.app_name, DEFAULT_APP_NAME);
        assert_eq!(config.port, 3001);
        assert_eq!(config.dataset_path, None);

        std::env::remove_var("MARVEL_CONFIG");
    }
}
