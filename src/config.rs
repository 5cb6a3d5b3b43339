use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::game::COLS;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

/// How the terminal front-end labels and starts a game.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub player_one_name: String,
    pub player_two_name: String,
    /// Column the selector starts on.
    pub start_column: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            player_one_name: "P1".into(),
            player_two_name: "P2".into(),
            start_column: COLS / 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `info` or `connect_four=debug`.
    /// `RUST_LOG` overrides it when set.
    pub level: String,
    /// Where log lines go. The terminal UI owns stdout, so without a file
    /// logs are discarded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "info".into(),
            file: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!("Warning: config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let display = &self.display;
        if display.player_one_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "display.player_one_name must not be empty".into(),
            ));
        }
        if display.player_two_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "display.player_two_name must not be empty".into(),
            ));
        }
        if display.player_one_name == display.player_two_name {
            return Err(ConfigError::Validation(
                "display.player_one_name and display.player_two_name must differ".into(),
            ));
        }
        if display.start_column >= COLS {
            return Err(ConfigError::Validation(format!(
                "display.start_column must be < {COLS}"
            )));
        }

        if let Err(e) = tracing_subscriber::EnvFilter::try_new(&self.logging.level) {
            return Err(ConfigError::Validation(format!(
                "logging.level '{}' is not a valid filter: {e}",
                self.logging.level
            )));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
