//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Account grouping configuration.
    #[serde(default)]
    pub grouping: GroupingConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Account grouping configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct GroupingConfig {
    /// Group mode used when the caller does not pick one
    /// (`none`, `institution` or `accountType`).
    #[serde(default = "default_mode")]
    pub default_mode: String,
    /// Label used when a label map has no entry for a group key.
    #[serde(default = "default_unknown_label")]
    pub unknown_label: String,
}

impl Default for GroupingConfig {
    fn default() -> Self {
        Self {
            default_mode: default_mode(),
            unknown_label: default_unknown_label(),
        }
    }
}

fn default_mode() -> String {
    "none".to_string()
}

fn default_unknown_label() -> String {
    "Unknown".to_string()
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_filter")]
    pub filter: String,
    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            json: false,
        }
    }
}

fn default_filter() -> String {
    "folio=info".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, lowest precedence first: `config/default`,
    /// `config/{RUN_MODE}`, then `FOLIO__*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("FOLIO").separator("__"))
            .build()?;

        let loaded: Self = config.try_deserialize()?;
        tracing::debug!(
            run_mode = %run_mode,
            default_mode = %loaded.grouping.default_mode,
            "Configuration loaded"
        );
        Ok(loaded)
    }
}
