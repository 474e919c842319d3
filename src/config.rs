use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration loaded from config.toml or environment variables
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub tables: TablesConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Locations of the static lookup tables
///
/// `None` means the table bundled with the binary is used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TablesConfig {
    /// JSON object of `shortname -> "eip155:<chainId>"`
    #[serde(default)]
    pub chain_shortnames: Option<PathBuf>,
    /// TOML file with `[[network]]` entries
    #[serde(default)]
    pub networks: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl AppConfig {
    /// Load configuration from config.toml file and environment variables
    /// Environment variables take precedence over file configuration
    pub fn load() -> Result<Self, ConfigError> {
        Self::build(File::with_name("config").required(false))
    }

    /// Load configuration from an explicit file (must exist), still honouring
    /// environment overrides
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::build(File::from(path).required(true))
    }

    fn build(file: File<config::FileSourceFile, config::FileFormat>) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("output.format", "text")?
            .add_source(file)
            // SAFE_PASTE_TABLES__NETWORKS=/path/networks.toml overrides tables.networks
            .add_source(
                Environment::with_prefix("SAFE_PASTE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Get configuration, falling back to built-in defaults when loading fails
    pub fn get_defaults() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Falling back to default configuration: {}", e);
                Self::default()
            }
        }
    }
}
