//! Application configuration.
//!
//! Loaded from YAML files or environment variables into a single Config
//! struct.

mod storage;

pub use storage::{
    PostgresConfig, SnapshotsEnableConfig, SqliteConfig, StorageConfig, StorageType,
};

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";
/// Environment variable for configuration file path.
pub const CONFIG_ENV_VAR: &str = "SITEVAULT_CONFIG";
/// Prefix for configuration environment variables.
pub const CONFIG_ENV_PREFIX: &str = "SITEVAULT";
/// Environment variable for logging configuration.
pub const LOG_ENV_VAR: &str = "SITEVAULT_LOG";
/// Environment variable for the PostgreSQL connection URI override.
pub const DATABASE_URL_ENV_VAR: &str = "DATABASE_URL";

use serde::Deserialize;

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Storage configuration.
    pub storage: StorageConfig,
}

impl Config {
    /// Load configuration from file and environment.
    ///
    /// Configuration sources (in order of priority, later overrides earlier):
    /// 1. `config.yaml` in current directory (if exists)
    /// 2. File specified by `path` argument (if provided)
    /// 3. File specified by `CONFIG_ENV_VAR` environment variable (if set)
    /// 4. Environment variables with `CONFIG_ENV_PREFIX` prefix
    /// 5. `DATABASE_URL` as the PostgreSQL connection URI
    pub fn load(path: Option<&str>) -> Result<Self, Box<dyn std::error::Error>> {
        use ::config::{Config as ConfigLib, Environment, File, FileFormat};

        let mut builder = ConfigLib::builder()
            .add_source(File::new(DEFAULT_CONFIG_FILE, FileFormat::Yaml).required(false));

        // Add config file from path argument if provided
        if let Some(config_path) = path {
            builder = builder.add_source(File::new(config_path, FileFormat::Yaml).required(true));
        }

        // Add config file from CONFIG_ENV_VAR env var if set
        if let Ok(config_path) = std::env::var(CONFIG_ENV_VAR) {
            builder = builder.add_source(File::new(&config_path, FileFormat::Yaml).required(true));
        }

        let config = builder
            // Environment variables with CONFIG_ENV_PREFIX prefix
            .add_source(
                Environment::with_prefix(CONFIG_ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut config: Config = config.try_deserialize()?;

        // Conventional override used by hosted database providers
        if let Ok(uri) = std::env::var(DATABASE_URL_ENV_VAR) {
            config.storage.postgres.uri = uri;
        }

        Ok(config)
    }

    /// Create config for testing.
    pub fn for_test() -> Self {
        Self::default()
    }
}
