//! Configuration management.
//!
//! The channel list ships inside the binary (`channels.toml`). Native builds
//! can override it, in increasing priority, from the user config directory,
//! a `.multiwatch.toml` in the working directory, and `MULTIWATCH_*`
//! environment variables.

use crate::embed::EmbedSettings;
use figment::{
    providers::{Format, Toml},
    Figment,
};
use garde::Validate;
use multiwatch_types::{Capacity, CapacityError, Registry, RegistryError, Source};
use serde::{Deserialize, Serialize};

/// Channel list and defaults compiled into every build.
pub const EMBEDDED_CONFIG: &str = include_str!("../channels.toml");

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read configuration: {0}")]
    Figment(#[from] figment::Error),

    #[error("Invalid default layout: {0}")]
    Capacity(#[from] CapacityError),

    #[error("Invalid channel list: {0}")]
    Registry(#[from] RegistryError),

    #[error("Invalid channel at position {index}: {report}")]
    InvalidSource { index: usize, report: String },
}

/// Configuration structure that matches the TOML file format.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    wall: WallSection,
    #[serde(default)]
    embed: EmbedSettings,
    #[serde(default)]
    logging: LoggingConfig,
    #[serde(default)]
    channels: Vec<Source>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WallSection {
    #[serde(default = "default_capacity")]
    default_capacity: u32,
}

impl Default for WallSection {
    fn default() -> Self {
        Self {
            default_capacity: default_capacity(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    /// If not set, uses RUST_LOG environment variable or defaults to "info"
    log_level: Option<String>,
}

fn default_capacity() -> u32 {
    Capacity::default().into()
}

/// Validated wall configuration.
#[derive(Debug, Clone)]
pub struct WallConfig {
    /// Layout shown at startup
    pub default_capacity: Capacity,
    /// Available sources, in channel bar order
    pub registry: Registry,
    /// How player frames are addressed
    pub embed: EmbedSettings,
    /// Log level (if set, overrides RUST_LOG environment variable)
    pub log_level: Option<String>,
}

impl WallConfig {
    /// Configuration from the compiled-in channel list only.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_provider(Figment::from(Toml::string(EMBEDDED_CONFIG)))
    }

    /// Load configuration with full priority chain: env vars > config files > embedded defaults.
    ///
    /// Config files are searched in this order:
    /// 1. `config.toml` in user config directory (~/.config/multiwatch/ on Linux)
    /// 2. `.multiwatch.toml` in current directory
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_figment() -> Result<Self, ConfigError> {
        use figment::providers::Env;

        let local_config = std::env::current_dir()
            .ok()
            .map(|d| d.join(".multiwatch.toml"));
        let user_config = directories::ProjectDirs::from("", "", "multiwatch")
            .map(|dirs| dirs.config_dir().join("config.toml"));

        let mut figment = Figment::from(Toml::string(EMBEDDED_CONFIG));

        if let Some(ref path) = user_config {
            if path.exists() {
                tracing::debug!("Merging user config {}", path.display());
                figment = figment.merge(Toml::file(path));
            }
        }

        if let Some(ref path) = local_config {
            if path.exists() {
                tracing::debug!("Merging local config {}", path.display());
                figment = figment.merge(Toml::file(path));
            }
        }

        // MULTIWATCH_WALL__DEFAULT_CAPACITY -> wall.default_capacity
        figment = figment.merge(Env::prefixed("MULTIWATCH_").split("__"));

        Self::from_provider(figment)
    }

    /// Extract and validate configuration from an assembled figment.
    pub fn from_provider(figment: Figment) -> Result<Self, ConfigError> {
        let file: ConfigFile = figment.extract()?;

        let default_capacity = Capacity::try_from(file.wall.default_capacity)?;

        for (index, source) in file.channels.iter().enumerate() {
            source
                .validate()
                .map_err(|report| ConfigError::InvalidSource {
                    index,
                    report: report.to_string(),
                })?;
        }
        let registry = Registry::new(file.channels)?;

        Ok(Self {
            default_capacity,
            registry,
            embed: file.embed,
            log_level: file.logging.log_level,
        })
    }
}
