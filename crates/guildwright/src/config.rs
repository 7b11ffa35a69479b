//! Layered configuration.

use config::{Config, File, FileFormat};
use guildwright_error::{ConfigError, GuildwrightError, GuildwrightResult};
use guildwright_staging::IdAllocator;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../guildwright.toml");

/// `[staging]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, derive_getters::Getters)]
pub struct StagingConfig {
    /// First placeholder id of every graph
    first_temp_id: u64,
}

impl Default for StagingConfig {
    fn default() -> Self {
        Self {
            first_temp_id: IdAllocator::DEFAULT_FIRST_ID,
        }
    }
}

/// `[output]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, derive_getters::Getters)]
pub struct OutputConfig {
    /// Pretty-print rendered documents
    pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

/// `[telemetry]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, derive_getters::Getters)]
pub struct TelemetryConfig {
    /// Tracing filter used when `RUST_LOG` is unset
    filter: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            filter: "info,guildwright=debug".to_string(),
        }
    }
}

/// Guildwright configuration.
///
/// Every section is optional; missing sections take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, derive_getters::Getters)]
pub struct GuildwrightConfig {
    #[serde(default)]
    staging: StagingConfig,
    #[serde(default)]
    output: OutputConfig,
    #[serde(default)]
    telemetry: TelemetryConfig,
}

impl GuildwrightConfig {
    /// Load configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> GuildwrightResult<Self> {
        debug!("Loading configuration from file");

        Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                GuildwrightError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize::<Self>()
            .map_err(|e| {
                GuildwrightError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?
            .validated()
    }

    /// Load configuration with precedence: current dir > home dir > bundled defaults.
    ///
    /// User config files are optional and silently skipped if not found.
    ///
    /// ```no_run
    /// use guildwright::GuildwrightConfig;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = GuildwrightConfig::load()?;
    /// let ids = config.allocator();
    /// # Ok(())
    /// # }
    /// ```
    #[instrument]
    pub fn load() -> GuildwrightResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/guildwright/guildwright.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("guildwright").required(false));

        builder
            .build()
            .map_err(|e| {
                GuildwrightError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize::<Self>()
            .map_err(|e| {
                GuildwrightError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?
            .validated()
    }

    /// The bundled defaults alone.
    pub fn bundled() -> GuildwrightResult<Self> {
        Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .build()
            .and_then(|config| config.try_deserialize::<Self>())
            .map_err(|e| {
                GuildwrightError::from(ConfigError::new(format!(
                    "Bundled configuration is invalid: {}",
                    e
                )))
            })?
            .validated()
    }

    /// Reject values that would fail later, while building a graph.
    fn validated(self) -> GuildwrightResult<Self> {
        let first = self.staging.first_temp_id;
        if first > IdAllocator::MAX_FIRST_ID {
            warn!(first_temp_id = first, "Rejected configured first id");
            return Err(ConfigError::new(format!(
                "staging.first_temp_id must be at most {}, got {}",
                IdAllocator::MAX_FIRST_ID,
                first
            ))
            .into());
        }
        Ok(self)
    }

    /// Allocator starting at the configured first id.
    pub fn allocator(&self) -> IdAllocator {
        IdAllocator::starting_at(self.staging.first_temp_id)
    }
}
