//! Toolkit configuration.
//!
//! Sources, lowest precedence first:
//! 1. Bundled defaults (`lineage.toml` shipped with the crate)
//! 2. `~/.config/lineage/lineage.toml`
//! 3. `./lineage.toml`
//!
//! Missing user files are skipped.

use crate::{ConfigError, LineageError, LineageResult};
use config::{Config, ConfigBuilder, File, FileFormat, builder::DefaultState};
use derive_getters::Getters;
use lineage_log::LogConfig;
use lineage_stack::StackConfig;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../../../lineage.toml");

/// Error origin for the bundled file alone.
const BUNDLED: &str = "bundled defaults";

/// Error origin for the bundled, home and working-directory files together.
const LAYERED: &str = "layered sources";

/// Stack capture and log output settings.
///
/// # Example
///
/// ```toml
/// [stack]
/// max_depth = 16
///
/// [log]
/// level = "info"
/// json = true
/// ```
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Getters,
    derive_setters::Setters,
    derive_builder::Builder,
)]
#[setters(prefix = "with_")]
#[builder(default)]
pub struct LineageConfig {
    /// Stack snapshot settings
    #[serde(default)]
    stack: StackConfig,

    /// Tracing subscriber settings
    #[serde(default)]
    log: LogConfig,
}

impl LineageConfig {
    /// The bundled defaults alone, ignoring user files.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled file does not parse.
    pub fn bundled() -> LineageResult<Self> {
        Self::deserialize_from(Self::defaults(), BUNDLED)
    }

    /// Load configuration from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> LineageResult<Self> {
        debug!("Loading configuration from file");

        let origin = path.as_ref().display().to_string();
        Self::deserialize_from(
            Config::builder().add_source(File::from(path.as_ref())),
            &origin,
        )
    }

    /// Load configuration with precedence: current dir > home dir > bundled defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if any present source fails to parse.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use lineage::LineageConfig;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = LineageConfig::load()?;
    /// lineage::init(&config)?;
    /// # Ok(())
    /// # }
    /// ```
    #[instrument]
    pub fn load() -> LineageResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        let mut builder = Self::defaults();

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/lineage/lineage.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("lineage").required(false));

        Self::deserialize_from(builder, LAYERED)
    }

    fn defaults() -> ConfigBuilder<DefaultState> {
        Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
    }

    fn deserialize_from(builder: ConfigBuilder<DefaultState>, origin: &str) -> LineageResult<Self> {
        builder
            .build()
            .map_err(|e| {
                LineageError::from(ConfigError::new(
                    origin,
                    format!("Failed to read configuration: {}", e),
                ))
            })?
            .try_deserialize()
            .map_err(|e| {
                LineageError::from(ConfigError::new(
                    origin,
                    format!("Failed to parse configuration: {}", e),
                ))
            })
    }
}
