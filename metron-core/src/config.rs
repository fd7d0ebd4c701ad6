//! Conversion configuration
//!
//! Loaded once at startup from a small JSON document:
//!
//! ```json
//! { "precision": 2, "temperature": { "defaultFrom": "C", "defaultTo": "F" } }
//! ```
//!
//! Every key is optional. The resulting `Config` is immutable and is passed
//! explicitly to whoever converts.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value as JsonValue;
use thiserror::Error;
use tracing::{info, warn};

use crate::number::MAX_PRECISION;

/// Decimal digits used when the configuration gives no usable precision
pub const DEFAULT_PRECISION: u32 = 2;

const DEFAULT_TEMPERATURE_FROM: &str = "C";
const DEFAULT_TEMPERATURE_TO: &str = "F";

/// Errors loading a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Units substituted when a temperature conversion omits them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemperatureDefaults {
    pub default_from: String,
    pub default_to: String,
}

impl Default for TemperatureDefaults {
    fn default() -> Self {
        Self {
            default_from: DEFAULT_TEMPERATURE_FROM.to_string(),
            default_to: DEFAULT_TEMPERATURE_TO.to_string(),
        }
    }
}

/// Process-wide conversion settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Decimal digits every result is rounded to
    pub precision: u32,
    pub temperature: TemperatureDefaults,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            temperature: TemperatureDefaults::default(),
        }
    }
}

/// On-disk shape, kept loose so a bad `precision` degrades instead of failing
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
    precision: Option<JsonValue>,
    temperature: RawTemperature,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawTemperature {
    default_from: Option<String>,
    default_to: Option<String>,
}

impl Config {
    /// Builder: set precision (capped at `MAX_PRECISION`)
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision.min(MAX_PRECISION);
        self
    }

    /// Builder: set temperature default units
    pub fn with_temperature_defaults(
        mut self,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        self.temperature = TemperatureDefaults {
            default_from: from.into(),
            default_to: to.into(),
        };
        self
    }

    /// Parse a JSON configuration document.
    ///
    /// Unit codes are taken as given; they are checked per conversion.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        let raw: RawConfig = serde_json::from_str(json)?;
        let defaults = TemperatureDefaults::default();

        Ok(Self {
            precision: resolve_precision(raw.precision.as_ref()),
            temperature: TemperatureDefaults {
                default_from: raw.temperature.default_from.unwrap_or(defaults.default_from),
                default_to: raw.temperature.default_to.unwrap_or(defaults.default_to),
            },
        })
    }

    /// Read and parse a configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        info!(
            path = %path.display(),
            precision = config.precision,
            temperature_from = %config.temperature.default_from,
            temperature_to = %config.temperature.default_to,
            "loaded configuration"
        );
        Ok(config)
    }
}

/// Non-negative finite numbers up to `MAX_PRECISION` are used (fractions
/// truncated); anything else falls back to `DEFAULT_PRECISION`.
fn resolve_precision(value: Option<&JsonValue>) -> u32 {
    let Some(value) = value else {
        return DEFAULT_PRECISION;
    };

    match value.as_f64() {
        Some(n) if n.is_finite() && n >= 0.0 && n <= f64::from(MAX_PRECISION) => n.trunc() as u32,
        _ => {
            warn!(precision = %value, fallback = DEFAULT_PRECISION, "ignoring unusable precision");
            DEFAULT_PRECISION
        }
    }
}
