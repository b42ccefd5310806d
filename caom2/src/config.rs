//! Model configuration file support.
//!
//! Entity setters validate some numeric attributes against ranges. The
//! defaults match the CAOM2 data model; a TOML file can narrow or widen them:
//!
//! ```toml
//! [target]
//! redshift_min = -0.5
//! redshift_max = 1200.0
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Caom2Error, Caom2Result};

/// Model configuration from file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ModelConfig {
    #[serde(default)]
    pub target: TargetSettings,
}

/// Ranges applied to `Target` attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetSettings {
    #[serde(default = "default_redshift_min")]
    pub redshift_min: f64,
    #[serde(default = "default_redshift_max")]
    pub redshift_max: f64,
}

fn default_redshift_min() -> f64 {
    -0.5
}

fn default_redshift_max() -> f64 {
    1200.0
}

impl Default for TargetSettings {
    fn default() -> Self {
        Self {
            redshift_min: default_redshift_min(),
            redshift_max: default_redshift_max(),
        }
    }
}

impl ModelConfig {
    /// Load model configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(ModelConfig)` if successful
    /// * `Err(Caom2Error::Configuration)` if the file cannot be read, parsed
    ///   or describes an empty range
    pub fn from_file<P: AsRef<Path>>(path: P) -> Caom2Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Caom2Error::Configuration(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config = Self::from_toml_str(&content)?;
        log::info!("Loaded model configuration from {}", path.display());
        Ok(config)
    }

    /// Parse model configuration from TOML text.
    ///
    /// Parse errors name the offending key, e.g. `target.redshift_max`.
    pub fn from_toml_str(content: &str) -> Caom2Result<Self> {
        let deserializer = toml::Deserializer::new(content);
        let config: ModelConfig = serde_path_to_error::deserialize(deserializer).map_err(|e| {
            Caom2Error::Configuration(format!(
                "Failed to parse config at '{}': {}",
                e.path(),
                e.inner()
            ))
        })?;

        config.validate()?;
        log::debug!("Model configuration: {:?}", config);
        Ok(config)
    }

    /// Rejects ranges whose lower bound exceeds the upper bound.
    pub fn validate(&self) -> Caom2Result<()> {
        let target = &self.target;
        if !(target.redshift_min <= target.redshift_max) {
            return Err(Caom2Error::Configuration(format!(
                "target.redshift_min ({}) must not exceed target.redshift_max ({})",
                target.redshift_min, target.redshift_max
            )));
        }
        Ok(())
    }
}
