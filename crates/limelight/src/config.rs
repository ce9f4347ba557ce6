//! Handle configuration.
//!
//! ```yaml
//! table_name: limelight-front
//! cam_mode_policy: encoded
//! ```
//!
//! Every field is optional; missing fields take their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::keys::DEFAULT_TABLE_NAME;

/// How [`crate::Limelight::set_cam_mode`] encodes its argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CamModePolicy {
    /// Write the requested mode's code (`vision` = 0, `driver` = 1).
    #[default]
    Encoded,
    /// Always write `vision` (0), whatever was requested. Matches wrappers
    /// that never exposed driver mode; the camera stays in vision mode.
    LegacyForceVision,
}

/// Configuration for a [`crate::Limelight`] handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LimelightConfig {
    /// Name of the table the camera publishes under.
    pub table_name: String,
    /// Camera mode write behaviour.
    pub cam_mode_policy: CamModePolicy,
}

impl Default for LimelightConfig {
    fn default() -> Self {
        Self {
            table_name: DEFAULT_TABLE_NAME.to_string(),
            cam_mode_policy: CamModePolicy::Encoded,
        }
    }
}

impl LimelightConfig {
    /// Parse and validate a YAML document. Blank input yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] for malformed YAML or unknown fields and
    /// [`ConfigError::InvalidTableName`] if validation fails.
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a YAML config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise the
    /// errors of [`Self::from_yaml_str`].
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        let config = Self::from_yaml_str(&text)?;
        tracing::debug!(
            path = %path.display(),
            table = %config.table_name,
            cam_mode_policy = ?config.cam_mode_policy,
            "Loaded Limelight config"
        );
        Ok(config)
    }

    /// Serialise to YAML.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if serialisation fails.
    pub fn to_yaml_string(&self) -> ConfigResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTableName`] if the table name is empty
    /// or only whitespace.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.table_name.trim().is_empty() {
            return Err(ConfigError::invalid_table_name(self.table_name.as_str()));
        }
        Ok(())
    }

    /// Create a configuration builder.
    #[must_use]
    pub fn builder() -> LimelightConfigBuilder {
        LimelightConfigBuilder::default()
    }
}

/// Builder for [`LimelightConfig`].
#[derive(Debug, Default)]
pub struct LimelightConfigBuilder {
    config: LimelightConfig,
}

impl LimelightConfigBuilder {
    /// Set the table name.
    #[must_use]
    pub fn table_name(mut self, name: impl Into<String>) -> Self {
        self.config.table_name = name.into();
        self
    }

    /// Set the camera mode write policy.
    #[must_use]
    pub fn cam_mode_policy(mut self, policy: CamModePolicy) -> Self {
        self.config.cam_mode_policy = policy;
        self
    }

    /// Build the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn build(self) -> ConfigResult<LimelightConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
