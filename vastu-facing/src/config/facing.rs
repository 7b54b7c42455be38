//! Main FacingConfig and loading methods.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::ConfigLoadError;
use super::matching::MatchingConfig;
use super::report::ReportConfig;

/// Path checked by [`FacingConfig::load_default`].
pub const DEFAULT_CONFIG_PATH: &str = "configs/config.yaml";

/// Full configuration loaded from YAML
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FacingConfig {
    /// Nearest-road matching settings
    #[serde(default)]
    pub matching: MatchingConfig,

    /// Report settings
    #[serde(default)]
    pub report: ReportConfig,
}

impl FacingConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load from default config path (configs/config.yaml)
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new(DEFAULT_CONFIG_PATH);
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse and validate from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: FacingConfig =
            serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to a YAML string
    pub fn to_yaml(&self) -> Result<String, ConfigLoadError> {
        serde_yaml::to_string(self).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Check every section.
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        self.matching
            .validate()
            .map_err(|e| ConfigLoadError::Invalid(e.to_string()))?;
        self.report
            .validate()
            .map_err(|e| ConfigLoadError::Invalid(e.to_string()))
    }
}
