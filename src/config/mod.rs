#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Plain configuration for library callers. The endpoint and the device and
/// advertising identifiers are supplied by the host application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerConfig {
    pub endpoint: String,
    pub device_id: Option<String>,
    pub advertising_id: Option<String>,
    #[serde(default = "default_state_path")]
    pub state_path: String,
}

impl TrackerConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            device_id: None,
            advertising_id: None,
            state_path: default_state_path(),
        }
    }
}

/// Tracking markers live under the user's local data directory by default.
pub fn default_state_path() -> String {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("download-tracker")
        .to_string_lossy()
        .into_owned()
}

impl ConfigProvider for TrackerConfig {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn device_id(&self) -> Option<&str> {
        self.device_id.as_deref()
    }

    fn advertising_id(&self) -> Option<&str> {
        self.advertising_id.as_deref()
    }

    fn state_path(&self) -> &str {
        &self.state_path
    }
}

impl Validate for TrackerConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("endpoint", &self.endpoint)?;
        validation::validate_path("state_path", &self.state_path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_default_state_path() {
        let config = TrackerConfig::new("https://ads.example.com/track");
        assert!(!config.state_path.is_empty());
        assert!(config.device_id.is_none());
    }

    #[test]
    fn test_validate_rejects_bad_endpoint() {
        let config = TrackerConfig::new("ftp://ads.example.com/track");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_https_endpoint() {
        let config = TrackerConfig::new("https://ads.example.com/track");
        assert!(config.validate().is_ok());
    }
}
