use crate::config::TrackerConfig;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk configuration file layout:
///
/// ```toml
/// [tracker]
/// endpoint = "https://ads.example.com/track"
/// device_id = "device-1"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub tracker: TrackerSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerSection {
    pub endpoint: String,
    pub device_id: Option<String>,
    pub advertising_id: Option<String>,
    pub state_path: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: TomlConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn into_tracker_config(self) -> TrackerConfig {
        let mut config = TrackerConfig::new(self.tracker.endpoint);
        config.device_id = self.tracker.device_id;
        config.advertising_id = self.tracker.advertising_id;
        if let Some(state_path) = self.tracker.state_path {
            config.state_path = state_path;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let content = r#"
            [tracker]
            endpoint = "https://ads.example.com/track"
            device_id = "device-1"
            advertising_id = "de305d54-75b4"
            state_path = "/var/lib/tracker"
        "#;

        let parsed: TomlConfig = toml::from_str(content).unwrap();
        let config = parsed.into_tracker_config();

        assert_eq!(config.endpoint, "https://ads.example.com/track");
        assert_eq!(config.device_id.as_deref(), Some("device-1"));
        assert_eq!(config.advertising_id.as_deref(), Some("de305d54-75b4"));
        assert_eq!(config.state_path, "/var/lib/tracker");
    }

    #[test]
    fn test_parse_minimal_config_uses_default_state_path() {
        let content = r#"
            [tracker]
            endpoint = "https://ads.example.com/track"
        "#;

        let parsed: TomlConfig = toml::from_str(content).unwrap();
        let config = parsed.into_tracker_config();

        assert_eq!(config.endpoint, "https://ads.example.com/track");
        assert!(config.device_id.is_none());
        assert!(!config.state_path.is_empty());
    }

    #[test]
    fn test_missing_endpoint_is_rejected() {
        let content = r#"
            [tracker]
            device_id = "device-1"
        "#;

        assert!(toml::from_str::<TomlConfig>(content).is_err());
    }
}
