use crate::config::{toml_config::TomlConfig, TrackerConfig};
use crate::utils::error::{Result, TrackerError};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "download-tracker")]
#[command(about = "Report an application download to an attribution service")]
pub struct CliConfig {
    /// Application ID to report
    #[arg(long)]
    pub app_id: String,

    /// Attribution endpoint URL (required unless set in the config file)
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Device identifier, fingerprinted before sending
    #[arg(long)]
    pub device_id: Option<String>,

    /// Advertising identifier attached as `gaid`
    #[arg(long)]
    pub advertising_id: Option<String>,

    /// Directory holding the tracking state
    #[arg(long)]
    pub state_path: Option<String>,

    /// TOML config file; command-line flags override its values
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn into_tracker_config(self) -> Result<TrackerConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?.into_tracker_config(),
            None => {
                let endpoint =
                    self.endpoint
                        .clone()
                        .ok_or_else(|| TrackerError::MissingConfigError {
                            field: "endpoint".to_string(),
                        })?;
                TrackerConfig::new(endpoint)
            }
        };

        if let Some(endpoint) = self.endpoint {
            config.endpoint = endpoint;
        }
        if let Some(device_id) = self.device_id {
            config.device_id = Some(device_id);
        }
        if let Some(advertising_id) = self.advertising_id {
            config.advertising_id = Some(advertising_id);
        }
        if let Some(state_path) = self.state_path {
            config.state_path = state_path;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_cli() -> CliConfig {
        CliConfig {
            app_id: "12345".to_string(),
            endpoint: None,
            device_id: None,
            advertising_id: None,
            state_path: None,
            config: None,
            verbose: false,
        }
    }

    #[test]
    fn test_endpoint_flag_is_enough() {
        let mut cli = base_cli();
        cli.endpoint = Some("https://ads.example.com/track".to_string());

        let config = cli.into_tracker_config().unwrap();
        assert_eq!(config.endpoint, "https://ads.example.com/track");
    }

    #[test]
    fn test_missing_endpoint_is_an_error() {
        let err = base_cli().into_tracker_config().unwrap_err();
        assert!(matches!(err, TrackerError::MissingConfigError { .. }));
    }

    #[test]
    fn test_flags_override_config_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[tracker]\nendpoint = \"https://old.example.com/track\"\ndevice_id = \"from-file\""
        )
        .unwrap();

        let mut cli = base_cli();
        cli.config = Some(file.path().to_str().unwrap().to_string());
        cli.endpoint = Some("https://new.example.com/track".to_string());

        let config = cli.into_tracker_config().unwrap();
        assert_eq!(config.endpoint, "https://new.example.com/track");
        assert_eq!(config.device_id.as_deref(), Some("from-file"));
    }
}
