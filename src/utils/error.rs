use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Tracking request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Tracking endpoint rejected the report: HTTP {status}")]
    EndpointRejectedError { status: u16 },

    #[error("Invalid tracking URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("State serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Config file error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

pub type Result<T> = std::result::Result<T, TrackerError>;
