use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VersionTagError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to write output to {}: {source}", path.display())]
    OutputError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl VersionTagError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            VersionTagError::OutputError { path, .. } => {
                format!("Could not append to output file {}", path.display())
            }
            VersionTagError::ConfigError { message } => format!("Invalid configuration: {}", message),
            VersionTagError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid configuration value for '{}': {}", field, reason)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            VersionTagError::OutputError { .. } => {
                "Check that the GITHUB_OUTPUT path exists and is writable"
            }
            VersionTagError::ConfigError { .. } => {
                "Make sure the config file exists and is valid TOML format"
            }
            VersionTagError::InvalidConfigValueError { .. } => {
                "Fix the reported field in the config file or command line"
            }
            _ => "Re-run with --verbose for more details",
        }
    }
}

pub type Result<T> = std::result::Result<T, VersionTagError>;
