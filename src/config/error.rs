//! Configuration error types.

use thiserror::Error;

/// Configuration resolution error.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A mandatory setting is absent or empty.
    #[error("{key} not set")]
    MissingValue { key: &'static str },
    /// A setting is present but could not be parsed.
    #[error("could not properly parse {key}: {value:?} ({reason})")]
    MalformedValue {
        key: &'static str,
        value: String,
        reason: String,
    },
    #[error("failed to read config file: {0}")]
    ReadFile(#[from] std::io::Error),
    #[error("failed to parse YAML config: {0}")]
    ParseYaml(#[from] serde_yaml::Error),
    #[error("failed to parse JSON config: {0}")]
    ParseJson(#[from] serde_json::Error),
}

impl ConfigError {
    pub(crate) fn malformed(key: &'static str, value: &str, reason: impl ToString) -> Self {
        ConfigError::MalformedValue {
            key,
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}
