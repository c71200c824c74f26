//! Record-backed configuration.

use serde::Deserialize;
use std::{fs, path::Path, time::Duration};

use super::environment::EnvironmentKind;
use super::error::ConfigError;
use super::timeout::parse_timeout_secs;
use super::transport::{TLS_SELECTOR, Transport};
use super::{Config, DEFAULT_PORT, Result};

/// Logger settings as stored in a YAML or JSON file.
///
/// Keys missing from the file take their value from [`ConfigRecord::default`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConfigRecord {
    pub enable_json_formatter: bool,
    pub app_name: String,
    pub env_name: String,
    /// Transport selector: "tls" or "udp".
    #[serde(alias = "handler_name")]
    pub handler_type: String,
    pub host: String,
    pub udp_port: u32,
    pub tls_port: u32,
    /// Whole seconds, kept as text so an empty value means "use the default".
    pub tls_timeout_seconds: String,
    pub log_level: u32,
}

impl Default for ConfigRecord {
    fn default() -> Self {
        Self {
            enable_json_formatter: true,
            app_name: "pracing".to_string(),
            env_name: "pracing".to_string(),
            handler_type: "udp".to_string(),
            host: "127.0.0.1".to_string(),
            udp_port: DEFAULT_PORT,
            tls_port: DEFAULT_PORT,
            tls_timeout_seconds: "3".to_string(),
            log_level: 4,
        }
    }
}

impl ConfigRecord {
    /// Load a record from a file.
    ///
    /// Files ending in `.json` are parsed as JSON, everything else as YAML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_yaml_str(&content)
        }
    }

    pub fn from_yaml_str(s: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }
}

/// RecordConfig resolves logger settings from a [`ConfigRecord`].
///
/// The environment is never consulted.
#[derive(Debug, Clone, Default)]
pub struct RecordConfig {
    record: ConfigRecord,
    kind: EnvironmentKind,
}

impl RecordConfig {
    pub fn new(record: ConfigRecord) -> Self {
        Self {
            record,
            kind: EnvironmentKind::default(),
        }
    }

    pub fn environment_kind(mut self, kind: EnvironmentKind) -> Self {
        self.kind = kind;
        self
    }
}

fn non_empty(key: &'static str, value: &str) -> Result<String> {
    if value.is_empty() {
        return Err(ConfigError::MissingValue { key });
    }
    Ok(value.to_string())
}

impl Config for RecordConfig {
    fn enable_json_formatter(&self) -> bool {
        self.record.enable_json_formatter
    }

    fn app_name(&self) -> Result<String> {
        non_empty("app_name", &self.record.app_name)
    }

    fn handler_type(&self) -> Transport {
        Transport::from_selector(&self.record.handler_type)
    }

    fn host(&self) -> String {
        self.record.host.clone()
    }

    fn port(&self) -> Result<u32> {
        Ok(match self.handler_type() {
            Transport::Udp => self.record.udp_port,
            Transport::Tcp => self.record.tls_port,
        })
    }

    fn log_level(&self) -> Result<u32> {
        Ok(self.record.log_level)
    }

    fn tls_timeout(&self) -> Result<Duration> {
        parse_timeout_secs("tls_timeout_seconds", &self.record.tls_timeout_seconds)
    }

    fn log_env_name(&self) -> Result<String> {
        non_empty("env_name", &self.record.env_name)
    }

    // Not part of the record schema.
    fn skip_tls_verify(&self) -> bool {
        false
    }

    fn is_test_env(&self) -> bool {
        self.kind.is_test()
    }

    fn use_tls(&self) -> Result<bool> {
        Ok(non_empty("handler_type", &self.record.handler_type)? == TLS_SELECTOR)
    }

    fn use_colored_console_logs(&self) -> bool {
        false
    }
}
