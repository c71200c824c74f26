//! Environment-backed configuration.

use std::collections::HashMap;
use std::env;
use std::time::Duration;

use super::environment::EnvironmentKind;
use super::error::ConfigError;
use super::timeout::parse_timeout_secs;
use super::transport::{TLS_SELECTOR, Transport};
use super::{Config, Result};

/// Environment variable names read by [`EnvConfig`].
pub mod vars {
    pub const JSON_FORMATTER: &str = "ENABLE_DATADOG_JSON_FORMATTER";
    pub const APP_NAME: &str = "GRAYLOG_APP_NAME";
    pub const HANDLER_TYPE: &str = "GRAYLOG_HANDLER_TYPE";
    pub const HOST: &str = "GRAYLOG_HOST";
    pub const UDP_PORT: &str = "GRAYLOG_UDP_PORT";
    pub const TLS_PORT: &str = "GRAYLOG_TLS_PORT";
    pub const TLS_TIMEOUT_SECS: &str = "GRAYLOG_TLS_TIMEOUT_SECS";
    pub const LOG_LEVEL: &str = "GRAYLOG_LOG_LEVEL";
    pub const ENV_NAME: &str = "GRAYLOG_ENV";
    pub const SKIP_TLS_VERIFY: &str = "GRAYLOG_SKIP_TLS_VERIFY";
    pub const ENV_LEVEL: &str = "THEMUSE_ENV_LEVEL";
}

/// Source of environment variables.
pub trait EnvSource: Send + Sync {
    /// Returns None if the variable is not set.
    fn var(&self, key: &str) -> Option<String>;
}

/// The live process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// EnvConfig resolves logger settings from environment variables.
///
/// Nothing is cached: every query reads the source again, so values reflect
/// the environment at call time.
#[derive(Debug, Clone, Default)]
pub struct EnvConfig<S = ProcessEnv> {
    source: S,
    kind: EnvironmentKind,
}

impl EnvConfig<ProcessEnv> {
    /// Read from the process environment.
    pub fn new() -> Self {
        Self::with_source(ProcessEnv)
    }
}

impl<S: EnvSource> EnvConfig<S> {
    pub fn with_source(source: S) -> Self {
        Self {
            source,
            kind: EnvironmentKind::default(),
        }
    }

    pub fn environment_kind(mut self, kind: EnvironmentKind) -> Self {
        self.kind = kind;
        self
    }

    /// Unset is treated the same as empty.
    fn get(&self, key: &str) -> String {
        self.source.var(key).unwrap_or_default()
    }

    fn required(&self, key: &'static str) -> Result<String> {
        let value = self.get(key);
        if value.is_empty() {
            return Err(ConfigError::MissingValue { key });
        }
        Ok(value)
    }

    fn flag(&self, key: &str) -> bool {
        self.get(key) == "true"
    }

    fn required_u32(&self, key: &'static str) -> Result<u32> {
        let value = self.required(key)?;
        if !value.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(ConfigError::malformed(key, &value, "expected an unsigned integer"));
        }
        value
            .parse()
            .map_err(|e| ConfigError::malformed(key, &value, e))
    }
}

impl<S: EnvSource> Config for EnvConfig<S> {
    fn enable_json_formatter(&self) -> bool {
        self.flag(vars::JSON_FORMATTER)
    }

    fn app_name(&self) -> Result<String> {
        self.required(vars::APP_NAME)
    }

    fn handler_type(&self) -> Transport {
        Transport::from_selector(&self.get(vars::HANDLER_TYPE))
    }

    fn host(&self) -> String {
        self.get(vars::HOST)
    }

    fn port(&self) -> Result<u32> {
        match self.handler_type() {
            Transport::Udp => self.required_u32(vars::UDP_PORT),
            Transport::Tcp => self.required_u32(vars::TLS_PORT),
        }
    }

    fn log_level(&self) -> Result<u32> {
        self.required_u32(vars::LOG_LEVEL)
    }

    fn tls_timeout(&self) -> Result<Duration> {
        parse_timeout_secs(vars::TLS_TIMEOUT_SECS, &self.get(vars::TLS_TIMEOUT_SECS))
    }

    fn log_env_name(&self) -> Result<String> {
        self.required(vars::ENV_NAME)
    }

    fn skip_tls_verify(&self) -> bool {
        self.flag(vars::SKIP_TLS_VERIFY)
    }

    fn is_test_env(&self) -> bool {
        self.kind.is_test()
    }

    fn use_tls(&self) -> Result<bool> {
        Ok(self.required(vars::HANDLER_TYPE)? == TLS_SELECTOR)
    }

    fn use_colored_console_logs(&self) -> bool {
        self.get(vars::ENV_LEVEL) == "0"
    }
}
