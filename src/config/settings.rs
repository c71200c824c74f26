//! Resolved logger settings.

use std::time::Duration;
use tracing::Level;

use super::transport::Transport;
use super::{Config, Result};

/// Every [`Config`] query evaluated once.
///
/// A logger constructor takes this instead of a `Config` so that any
/// configuration error surfaces before the logger exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerSettings {
    pub enable_json_formatter: bool,
    pub app_name: String,
    pub handler_type: Transport,
    pub host: String,
    pub port: u32,
    pub log_level: u32,
    pub tls_timeout: Duration,
    pub log_env_name: String,
    pub skip_tls_verify: bool,
    pub is_test_env: bool,
    pub use_tls: bool,
    pub use_colored_console_logs: bool,
}

impl LoggerSettings {
    /// Resolve all settings, stopping at the first error.
    pub fn resolve(config: &dyn Config) -> Result<Self> {
        Ok(Self {
            enable_json_formatter: config.enable_json_formatter(),
            app_name: config.app_name()?,
            handler_type: config.handler_type(),
            host: config.host(),
            port: config.port()?,
            log_level: config.log_level()?,
            tls_timeout: config.tls_timeout()?,
            log_env_name: config.log_env_name()?,
            skip_tls_verify: config.skip_tls_verify(),
            is_test_env: config.is_test_env(),
            use_tls: config.use_tls()?,
            use_colored_console_logs: config.use_colored_console_logs(),
        })
    }

    /// Aggregation service address as "host:port".
    pub fn endpoint(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Map the syslog severity threshold onto a tracing level.
    ///
    /// 0-3 (emergency..error) -> ERROR, 4 -> WARN, 5-6 (notice, info) -> INFO,
    /// 7 -> DEBUG, anything above -> TRACE.
    pub fn max_level(&self) -> Level {
        match self.log_level {
            0..=3 => Level::ERROR,
            4 => Level::WARN,
            5 | 6 => Level::INFO,
            7 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}
