//! Configuration resolution for the Graylog log forwarder.
//!
//! Settings come either from environment variables ([`EnvConfig`]) or from a
//! YAML/JSON record ([`RecordConfig`]). Both implement [`Config`], and
//! [`LoggerSettings::resolve`] turns either into a typed snapshot.

mod env;
mod environment;
mod error;
mod record;
mod settings;
mod timeout;
mod transport;

pub use env::{EnvConfig, EnvSource, ProcessEnv, vars};
pub use environment::EnvironmentKind;
pub use error::ConfigError;
pub use record::{ConfigRecord, RecordConfig};
pub use settings::LoggerSettings;
pub use timeout::DEFAULT_TLS_TIMEOUT;
pub use transport::{TLS_SELECTOR, Transport, UDP_SELECTOR};

use std::time::Duration;

/// Port used by the default record for both transports.
pub const DEFAULT_PORT: u32 = 12001;

/// Result type for configuration queries.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Config is the set of logging settings a logger constructor needs.
///
/// Queries have no side effects. Fallible queries return
/// [`ConfigError::MissingValue`] or [`ConfigError::MalformedValue`] instead of
/// defaulting when a required setting is unusable.
pub trait Config: Send + Sync {
    /// Emit structured JSON instead of human-readable text.
    fn enable_json_formatter(&self) -> bool;

    /// Application tag attached to every record. Required.
    fn app_name(&self) -> Result<String>;

    /// Transport to the aggregation service. Defaults to TLS over TCP.
    fn handler_type(&self) -> Transport;

    /// Aggregation service address. May be empty.
    fn host(&self) -> String;

    /// Aggregation service port for the selected transport.
    fn port(&self) -> Result<u32>;

    /// Minimum syslog severity forwarded.
    fn log_level(&self) -> Result<u32>;

    /// Connection timeout for the TLS transport.
    fn tls_timeout(&self) -> Result<Duration>;

    /// Deployment environment tag, e.g. "staging". Required.
    fn log_env_name(&self) -> Result<String>;

    /// Disable certificate verification.
    fn skip_tls_verify(&self) -> bool;

    fn is_test_env(&self) -> bool;

    /// True iff the transport selector is exactly "tls". Fails when no
    /// selector is configured at all.
    fn use_tls(&self) -> Result<bool>;

    /// Enable ANSI colour in text-mode output.
    fn use_colored_console_logs(&self) -> bool;
}
