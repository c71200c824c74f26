//! Parsing for the TLS timeout seconds setting.

use std::time::Duration;

use super::error::ConfigError;

/// Timeout used when no value is configured.
pub const DEFAULT_TLS_TIMEOUT: Duration = Duration::from_secs(3);

/// Parse a whole number of seconds.
///
/// Empty input yields [`DEFAULT_TLS_TIMEOUT`]. The value must fit a signed
/// 32-bit integer and must not be negative.
pub(crate) fn parse_timeout_secs(key: &'static str, s: &str) -> Result<Duration, ConfigError> {
    if s.is_empty() {
        return Ok(DEFAULT_TLS_TIMEOUT);
    }

    let secs: i32 = s
        .parse()
        .map_err(|e| ConfigError::malformed(key, s, e))?;

    if secs < 0 {
        return Err(ConfigError::malformed(key, s, "timeout must not be negative"));
    }

    Ok(Duration::from_secs(secs as u64))
}
