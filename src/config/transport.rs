//! Wire transport to the aggregation service.

use std::fmt;

/// Selector value that picks TLS over TCP.
pub const TLS_SELECTOR: &str = "tls";
/// Selector value that picks plain UDP.
pub const UDP_SELECTOR: &str = "udp";

/// Transport used to ship log records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transport {
    /// TLS-wrapped TCP.
    #[default]
    Tcp,
    /// Plain UDP datagrams.
    Udp,
}

impl Transport {
    /// Map a transport selector to a transport.
    ///
    /// Only `"udp"` selects UDP; `"tls"`, empty and unrecognised values all
    /// fall back to TLS over TCP.
    pub fn from_selector(selector: &str) -> Self {
        match selector {
            TLS_SELECTOR => Transport::Tcp,
            UDP_SELECTOR => Transport::Udp,
            _ => Transport::Tcp,
        }
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transport::Tcp => write!(f, "tcp"),
            Transport::Udp => write!(f, "udp"),
        }
    }
}
