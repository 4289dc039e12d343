//! Network reachability probing.
//!
//! The orchestrator consults connectivity synchronously before deciding
//! between network and cache. This is a point-in-time answer, not a
//! guarantee - the link can drop between the probe and the actual fetch,
//! and the fetch path handles that by falling back to the cache.

use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

/// Point-in-time reachability query.
pub trait Connectivity: Send + Sync {
    /// Whether the network currently looks reachable.
    fn is_connected(&self) -> bool;
}

/// Probes reachability with a short TCP connect to the catalog host.
pub struct TcpProbe {
    host: String,
    port: u16,
    timeout: Duration,
}

const DEFAULT_PORT: u16 = 443;
const PROBE_TIMEOUT: Duration = Duration::from_millis(1500);

impl TcpProbe {
    /// Create a probe for an explicit host and port.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            timeout: PROBE_TIMEOUT,
        }
    }

    /// Create a probe targeting the host of the catalog base URL.
    pub fn for_base_url(base_url: &str) -> Self {
        match reqwest::Url::parse(base_url) {
            Ok(url) => {
                let host = url.host_str().unwrap_or("itunes.apple.com").to_string();
                let port = url.port_or_known_default().unwrap_or(DEFAULT_PORT);
                Self::new(host, port)
            }
            Err(e) => {
                tracing::warn!("Unparseable base URL {:?}: {}, probing default host", base_url, e);
                Self::new("itunes.apple.com", DEFAULT_PORT)
            }
        }
    }
}

impl Connectivity for TcpProbe {
    fn is_connected(&self) -> bool {
        let addrs = match (self.host.as_str(), self.port).to_socket_addrs() {
            Ok(addrs) => addrs,
            Err(e) => {
                tracing::debug!("Connectivity probe: DNS failed for {}: {}", self.host, e);
                return false;
            }
        };

        for addr in addrs {
            if TcpStream::connect_timeout(&addr, self.timeout).is_ok() {
                return true;
            }
        }
        false
    }
}
