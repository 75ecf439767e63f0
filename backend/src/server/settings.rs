//! Server settings loaded via OrthoConfig.
//!
//! Values come from command-line flags, `USER_SERVICE_*` environment
//! variables, or a configuration file, in OrthoConfig's usual precedence.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Address used when no host is configured.
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Configuration values controlling the HTTP listener.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USER_SERVICE")]
pub struct ServerSettings {
    /// Interface to bind, e.g. `127.0.0.1`.
    pub host: Option<IpAddr>,
    /// TCP port to listen on; 3000 unless configured.
    #[ortho_config(default = 3000)]
    pub port: u16,
}

impl ServerSettings {
    /// Socket address assembled from the configured host and port.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host.unwrap_or(DEFAULT_HOST), self.port)
    }
}
