//! Fixed serving configuration.
//!
//! The server always listens on the same local port and serves the same
//! public directory. The environment only feeds the log filter (`RUST_LOG`).
//! Material and geometry constants live in [`crate::vessel::calculators`].

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
pub const PORT: u16 = 3000;
pub const STATIC_DIR: &str = "public";

/// Default tracing filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "vessel_weight=debug,tower_http=debug";

/// Server configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    /// Directory holding `index.html` and other public assets
    pub static_dir: PathBuf,
    /// Open the default browser once the listener is bound
    pub open_browser: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: HOST,
            port: PORT,
            static_dir: PathBuf::from(STATIC_DIR),
            open_browser: true,
        }
    }
}

impl Config {
    /// Socket address to listen on
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
