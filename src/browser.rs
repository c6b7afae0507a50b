//! Default browser launch after startup

use std::net::SocketAddr;

/// URL of the calculator form for a bound listener.
///
/// Loopback and wildcard listeners are reached through `localhost`.
pub fn root_url(addr: SocketAddr) -> String {
    let ip = addr.ip();
    if ip.is_loopback() || ip.is_unspecified() {
        format!("http://localhost:{}", addr.port())
    } else {
        format!("http://{}", addr)
    }
}

/// Open `url` in the system browser without blocking.
///
/// Failures are logged; the server keeps running either way.
pub fn open_in_browser(url: &str) {
    match open::that_detached(url) {
        Ok(()) => tracing::info!("Opened browser at {}", url),
        Err(e) => tracing::warn!("Failed to open browser at {}: {}", url, e),
    }
}
