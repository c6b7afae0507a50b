use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use vessel_weight::config::DEFAULT_LOG_FILTER;
use vessel_weight::{browser, server, Config, Server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (RUST_LOG only)
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::default();

    let app = vessel_weight::app(&config);
    let server = Server::bind(config.bind_addr(), app)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr()))?;

    let addr = server.local_addr()?;
    tracing::info!("Server is listening on {}", addr);

    if config.open_browser {
        browser::open_in_browser(&browser::root_url(addr));
    }

    server.run_until(server::shutdown_signal()).await?;
    tracing::info!("Server stopped");

    Ok(())
}
