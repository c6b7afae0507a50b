//! Pressure vessel steel weight calculator served over HTTP.
//!
//! `GET /` serves the form, `POST /calculate` renders the weight of a
//! cylindrical shell plus two dished heads.

pub mod browser;
pub mod config;
pub mod error;
pub mod routes;
pub mod server;
pub mod vessel;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

pub use config::Config;
pub use server::{Server, ServerHandle};

/// Build the full application router
pub fn app(config: &Config) -> Router {
    Router::new()
        .merge(vessel::router())
        .merge(routes::static_files(&config.static_dir))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new()),
        )
}
