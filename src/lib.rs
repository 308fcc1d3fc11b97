pub mod api;
pub mod config;
pub mod error;
pub mod forms;
pub mod models;
pub mod navigation;
pub mod pages;
pub mod session;
pub mod state;
pub mod sync;
pub mod views;

use std::sync::Arc;

use axum::Router;
use axum::http::{HeaderName, HeaderValue};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::api::{ApiClient, ApiError, Backend};
use crate::config::Config;
use crate::state::{AppState, SharedState};

/// Build the front end talking to the backend named in `config`.
pub fn build_app(config: Config) -> Result<Router, ApiError> {
    let client = ApiClient::new(&config.backend_url, config.backend_timeout)?;
    tracing::info!("Using backend at {}", client.base_url());
    Ok(build_app_with_backend(config, Arc::new(client)))
}

pub fn build_app_with_backend(config: Config, backend: Arc<dyn Backend>) -> Router {
    let state: SharedState = Arc::new(AppState { config, backend });

    Router::new()
        .merge(views::view_routes())
        .route("/health", axum::routing::get(health))
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-frame-options"),
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("referrer-policy"),
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
