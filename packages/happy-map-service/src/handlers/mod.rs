pub mod bot_guard;
pub mod kindness;

use std::sync::Arc;

use axum::{response::IntoResponse, Json};

use crate::{
    config::Config, libraries::bot_filter::RouteMatcher,
    services::geo_hub_index::KeywordHubIndex,
};

pub use bot_guard::bot_guard;
pub use kindness::{get_kindness, post_kindness};

/// Shared, read-only state for handlers and middleware
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub geo: Arc<KeywordHubIndex>,
    pub route_matcher: RouteMatcher,
}

impl AppState {
    pub fn new(config: Config, geo: KeywordHubIndex) -> Self {
        Self {
            config,
            geo: Arc::new(geo),
            route_matcher: RouteMatcher::default(),
        }
    }
}

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "happy-map-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
