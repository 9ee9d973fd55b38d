use axum::{
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::handlers::{bot_guard, get_kindness, health, post_kindness, AppState};

/// Build the HTTP router with the bot filter in front of every route
pub fn router(state: AppState) -> Router {
    let favicon_assets = ServeDir::new(&state.config.favicon_dir);

    Router::new()
        .route("/health", get(health))
        .route("/api/health", get(health))
        .route("/api/kindness", get(get_kindness).post(post_kindness))
        .nest_service("/favico", favicon_assets)
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                // Ahead of CORS so preflights are filtered too
                .layer(middleware::from_fn_with_state(state.clone(), bot_guard))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": "Not Found" })),
    )
}
