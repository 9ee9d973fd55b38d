use axum::{extract::State, Json};
use tracing::info;

use crate::{
    handlers::AppState,
    libraries::kindness::fetch_kindness_data,
    models::{KindnessPoint, KindnessRequest},
};

/// Baseline-only kindness map
pub async fn get_kindness(State(state): State<AppState>) -> Json<Vec<KindnessPoint>> {
    Json(fetch_kindness_data(None, state.geo.as_ref()))
}

/// Kindness map with real events extracted from the supplied news items
pub async fn post_kindness(
    State(state): State<AppState>,
    Json(request): Json<KindnessRequest>,
) -> Json<Vec<KindnessPoint>> {
    let points = fetch_kindness_data(request.news(), state.geo.as_ref());

    info!(
        "Built kindness map from {} news items: {} real of {} points",
        request.news().map_or(0, <[_]>::len),
        points.iter().filter(|p| p.is_real()).count(),
        points.len()
    );

    Json(points)
}
