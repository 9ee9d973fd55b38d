use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use tracing::{debug, warn};

use crate::handlers::AppState;
use crate::libraries::bot_filter::{evaluate, forbidden_response, FilterDecision};

/// Reject bot traffic on matched routes before it reaches a handler
pub async fn bot_guard(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let path = req.uri().path();
    if !state.route_matcher.matches(path) {
        return next.run(req).await;
    }

    // Non-visible-ASCII header values count as missing
    let user_agent = req
        .headers()
        .get(header::USER_AGENT)
        .and_then(|h| h.to_str().ok());

    match evaluate(path, user_agent) {
        FilterDecision::Pass(reason) => {
            debug!("Passing {} ({:?})", path, reason);
            next.run(req).await
        }
        FilterDecision::Block(reason) => {
            warn!(
                "Blocked {} {} ({:?}, user-agent: {:?})",
                req.method(),
                path,
                reason,
                user_agent.unwrap_or("")
            );
            forbidden_response()
        }
    }
}
