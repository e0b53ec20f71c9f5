//! Request tracking middleware.

use crate::app_state::AppState;
use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};
use std::time::Instant;

/// Records latency, method, route and status of every matched request.
///
/// Uses the route template (`/users/{id}/posts`) rather than the raw path to
/// keep label cardinality bounded. Must be installed with `route_layer` so
/// that `MatchedPath` is available.
pub async fn track_requests(State(state): State<AppState>, req: Request, next: Next) -> Response {
    // ---
    let start = Instant::now();
    let method = req.method().to_string();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|matched| matched.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());

    let response = next.run(req).await;
    let status = response.status().as_u16();

    tracing::debug!(%method, %path, status, elapsed = ?start.elapsed(), "Handled request");
    state
        .metrics()
        .record_http_request(start, &path, &method, status);

    response
}
