use super::context::RequestContext;
use crate::envelope::ApiResult;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    timestamp: DateTime<Utc>,
    message: &'static str,
}

/// Responds with the database clock.
///
/// Runs `SELECT NOW()` through the repository, so a success envelope means
/// the server is up and the database answers. A failing database yields
/// `{ "success": false, "message": "Database connection failed" }`.
///
/// # Examples
/// - `GET /health` → `{ "success": true, "data": { "timestamp": ..., "message": ... } }`
#[tracing::instrument(skip(ctx))]
pub async fn health_check(ctx: RequestContext) -> ApiResult<HealthStatus> {
    // ---
    let timestamp = ctx.state().repository().current_time().await?;

    Ok(HealthStatus {
        timestamp,
        message: "Database connection is healthy",
    })
}
