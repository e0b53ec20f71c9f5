use super::context::RequestContext;
use crate::envelope::ApiResult;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DbVersion {
    version: String,
}

/// GET /db-version
///
/// Reports the PostgreSQL server version string.
#[tracing::instrument(skip(ctx))]
pub async fn db_version(ctx: RequestContext) -> ApiResult<DbVersion> {
    // ---
    let version = ctx.state().repository().server_version().await?;
    Ok(DbVersion { version })
}
