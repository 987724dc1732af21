//! Dashboard analytics endpoint.

use axum::extract::State;
use axum::Json;

use crate::analytics::compute_analytics;
use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::AnalyticsData;

/// `GET /api/analytics` — dashboard figures derived from the current log
/// set. Recomputed per request; the working set is small.
pub async fn summary(State(ctx): State<ApiContext>) -> Result<Json<AnalyticsData>, ApiError> {
    let logs = ctx.core.logs()?;
    Ok(Json(compute_analytics(&logs)))
}
