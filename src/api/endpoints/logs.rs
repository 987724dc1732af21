//! Maintenance log endpoints.
//!
//! - `GET /api/logs` — the working set, newest first
//! - `POST /api/logs` — submit a completed draft
//! - `POST /api/logs/validate` — quality-check a log without storing it
//! - `POST /api/logs/suggest` — draft a corrective-action narrative

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::{AircraftModel, DraftLog, IssueCategory, MaintenanceLog};
use crate::suggestion::{SuggestionEngine, TemplateEngine};
use crate::validation::{LogValidator, RuleValidator, ValidationVerdict};

#[derive(Serialize)]
pub struct LogsResponse {
    pub logs: Vec<MaintenanceLog>,
    pub total: usize,
}

/// `GET /api/logs` — list the in-memory log set, newest first.
pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<LogsResponse>, ApiError> {
    let mut logs = ctx.core.logs()?;
    logs.sort_by(|a, b| b.date.cmp(&a.date));
    let total = logs.len();
    Ok(Json(LogsResponse { logs, total }))
}

/// `POST /api/logs` — finalize and store a draft.
///
/// The draft must satisfy the completeness invariant (every field except
/// parts present and non-empty); violations come back as 400 listing the
/// missing fields.
pub async fn submit(
    State(ctx): State<ApiContext>,
    Json(draft): Json<DraftLog>,
) -> Result<(StatusCode, Json<MaintenanceLog>), ApiError> {
    let id = format!("log-{}", Uuid::new_v4());
    let log = draft.finalize(id)?;
    ctx.core.add_log(log.clone())?;
    tracing::info!(id = %log.id, tail = %log.tail_number, "maintenance log submitted");
    Ok((StatusCode::CREATED, Json(log)))
}

/// `POST /api/logs/validate` — run the quality rules over a submitted log.
/// Stateless: nothing is stored.
pub async fn validate(Json(draft): Json<DraftLog>) -> Json<ValidationVerdict> {
    Json(RuleValidator.validate(&draft))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestRequest {
    pub aircraft_model: Option<AircraftModel>,
    pub issue_category: Option<IssueCategory>,
    pub description: Option<String>,
}

#[derive(Serialize)]
pub struct SuggestResponse {
    pub suggestion: String,
}

/// `POST /api/logs/suggest` — produce the corrective-action template for
/// the given aircraft, category, and complaint. All three are required.
pub async fn suggest(Json(req): Json<SuggestRequest>) -> Result<Json<SuggestResponse>, ApiError> {
    let aircraft_model = req
        .aircraft_model
        .ok_or_else(|| ApiError::BadRequest("aircraftModel is required".into()))?;
    let issue_category = req
        .issue_category
        .ok_or_else(|| ApiError::BadRequest("issueCategory is required".into()))?;
    let description = match req.description.as_deref().map(str::trim) {
        Some(d) if !d.is_empty() => d.to_string(),
        _ => return Err(ApiError::BadRequest("description is required".into())),
    };

    Ok(Json(SuggestResponse {
        suggestion: TemplateEngine.suggest(&aircraft_model, &issue_category, &description),
    }))
}
