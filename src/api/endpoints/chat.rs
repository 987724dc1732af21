//! Chat endpoint.
//!
//! `POST /api/chat` — the assistant-reply contract. The request carries the
//! message plus optional classification tags; the response carries the reply
//! text and the measured handling time in seconds.

use std::time::Instant;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::{AircraftModel, IssueCategory, MessageTags};

/// Longest message the endpoint accepts.
const MAX_MESSAGE_CHARS: usize = 2000;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: Option<String>,
    pub aircraft_model: Option<AircraftModel>,
    pub issue_category: Option<IssueCategory>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub response: String,
    pub processing_time: f64,
}

/// `POST /api/chat` — answer a maintenance question.
pub async fn send(
    State(ctx): State<ApiContext>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let started = Instant::now();

    let message = match req.message.as_deref().map(str::trim) {
        Some(m) if !m.is_empty() => m.to_string(),
        _ => return Err(ApiError::BadRequest("No message provided".into())),
    };
    if message.chars().count() > MAX_MESSAGE_CHARS {
        return Err(ApiError::BadRequest(format!(
            "Message too long (max {MAX_MESSAGE_CHARS} chars)"
        )));
    }

    let tags = MessageTags {
        aircraft_model: req.aircraft_model,
        issue_category: req.issue_category,
    };
    tracing::info!(
        message = %message,
        aircraft_model = ?tags.aircraft_model,
        issue_category = ?tags.issue_category,
        "chat message received"
    );

    let response = ctx.core.responder().respond(&message, &tags);
    let processing_time = round2(started.elapsed().as_secs_f64());
    tracing::debug!(processing_time, "chat reply produced");

    Ok(Json(ChatResponse {
        response,
        processing_time,
    }))
}

fn round2(seconds: f64) -> f64 {
    (seconds * 100.0).round() / 100.0
}
