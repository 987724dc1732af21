//! Preference endpoints.
//!
//! Simple persisted-preference flags for the settings screen. They have no
//! effect on chat, validation, or suggestion behavior.

use axum::extract::State;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::preferences::Preferences;

/// `GET /api/preferences` — current settings.
pub async fn fetch(State(ctx): State<ApiContext>) -> Result<Json<Preferences>, ApiError> {
    Ok(Json(ctx.core.preferences()?))
}

/// `PUT /api/preferences` — replace the settings. Omitted fields fall back
/// to their defaults.
pub async fn update(
    State(ctx): State<ApiContext>,
    Json(prefs): Json<Preferences>,
) -> Result<Json<Preferences>, ApiError> {
    ctx.core.set_preferences(prefs.clone())?;
    tracing::info!(?prefs, "preferences updated");
    Ok(Json(prefs))
}
