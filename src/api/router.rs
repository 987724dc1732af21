//! API router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! Routes are nested under `/api/`. CORS is permissive: the reference
//! frontend is served from a separate dev-server origin.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::api::endpoints;
use crate::api::types::ApiContext;
use crate::core_state::CoreState;

/// Build the API router with all endpoints under `/api/`.
pub fn api_router(core: Arc<CoreState>) -> Router {
    let ctx = ApiContext::new(core);
    build_router(ctx)
}

fn build_router(ctx: ApiContext) -> Router {
    let api = Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/chat", post(endpoints::chat::send))
        .route(
            "/logs",
            get(endpoints::logs::list).post(endpoints::logs::submit),
        )
        .route("/logs/validate", post(endpoints::logs::validate))
        .route("/logs/suggest", post(endpoints::logs::suggest))
        .route("/analytics", get(endpoints::analytics::summary))
        .route(
            "/preferences",
            get(endpoints::preferences::fetch).put(endpoints::preferences::update),
        )
        .with_state(ctx);

    Router::new().nest("/api", api).layer(CorsLayer::permissive())
}
