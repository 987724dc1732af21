//! API server lifecycle — starts/stops the axum HTTP server.
//!
//! Pattern: bind → spawn background task → return handle with shutdown
//! channel. The handle reports the bound address so callers (and tests,
//! which bind port 0) know where the server landed.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::sync::oneshot;

use crate::api::router::api_router;
use crate::core_state::CoreState;

/// Handle to a running API server.
pub struct ApiServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl ApiServer {
    /// The address the server actually bound.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Shut down the server gracefully.
    pub fn shutdown(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
            tracing::info!("API server shutdown signal sent");
        }
    }
}

/// Bind the given address and serve the API in a background tokio task.
pub async fn start_api_server(
    core: Arc<CoreState>,
    addr: SocketAddr,
) -> Result<ApiServer, String> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| format!("Failed to bind API server on {addr}: {e}"))?;
    let bound = listener
        .local_addr()
        .map_err(|e| format!("Failed to read bound address: {e}"))?;

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let app = api_router(core);

    tokio::spawn(async move {
        let serve = axum::serve(listener, app).with_graceful_shutdown(async {
            let _ = shutdown_rx.await;
        });
        if let Err(e) = serve.await {
            tracing::error!("API server error: {e}");
        }
        tracing::info!("API server stopped");
    });

    tracing::info!(%bound, "API server listening");
    Ok(ApiServer {
        addr: bound,
        shutdown_tx: Some(shutdown_tx),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::{AssistantClient, HttpAssistant};
    use crate::models::MessageTags;

    async fn running_server() -> ApiServer {
        let core = Arc::new(CoreState::seeded());
        let addr: SocketAddr = "127.0.0.1:0".parse().unwrap();
        start_api_server(core, addr).await.unwrap()
    }

    #[tokio::test]
    async fn server_binds_an_ephemeral_port() {
        let mut server = running_server().await;
        assert_ne!(server.addr().port(), 0);
        server.shutdown();
    }

    #[tokio::test]
    async fn http_assistant_round_trip_against_live_server() {
        let mut server = running_server().await;
        let client = HttpAssistant::new(format!("http://{}", server.addr()));

        let reply = client
            .send("hydraulic pressure dropping on left main", &MessageTags::default())
            .await
            .unwrap();
        assert!(reply.text.contains("pressure loss"));
        assert!(reply.processing_time.is_some());

        server.shutdown();
    }

    #[tokio::test]
    async fn health_reachable_over_the_wire() {
        let mut server = running_server().await;
        let url = format!("http://{}/api/health", server.addr());

        let response = reqwest::get(&url).await.unwrap();
        assert!(response.status().is_success());
        let json: serde_json::Value = response.json().await.unwrap();
        assert_eq!(json["status"], "ok");

        server.shutdown();
    }
}
