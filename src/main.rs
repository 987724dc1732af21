use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use aerolog::api::start_api_server;
use aerolog::config;
use aerolog::core_state::CoreState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(config::DEFAULT_PORT);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    let core = Arc::new(CoreState::seeded());
    let mut server = start_api_server(core, addr)
        .await
        .expect("error while starting AeroLog");

    tracing::info!(
        "health check available at http://localhost:{}/api/health",
        server.addr().port()
    );

    tokio::signal::ctrl_c()
        .await
        .expect("failed to listen for shutdown signal");
    server.shutdown();
}
