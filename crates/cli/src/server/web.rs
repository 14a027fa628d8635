use dnsdrone_api::{create_api_routes, AppState};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Binds the scrape listener. Failing here aborts startup.
pub async fn bind_metrics_listener(addr: SocketAddr) -> anyhow::Result<TcpListener> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind metrics endpoint {}: {}", addr, e))?;
    info!(address = %listener.local_addr()?, "Metrics endpoint listening");
    Ok(listener)
}

/// Serves `/metrics` and `/health` until `shutdown` fires.
pub async fn start_web_server(
    listener: TcpListener,
    state: AppState,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    let app = create_api_routes(state);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await?;

    info!("Metrics endpoint stopped");
    Ok(())
}
