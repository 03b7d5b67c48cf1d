use axum::Router;
use sinkhole_dns_api::{create_api_routes, AppState};
use std::net::SocketAddr;
use tracing::info;

pub async fn start_web_server(bind_addr: SocketAddr, state: AppState) -> anyhow::Result<()> {
    let app = Router::new().nest("/api", create_api_routes(state));

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    info!(bind_address = %bind_addr, "Web server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
