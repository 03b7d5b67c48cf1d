use sinkhole_dns_application::ClassificationService;
use sinkhole_dns_infrastructure::dns::{DnsServer, SinkholePolicy};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

pub async fn start_dns_server(
    bind_addr: SocketAddr,
    classifier: Arc<ClassificationService>,
    sinkhole: SinkholePolicy,
) -> anyhow::Result<()> {
    info!(bind_address = %bind_addr, "Starting DNS server");

    let server = DnsServer::bind(bind_addr, classifier, sinkhole).await?;

    info!("DNS server ready to accept queries");

    server.run().await?;

    Ok(())
}
