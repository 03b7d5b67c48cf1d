use sinkhole_dns_domain::config::DatabaseConfig;
use sinkhole_dns_infrastructure::database::create_pool;
use sqlx::SqlitePool;
use tracing::{error, info};

pub async fn init_database(cfg: &DatabaseConfig) -> anyhow::Result<SqlitePool> {
    info!(path = %cfg.path, "Initializing verdict database");

    let pool = create_pool(cfg).await.map_err(|e| {
        error!(path = %cfg.path, error = %e, "Failed to initialize verdict database");
        anyhow::anyhow!(e)
    })?;

    info!("Verdict database initialized");
    Ok(pool)
}
