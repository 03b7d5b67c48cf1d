//! Dependency wiring: config + pool in, shared services out.

use sinkhole_dns_application::{ClassificationPolicy, ClassificationService};
use sinkhole_dns_domain::Config;
use sinkhole_dns_infrastructure::assessor;
use sinkhole_dns_infrastructure::dns::SinkholePolicy;
use sinkhole_dns_infrastructure::repositories::SqliteVerdictStore;
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::info;

pub struct AppContext {
    pub classifier: Arc<ClassificationService>,
    pub sinkhole: SinkholePolicy,
}

pub fn build_context(config: &Config, pool: SqlitePool) -> anyhow::Result<AppContext> {
    let store = Arc::new(SqliteVerdictStore::new(pool));
    let assessor = assessor::from_config(&config.classifier);

    let classifier = Arc::new(ClassificationService::new(
        store,
        assessor,
        ClassificationPolicy::from_config(&config.classifier),
    ));

    let sinkhole = SinkholePolicy::from_config(&config.dns)?;

    info!(
        mode = ?config.classifier.mode,
        cache_ttl_seconds = config.classifier.cache_ttl_seconds,
        fail_open = config.classifier.fail_open,
        sinkhole = %config.dns.sinkhole_address,
        "Application context assembled"
    );

    Ok(AppContext {
        classifier,
        sinkhole,
    })
}
