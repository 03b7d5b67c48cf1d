use async_trait::async_trait;
use sinkhole_dns_application::ports::VerdictStore;
use sinkhole_dns_domain::{DomainError, Verdict};
use sqlx::{Row, SqlitePool};
use tracing::debug;

/// SQLite-backed verdict store.
///
/// The upsert relies on the `domain` primary key, so concurrent `put`
/// calls for the same key resolve to last-writer-wins with no partial
/// rows. Stale entries are never deleted here; freshness is evaluated
/// by the classification service on read.
pub struct SqliteVerdictStore {
    pool: SqlitePool,
}

impl SqliteVerdictStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VerdictStore for SqliteVerdictStore {
    async fn get(&self, domain: &str) -> Result<Option<Verdict>, DomainError> {
        let row = sqlx::query(
            "SELECT domain, is_malicious, observed_at FROM verdicts WHERE domain = ?",
        )
        .bind(domain)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(row.map(|row| {
            Verdict::new(
                row.get::<String, _>("domain"),
                row.get::<i64, _>("is_malicious") != 0,
                row.get::<i64, _>("observed_at"),
            )
        }))
    }

    async fn put(
        &self,
        domain: &str,
        is_malicious: bool,
        observed_at: i64,
    ) -> Result<(), DomainError> {
        sqlx::query(
            "INSERT INTO verdicts (domain, is_malicious, observed_at)
             VALUES (?, ?, ?)
             ON CONFLICT(domain) DO UPDATE SET
                 is_malicious = excluded.is_malicious,
                 observed_at = excluded.observed_at",
        )
        .bind(domain)
        .bind(is_malicious as i64)
        .bind(observed_at)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        debug!(domain = %domain, is_malicious, observed_at, "Verdict persisted");
        Ok(())
    }
}
