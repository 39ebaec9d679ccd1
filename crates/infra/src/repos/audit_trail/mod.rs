mod inmemory;
mod postgres;

pub use inmemory::InMemoryAuditTrailRepo;
pub use postgres::PostgresAuditTrailRepo;
use record_keeper_domain::{AuditEntry, ID};

#[async_trait::async_trait]
pub trait IAuditTrailRepo: Send + Sync {
    async fn insert(&self, entry: &AuditEntry) -> anyhow::Result<()>;
    /// Newest entries first, optionally only those of one entity
    async fn find_recent(
        &self,
        entity_id: Option<&ID>,
        limit: usize,
    ) -> anyhow::Result<Vec<AuditEntry>>;
}
