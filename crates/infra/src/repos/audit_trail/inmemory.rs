use super::IAuditTrailRepo;
use crate::repos::shared::inmemory_repo::*;
use record_keeper_domain::{AuditEntry, ID};
use std::cmp::Reverse;

pub struct InMemoryAuditTrailRepo {
    entries: std::sync::Mutex<Vec<AuditEntry>>,
}

impl InMemoryAuditTrailRepo {
    pub fn new() -> Self {
        Self {
            entries: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IAuditTrailRepo for InMemoryAuditTrailRepo {
    async fn insert(&self, entry: &AuditEntry) -> anyhow::Result<()> {
        insert(entry, &self.entries);
        Ok(())
    }

    async fn find_recent(
        &self,
        entity_id: Option<&ID>,
        limit: usize,
    ) -> anyhow::Result<Vec<AuditEntry>> {
        let mut entries = find_by(&self.entries, |e| match entity_id {
            Some(entity_id) => e.entity_id == *entity_id,
            None => true,
        });
        entries.sort_by_key(|e| Reverse(e.timestamp));
        entries.truncate(limit);
        Ok(entries)
    }
}
