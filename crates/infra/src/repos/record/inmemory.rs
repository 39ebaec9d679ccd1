use super::IRecordRepo;
use crate::repos::shared::inmemory_repo::*;
use record_keeper_domain::{Record, ID};
use std::cmp::Reverse;

pub struct InMemoryRecordRepo {
    records: std::sync::Mutex<Vec<Record>>,
}

impl InMemoryRecordRepo {
    pub fn new() -> Self {
        Self {
            records: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IRecordRepo for InMemoryRecordRepo {
    async fn insert(&self, record: &Record) -> anyhow::Result<()> {
        insert(record, &self.records);
        Ok(())
    }

    async fn save(&self, record: &Record) -> anyhow::Result<()> {
        save(record, &self.records);
        Ok(())
    }

    async fn find(&self, record_id: &ID) -> anyhow::Result<Option<Record>> {
        Ok(find(record_id, &self.records))
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Record>> {
        let mut records = find_by(&self.records, |_| true);
        records.sort_by_key(|r| Reverse((r.event_date, r.created_at)));
        Ok(records)
    }

    async fn delete(&self, record_id: &ID) -> anyhow::Result<Option<Record>> {
        Ok(delete(record_id, &self.records))
    }
}
