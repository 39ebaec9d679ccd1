mod inmemory;
mod postgres;

pub use inmemory::InMemoryRecordRepo;
pub use postgres::PostgresRecordRepo;
use record_keeper_domain::{Record, ID};

#[async_trait::async_trait]
pub trait IRecordRepo: Send + Sync {
    async fn insert(&self, record: &Record) -> anyhow::Result<()>;
    async fn save(&self, record: &Record) -> anyhow::Result<()>;
    async fn find(&self, record_id: &ID) -> anyhow::Result<Option<Record>>;
    /// All records, newest `event_date` first
    async fn find_all(&self) -> anyhow::Result<Vec<Record>>;
    /// Deleting a record also deletes its reminders
    async fn delete(&self, record_id: &ID) -> anyhow::Result<Option<Record>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    fn record(title: &str, date: (i32, u32, u32)) -> Record {
        Record::new(
            title.into(),
            NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn create_update_and_delete() {
        let repo = InMemoryRecordRepo::new();
        let mut record = record("Passport", (2024, 6, 1));

        assert!(repo.insert(&record).await.is_ok());
        assert_eq!(repo.find(&record.id).await.unwrap(), Some(record.clone()));

        record.notes = Some("Photo booth on 5th".into());
        assert!(repo.save(&record).await.is_ok());
        assert_eq!(repo.find(&record.id).await.unwrap(), Some(record.clone()));

        assert_eq!(repo.delete(&record.id).await.unwrap(), Some(record.clone()));
        assert!(repo.find(&record.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn lists_newest_event_first() {
        let repo = InMemoryRecordRepo::new();
        let old = record("Old", (2023, 1, 1));
        let new = record("New", (2024, 1, 1));
        let middle = record("Middle", (2023, 6, 1));
        for r in [&old, &new, &middle] {
            repo.insert(r).await.unwrap();
        }

        let titles = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.title)
            .collect::<Vec<_>>();
        assert_eq!(titles, vec!["New", "Middle", "Old"]);
    }
}
