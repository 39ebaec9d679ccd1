mod inmemory;
mod postgres;

use crate::repos::shared::repo::DeleteResult;
use chrono::{DateTime, NaiveDate, Utc};
pub use inmemory::InMemoryReminderRepo;
pub use postgres::PostgresReminderRepo;
use record_keeper_domain::{Reminder, ID};

#[async_trait::async_trait]
pub trait IReminderRepo: Send + Sync {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()>;
    async fn save(&self, reminder: &Reminder) -> anyhow::Result<()>;
    async fn find(&self, reminder_id: &ID) -> anyhow::Result<Option<Reminder>>;
    async fn find_by_record(&self, record_id: &ID) -> anyhow::Result<Vec<Reminder>>;
    /// All active reminders ordered by date and then time
    async fn find_active(&self) -> anyhow::Result<Vec<Reminder>>;
    /// Active reminders with a `reminder_date` on or after `date`, ordered by
    /// date and then time
    async fn find_active_from(&self, date: NaiveDate) -> anyhow::Result<Vec<Reminder>>;
    /// Returns the updated reminder, or `None` if it does not exist
    async fn set_active(
        &self,
        reminder_id: &ID,
        is_active: bool,
        updated_at: DateTime<Utc>,
    ) -> anyhow::Result<Option<Reminder>>;
    async fn delete(&self, reminder_id: &ID) -> anyhow::Result<Option<Reminder>>;
    async fn delete_by_record(&self, record_id: &ID) -> anyhow::Result<DeleteResult>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveTime, TimeZone};
    use record_keeper_domain::LeadTime;

    fn reminder(record_id: &ID, date: (i32, u32, u32), hour: u32) -> Reminder {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap();
        Reminder {
            id: Default::default(),
            record_id: record_id.clone(),
            title: format!("Reminder {}-{}-{} {}", date.0, date.1, date.2, hour),
            description: None,
            reminder_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            reminder_time: NaiveTime::from_hms_opt(hour, 0, 0).unwrap(),
            time_limit: LeadTime::parse("15min"),
            actions: vec!["Show browser notification".into()],
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn create_find_and_delete() {
        let repo = InMemoryReminderRepo::new();
        let record_id = ID::default();
        let reminder = reminder(&record_id, (2024, 5, 2), 10);

        assert!(repo.insert(&reminder).await.is_ok());

        let res = repo.find(&reminder.id).await.unwrap();
        assert_eq!(res, Some(reminder.clone()));
        let res = repo.find_by_record(&record_id).await.unwrap();
        assert_eq!(res, vec![reminder.clone()]);

        let res = repo.delete(&reminder.id).await.unwrap();
        assert_eq!(res, Some(reminder.clone()));
        assert!(repo.find(&reminder.id).await.unwrap().is_none());
        assert!(repo.delete(&reminder.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn finds_active_reminders_from_date_in_due_order() {
        let repo = InMemoryReminderRepo::new();
        let record_id = ID::default();
        let yesterday = reminder(&record_id, (2024, 5, 1), 9);
        let later_today = reminder(&record_id, (2024, 5, 2), 18);
        let earlier_today = reminder(&record_id, (2024, 5, 2), 7);
        let next_week = reminder(&record_id, (2024, 5, 9), 6);
        let mut inactive = reminder(&record_id, (2024, 5, 3), 12);
        inactive.is_active = false;

        for r in [&yesterday, &later_today, &inactive, &next_week, &earlier_today] {
            repo.insert(r).await.unwrap();
        }

        let found = repo
            .find_active_from(NaiveDate::from_ymd_opt(2024, 5, 2).unwrap())
            .await
            .unwrap();
        let ids = found.into_iter().map(|r| r.id).collect::<Vec<_>>();
        assert_eq!(
            ids,
            vec![earlier_today.id.clone(), later_today.id.clone(), next_week.id.clone()]
        );

        let all = repo.find_active().await.unwrap();
        assert_eq!(all.len(), 4);
        assert_eq!(all[0].id, yesterday.id);
    }

    #[tokio::test]
    async fn toggles_active_flag() {
        let repo = InMemoryReminderRepo::new();
        let reminder = reminder(&ID::default(), (2024, 5, 2), 10);
        repo.insert(&reminder).await.unwrap();

        let at = Utc.with_ymd_and_hms(2024, 5, 2, 9, 0, 0).unwrap();
        let updated = repo.set_active(&reminder.id, false, at).await.unwrap().unwrap();
        assert!(!updated.is_active);
        assert_eq!(updated.updated_at, at);
        assert!(repo
            .find_active_from(reminder.reminder_date)
            .await
            .unwrap()
            .is_empty());

        assert!(repo.set_active(&ID::default(), false, at).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_and_delete_by_record() {
        let repo = InMemoryReminderRepo::new();
        let record_id = ID::default();
        let mut first = reminder(&record_id, (2024, 5, 2), 10);
        let second = reminder(&record_id, (2024, 5, 3), 10);
        let other = reminder(&ID::default(), (2024, 5, 3), 10);
        for r in [&first, &second, &other] {
            repo.insert(r).await.unwrap();
        }

        first.time_limit = LeadTime::parse("2days");
        repo.save(&first).await.unwrap();
        assert_eq!(repo.find(&first.id).await.unwrap(), Some(first.clone()));

        let res = repo.delete_by_record(&record_id).await.unwrap();
        assert_eq!(res.deleted_count, 2);
        assert!(repo.find_by_record(&record_id).await.unwrap().is_empty());
        assert!(repo.find(&other.id).await.unwrap().is_some());
    }
}
