use super::IReminderRepo;
use crate::repos::shared::{inmemory_repo::*, repo::DeleteResult};
use chrono::{DateTime, NaiveDate, Utc};
use record_keeper_domain::{Reminder, ID};

pub struct InMemoryReminderRepo {
    reminders: std::sync::Mutex<Vec<Reminder>>,
}

impl InMemoryReminderRepo {
    pub fn new() -> Self {
        Self {
            reminders: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IReminderRepo for InMemoryReminderRepo {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()> {
        insert(reminder, &self.reminders);
        Ok(())
    }

    async fn save(&self, reminder: &Reminder) -> anyhow::Result<()> {
        save(reminder, &self.reminders);
        Ok(())
    }

    async fn find(&self, reminder_id: &ID) -> anyhow::Result<Option<Reminder>> {
        Ok(find(reminder_id, &self.reminders))
    }

    async fn find_by_record(&self, record_id: &ID) -> anyhow::Result<Vec<Reminder>> {
        let mut reminders = find_by(&self.reminders, |r| r.record_id == *record_id);
        reminders.sort_by_key(|r| (r.reminder_date, r.reminder_time));
        Ok(reminders)
    }

    async fn find_active(&self) -> anyhow::Result<Vec<Reminder>> {
        let mut reminders = find_by(&self.reminders, |r| r.is_active);
        reminders.sort_by_key(|r| (r.reminder_date, r.reminder_time));
        Ok(reminders)
    }

    async fn find_active_from(&self, date: NaiveDate) -> anyhow::Result<Vec<Reminder>> {
        let mut reminders = find_by(&self.reminders, |r| r.is_active && r.reminder_date >= date);
        reminders.sort_by_key(|r| (r.reminder_date, r.reminder_time));
        Ok(reminders)
    }

    async fn set_active(
        &self,
        reminder_id: &ID,
        is_active: bool,
        updated_at: DateTime<Utc>,
    ) -> anyhow::Result<Option<Reminder>> {
        Ok(update(reminder_id, &self.reminders, |r| {
            r.is_active = is_active;
            r.updated_at = updated_at;
        }))
    }

    async fn delete(&self, reminder_id: &ID) -> anyhow::Result<Option<Reminder>> {
        Ok(delete(reminder_id, &self.reminders))
    }

    async fn delete_by_record(&self, record_id: &ID) -> anyhow::Result<DeleteResult> {
        Ok(delete_by(&self.reminders, |r| r.record_id == *record_id))
    }
}
