use super::IReminderRepo;
use crate::repos::shared::repo::DeleteResult;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use record_keeper_domain::{LeadTime, Reminder, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use tracing::error;

pub struct PostgresReminderRepo {
    pool: PgPool,
}

impl PostgresReminderRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ReminderRaw {
    reminder_uid: Uuid,
    record_uid: Uuid,
    title: String,
    description: Option<String>,
    reminder_date: NaiveDate,
    reminder_time: NaiveTime,
    time_limit: String,
    actions: Vec<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ReminderRaw> for Reminder {
    fn from(r: ReminderRaw) -> Self {
        Self {
            id: r.reminder_uid.into(),
            record_id: r.record_uid.into(),
            title: r.title,
            description: r.description,
            reminder_date: r.reminder_date,
            reminder_time: r.reminder_time,
            time_limit: LeadTime::parse(&r.time_limit),
            actions: r.actions,
            is_active: r.is_active,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

#[async_trait::async_trait]
impl IReminderRepo for PostgresReminderRepo {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO reminders
            (reminder_uid, record_uid, title, description, reminder_date, reminder_time,
                time_limit, actions, is_active, created_at, updated_at)
            VALUES($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(reminder.id.inner_ref())
        .bind(reminder.record_id.inner_ref())
        .bind(&reminder.title)
        .bind(&reminder.description)
        .bind(reminder.reminder_date)
        .bind(reminder.reminder_time)
        .bind(reminder.time_limit.as_str())
        .bind(&reminder.actions)
        .bind(reminder.is_active)
        .bind(reminder.created_at)
        .bind(reminder.updated_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn save(&self, reminder: &Reminder) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE reminders
            SET title = $2,
            description = $3,
            reminder_date = $4,
            reminder_time = $5,
            time_limit = $6,
            actions = $7,
            is_active = $8,
            updated_at = $9
            WHERE reminder_uid = $1
            "#,
        )
        .bind(reminder.id.inner_ref())
        .bind(&reminder.title)
        .bind(&reminder.description)
        .bind(reminder.reminder_date)
        .bind(reminder.reminder_time)
        .bind(reminder.time_limit.as_str())
        .bind(&reminder.actions)
        .bind(reminder.is_active)
        .bind(reminder.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!("Unable to update reminder: {:?}", e);
            e
        })?;
        Ok(())
    }

    async fn find(&self, reminder_id: &ID) -> anyhow::Result<Option<Reminder>> {
        let reminder = sqlx::query_as::<_, ReminderRaw>(
            r#"
            SELECT * FROM reminders AS r
            WHERE r.reminder_uid = $1
            "#,
        )
        .bind(reminder_id.inner_ref())
        .fetch_optional(&self.pool)
        .await?;
        Ok(reminder.map(|r| r.into()))
    }

    async fn find_by_record(&self, record_id: &ID) -> anyhow::Result<Vec<Reminder>> {
        let reminders = sqlx::query_as::<_, ReminderRaw>(
            r#"
            SELECT * FROM reminders AS r
            WHERE r.record_uid = $1
            ORDER BY r.reminder_date, r.reminder_time
            "#,
        )
        .bind(record_id.inner_ref())
        .fetch_all(&self.pool)
        .await?;
        Ok(reminders.into_iter().map(|r| r.into()).collect())
    }

    async fn find_active(&self) -> anyhow::Result<Vec<Reminder>> {
        let reminders = sqlx::query_as::<_, ReminderRaw>(
            r#"
            SELECT * FROM reminders AS r
            WHERE r.is_active
            ORDER BY r.reminder_date, r.reminder_time
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("Unable to fetch active reminders: {:?}", e);
            e
        })?;
        Ok(reminders.into_iter().map(|r| r.into()).collect())
    }

    async fn find_active_from(&self, date: NaiveDate) -> anyhow::Result<Vec<Reminder>> {
        let reminders = sqlx::query_as::<_, ReminderRaw>(
            r#"
            SELECT * FROM reminders AS r
            WHERE r.is_active AND r.reminder_date >= $1
            ORDER BY r.reminder_date, r.reminder_time
            "#,
        )
        .bind(date)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("Unable to fetch active reminders: {:?}", e);
            e
        })?;
        Ok(reminders.into_iter().map(|r| r.into()).collect())
    }

    async fn set_active(
        &self,
        reminder_id: &ID,
        is_active: bool,
        updated_at: DateTime<Utc>,
    ) -> anyhow::Result<Option<Reminder>> {
        let reminder = sqlx::query_as::<_, ReminderRaw>(
            r#"
            UPDATE reminders
            SET is_active = $2,
            updated_at = $3
            WHERE reminder_uid = $1
            RETURNING *
            "#,
        )
        .bind(reminder_id.inner_ref())
        .bind(is_active)
        .bind(updated_at)
        .fetch_optional(&self.pool)
        .await?;
        Ok(reminder.map(|r| r.into()))
    }

    async fn delete(&self, reminder_id: &ID) -> anyhow::Result<Option<Reminder>> {
        let reminder = sqlx::query_as::<_, ReminderRaw>(
            r#"
            DELETE FROM reminders AS r
            WHERE r.reminder_uid = $1
            RETURNING *
            "#,
        )
        .bind(reminder_id.inner_ref())
        .fetch_optional(&self.pool)
        .await?;
        Ok(reminder.map(|r| r.into()))
    }

    async fn delete_by_record(&self, record_id: &ID) -> anyhow::Result<DeleteResult> {
        let res = sqlx::query(
            r#"
            DELETE FROM reminders AS r
            WHERE r.record_uid = $1
            "#,
        )
        .bind(record_id.inner_ref())
        .execute(&self.pool)
        .await?;
        Ok(DeleteResult {
            deleted_count: res.rows_affected() as i64,
        })
    }
}
