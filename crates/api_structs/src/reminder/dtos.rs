use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use record_keeper_domain::{FollowUp, FollowUpPriority, FollowUpStatus, Record, Reminder, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ReminderDTO {
    pub id: ID,
    pub record_id: ID,
    pub title: String,
    pub description: Option<String>,
    pub reminder_date: NaiveDate,
    pub reminder_time: NaiveTime,
    /// The lead time as it was written
    pub time_limit: String,
    /// The lead time in effect, one hour when `time_limit` was not understood
    pub lead_time_minutes: i64,
    pub actions: Vec<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ReminderDTO {
    pub fn new(reminder: Reminder) -> Self {
        Self {
            lead_time_minutes: reminder.time_limit.duration().num_minutes(),
            time_limit: reminder.time_limit.to_string(),
            id: reminder.id,
            record_id: reminder.record_id,
            title: reminder.title,
            description: reminder.description,
            reminder_date: reminder.reminder_date,
            reminder_time: reminder.reminder_time,
            actions: reminder.actions,
            is_active: reminder.is_active,
            created_at: reminder.created_at,
            updated_at: reminder.updated_at,
        }
    }
}

/// A reminder together with the record it belongs to
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingReminderDTO {
    #[serde(flatten)]
    pub reminder: ReminderDTO,
    pub record_title: String,
    pub record_category: Option<String>,
    pub due_at: Option<DateTime<Utc>>,
}

impl UpcomingReminderDTO {
    pub fn new(reminder: Reminder, record: Record, due_at: Option<DateTime<Utc>>) -> Self {
        Self {
            reminder: ReminderDTO::new(reminder),
            record_title: record.title,
            record_category: record.category,
            due_at,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FollowUpDTO {
    pub reminder_id: ID,
    pub record_id: ID,
    pub title: String,
    pub description: String,
    pub due_at: DateTime<Utc>,
    pub status: FollowUpStatus,
    pub priority: FollowUpPriority,
}

impl FollowUpDTO {
    pub fn new(follow_up: FollowUp) -> Self {
        Self {
            reminder_id: follow_up.reminder_id,
            record_id: follow_up.record_id,
            title: follow_up.title,
            description: follow_up.description,
            due_at: follow_up.due_at,
            status: follow_up.status,
            priority: follow_up.priority,
        }
    }
}
