use crate::{reminder::Reminder, shared::entity::ID};
use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FollowUpStatus {
    Pending,
    Overdue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FollowUpPriority {
    Low,
    Medium,
    High,
}

/// An active reminder seen as an item on the follow-up board
#[derive(Debug, Clone, PartialEq)]
pub struct FollowUp {
    pub reminder_id: ID,
    pub record_id: ID,
    pub title: String,
    pub description: String,
    pub due_at: DateTime<Utc>,
    pub status: FollowUpStatus,
    pub priority: FollowUpPriority,
}

impl FollowUp {
    /// `None` when the reminder has no due instant in `tz`
    pub fn from_reminder(
        reminder: &Reminder,
        record_title: &str,
        now: DateTime<Utc>,
        tz: &Tz,
    ) -> Option<Self> {
        let due_at = reminder.due_at(tz)?;
        let status = if due_at < now {
            FollowUpStatus::Overdue
        } else {
            FollowUpStatus::Pending
        };
        let lead = reminder.time_limit.duration();
        let priority = if lead <= Duration::minutes(15) {
            FollowUpPriority::High
        } else if lead <= Duration::hours(1) {
            FollowUpPriority::Medium
        } else {
            FollowUpPriority::Low
        };
        let description = match &reminder.description {
            Some(description) if !description.trim().is_empty() => description.clone(),
            _ => format!("Reminder for: {}", record_title),
        };

        Some(Self {
            reminder_id: reminder.id.clone(),
            record_id: reminder.record_id.clone(),
            title: reminder.title.clone(),
            description,
            due_at,
            status,
            priority,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FollowUpPeriod {
    Today,
    Tomorrow,
    ThisWeek,
    ThisMonth,
    Overdue,
    All,
}

impl Default for FollowUpPeriod {
    fn default() -> Self {
        Self::All
    }
}

impl FromStr for FollowUpPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "today" => Ok(Self::Today),
            "tomorrow" => Ok(Self::Tomorrow),
            "this-week" => Ok(Self::ThisWeek),
            "this-month" => Ok(Self::ThisMonth),
            "overdue" => Ok(Self::Overdue),
            "all" => Ok(Self::All),
            _ => Err(format!("Unknown follow-up period: {}", s)),
        }
    }
}

/// First day of the sunday based week `date` is in
fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_sunday()))
}

impl FollowUpPeriod {
    pub fn includes(&self, follow_up: &FollowUp, now: DateTime<Utc>, tz: &Tz) -> bool {
        let today = now.with_timezone(tz).date_naive();
        let tomorrow = today + Duration::days(1);
        let due = follow_up.due_at.with_timezone(tz).date_naive();
        let same_week = week_start(due) == week_start(today);
        let same_month = due.year() == today.year() && due.month() == today.month();

        match self {
            Self::Today => due == today,
            Self::Tomorrow => due == tomorrow,
            Self::ThisWeek => same_week && due != today && due != tomorrow,
            Self::ThisMonth => same_month && !same_week,
            Self::Overdue => follow_up.status == FollowUpStatus::Overdue,
            Self::All => true,
        }
    }
}
