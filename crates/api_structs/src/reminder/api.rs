use crate::dtos::{FollowUpDTO, ReminderDTO, UpcomingReminderDTO};
use chrono::{NaiveDate, NaiveTime};
use record_keeper_domain::{FollowUp, FollowUpPeriod, Reminder, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderResponse {
    pub reminder: ReminderDTO,
}

impl ReminderResponse {
    pub fn new(reminder: Reminder) -> Self {
        Self {
            reminder: ReminderDTO::new(reminder),
        }
    }
}

pub mod create_reminder {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub record_id: ID,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub title: String,
        #[serde(default)]
        pub description: Option<String>,
        pub reminder_date: NaiveDate,
        pub reminder_time: NaiveTime,
        /// Defaults to `1hour`
        #[serde(default)]
        pub time_limit: Option<String>,
        #[serde(default)]
        pub actions: Vec<String>,
    }

    pub type APIResponse = ReminderResponse;
}

pub mod get_record_reminders {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub record_id: ID,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub reminders: Vec<ReminderDTO>,
    }

    impl APIResponse {
        pub fn new(reminders: Vec<Reminder>) -> Self {
            Self {
                reminders: reminders.into_iter().map(ReminderDTO::new).collect(),
            }
        }
    }
}

pub mod update_reminder {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub reminder_id: ID,
    }

    /// Fields left out are not changed
    #[derive(Deserialize, Serialize, Default)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        #[serde(default)]
        pub title: Option<String>,
        #[serde(default)]
        pub description: Option<String>,
        #[serde(default)]
        pub reminder_date: Option<NaiveDate>,
        #[serde(default)]
        pub reminder_time: Option<NaiveTime>,
        #[serde(default)]
        pub time_limit: Option<String>,
        #[serde(default)]
        pub actions: Option<Vec<String>>,
        #[serde(default)]
        pub is_active: Option<bool>,
    }

    pub type APIResponse = ReminderResponse;
}

pub mod set_reminder_active {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub reminder_id: ID,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub is_active: bool,
    }

    pub type APIResponse = ReminderResponse;
}

pub mod delete_reminder {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub reminder_id: ID,
    }

    pub type APIResponse = ReminderResponse;
}

pub mod get_upcoming_reminders {
    use super::*;

    #[derive(Deserialize, Serialize, Default)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        pub limit: Option<usize>,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub reminders: Vec<UpcomingReminderDTO>,
    }

    impl APIResponse {
        pub fn new(reminders: Vec<UpcomingReminderDTO>) -> Self {
            Self { reminders }
        }
    }
}

pub mod get_follow_ups {
    use super::*;

    #[derive(Deserialize, Serialize, Default)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        pub period: Option<FollowUpPeriod>,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub follow_ups: Vec<FollowUpDTO>,
    }

    impl APIResponse {
        pub fn new(follow_ups: Vec<FollowUp>) -> Self {
            Self {
                follow_ups: follow_ups.into_iter().map(FollowUpDTO::new).collect(),
            }
        }
    }
}
