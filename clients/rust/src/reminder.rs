use crate::base::{APIResponse, BaseClient};
use chrono::{NaiveDate, NaiveTime};
use record_keeper_api_structs::*;
use record_keeper_domain::{FollowUpPeriod, ID};
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct ReminderClient {
    base: Arc<BaseClient>,
}

pub struct CreateReminderInput {
    pub record_id: ID,
    pub title: String,
    pub description: Option<String>,
    pub reminder_date: NaiveDate,
    pub reminder_time: NaiveTime,
    pub time_limit: Option<String>,
    pub actions: Vec<String>,
}

pub struct UpdateReminderInput {
    pub reminder_id: ID,
    pub title: Option<String>,
    pub description: Option<String>,
    pub reminder_date: Option<NaiveDate>,
    pub reminder_time: Option<NaiveTime>,
    pub time_limit: Option<String>,
    pub actions: Option<Vec<String>>,
    pub is_active: Option<bool>,
}

impl ReminderClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(
        &self,
        input: CreateReminderInput,
    ) -> APIResponse<create_reminder::APIResponse> {
        let body = create_reminder::RequestBody {
            title: input.title,
            description: input.description,
            reminder_date: input.reminder_date,
            reminder_time: input.reminder_time,
            time_limit: input.time_limit,
            actions: input.actions,
        };
        self.base
            .post(
                body,
                format!("records/{}/reminders", input.record_id),
                StatusCode::CREATED,
            )
            .await
    }

    pub async fn get_by_record(
        &self,
        record_id: ID,
    ) -> APIResponse<get_record_reminders::APIResponse> {
        self.base
            .get(format!("records/{}/reminders", record_id), StatusCode::OK)
            .await
    }

    pub async fn update(
        &self,
        input: UpdateReminderInput,
    ) -> APIResponse<update_reminder::APIResponse> {
        let body = update_reminder::RequestBody {
            title: input.title,
            description: input.description,
            reminder_date: input.reminder_date,
            reminder_time: input.reminder_time,
            time_limit: input.time_limit,
            actions: input.actions,
            is_active: input.is_active,
        };
        self.base
            .put(body, format!("reminders/{}", input.reminder_id), StatusCode::OK)
            .await
    }

    pub async fn set_active(
        &self,
        reminder_id: ID,
        is_active: bool,
    ) -> APIResponse<set_reminder_active::APIResponse> {
        let body = set_reminder_active::RequestBody { is_active };
        self.base
            .put(
                body,
                format!("reminders/{}/active", reminder_id),
                StatusCode::OK,
            )
            .await
    }

    pub async fn delete(&self, reminder_id: ID) -> APIResponse<delete_reminder::APIResponse> {
        self.base
            .delete(format!("reminders/{}", reminder_id), StatusCode::OK)
            .await
    }

    pub async fn upcoming(
        &self,
        limit: Option<usize>,
    ) -> APIResponse<get_upcoming_reminders::APIResponse> {
        let query = get_upcoming_reminders::QueryParams { limit };
        self.base
            .get_with_query("reminders/upcoming".into(), &query, StatusCode::OK)
            .await
    }

    pub async fn follow_ups(
        &self,
        period: Option<FollowUpPeriod>,
    ) -> APIResponse<get_follow_ups::APIResponse> {
        let query = get_follow_ups::QueryParams { period };
        self.base
            .get_with_query("reminders/follow-ups".into(), &query, StatusCode::OK)
            .await
    }
}
