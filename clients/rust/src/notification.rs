use crate::base::{APIResponse, BaseClient};
use record_keeper_api_structs::get_notifications;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct NotificationClient {
    base: Arc<BaseClient>,
}

impl NotificationClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn get(&self, limit: Option<usize>) -> APIResponse<get_notifications::APIResponse> {
        let query = get_notifications::QueryParams { limit };
        self.base
            .get_with_query("notifications".into(), &query, StatusCode::OK)
            .await
    }
}
