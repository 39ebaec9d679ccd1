use chrono::{DateTime, Utc};
use record_keeper_domain::ID;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NotificationDTO {
    pub id: ID,
    pub title: String,
    pub body: String,
    pub tag: String,
    pub url: Option<String>,
    pub require_interaction: bool,
    pub created_at: DateTime<Utc>,
    pub auto_close_at: DateTime<Utc>,
}
