mod audit;
mod base;
mod category;
mod notification;
mod record;
mod reminder;
mod status;

use audit::AuditClient;
pub use audit::GetAuditTrailInput;
pub(crate) use base::BaseClient;
pub use base::{APIError, APIErrorVariant, APIResponse};
use category::CategoryClient;
use notification::NotificationClient;
use record::RecordClient;
pub use record::{CreateRecordInput, SearchRecordsInput, UpdateRecordInput};
use reminder::ReminderClient;
pub use reminder::{CreateReminderInput, UpdateReminderInput};
use status::StatusClient;
use std::sync::Arc;

pub use record_keeper_api_structs::dtos::*;
pub use record_keeper_domain::{AuditAction, BuiltinAction, FollowUpPeriod, ID};

/// Record Keeper SDK
///
/// The SDK contains methods for interacting with the Record Keeper server
/// API.
#[derive(Clone)]
pub struct RecordKeeperSDK {
    pub audit: AuditClient,
    pub category: CategoryClient,
    pub notification: NotificationClient,
    pub record: RecordClient,
    pub reminder: ReminderClient,
    pub status: StatusClient,
}

impl RecordKeeperSDK {
    pub fn new(address: String) -> Self {
        let base = Arc::new(BaseClient::new(address));
        let audit = AuditClient::new(base.clone());
        let category = CategoryClient::new(base.clone());
        let notification = NotificationClient::new(base.clone());
        let record = RecordClient::new(base.clone());
        let reminder = ReminderClient::new(base.clone());
        let status = StatusClient::new(base);

        Self {
            audit,
            category,
            notification,
            record,
            reminder,
            status,
        }
    }
}
