use crate::shared::usecase::{Subscriber, UseCase};
use chrono::{DateTime, Utc};
use record_keeper_domain::{AuditEntry, Entity};
use record_keeper_infra::KeeperContext;
use serde::Serialize;
use serde_json::Value;
use tracing::error;

pub const RECORDS_TABLE: &str = "records";
pub const REMINDERS_TABLE: &str = "reminders";
pub const CATEGORIES_TABLE: &str = "categories";

/// A `UseCase` whose successful response changed stored rows that
/// should be kept in the audit trail
pub trait AuditedUseCase: UseCase {
    fn audit_entries(response: &Self::Response, timestamp: DateTime<Utc>) -> Vec<AuditEntry>;
}

pub fn snapshot<T: Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or_else(|e| {
        error!("Unable to serialize audit snapshot: {:?}", e);
        Value::Null
    })
}

pub fn inserted<T: Serialize + Entity>(table: &str, entity: &T, at: DateTime<Utc>) -> AuditEntry {
    AuditEntry::inserted(table, entity.id().clone(), snapshot(entity), at)
}

pub fn updated<T: Serialize + Entity>(
    table: &str,
    old: &T,
    new: &T,
    at: DateTime<Utc>,
) -> AuditEntry {
    AuditEntry::updated(table, new.id().clone(), snapshot(old), snapshot(new), at)
}

pub fn deleted<T: Serialize + Entity>(table: &str, entity: &T, at: DateTime<Utc>) -> AuditEntry {
    AuditEntry::deleted(table, entity.id().clone(), snapshot(entity), at)
}

/// Writes the audit entries of an `AuditedUseCase`. Failing to write an
/// entry is logged and does not fail the use case.
pub struct WriteAuditTrail;

#[async_trait::async_trait(?Send)]
impl<U: AuditedUseCase + 'static> Subscriber<U> for WriteAuditTrail {
    async fn notify(&self, e: &U::Response, ctx: &KeeperContext) {
        for entry in U::audit_entries(e, ctx.sys.now()) {
            if let Err(err) = ctx.repos.audit_trail_repo.insert(&entry).await {
                error!(
                    "Unable to write audit entry for {} {} on {}: {:?}",
                    entry.action, entry.entity_id, entry.table_name, err
                );
            }
        }
    }
}
