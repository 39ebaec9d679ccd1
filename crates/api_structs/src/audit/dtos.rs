use chrono::{DateTime, Utc};
use record_keeper_domain::{AuditAction, AuditEntry, ID};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntryDTO {
    pub id: ID,
    pub table_name: String,
    pub record_id: ID,
    pub action: AuditAction,
    pub old_data: Option<Value>,
    pub new_data: Option<Value>,
    pub changed_fields: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

impl AuditEntryDTO {
    pub fn new(entry: AuditEntry) -> Self {
        Self {
            id: entry.id,
            table_name: entry.table_name,
            record_id: entry.entity_id,
            action: entry.action,
            old_data: entry.old_data,
            new_data: entry.new_data,
            changed_fields: entry.changed_fields,
            timestamp: entry.timestamp,
        }
    }
}
