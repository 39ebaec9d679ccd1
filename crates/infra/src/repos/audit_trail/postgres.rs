use super::IAuditTrailRepo;
use chrono::{DateTime, Utc};
use record_keeper_domain::{AuditAction, AuditEntry, ID};
use serde_json::Value;
use sqlx::{types::Uuid, FromRow, PgPool};
use tracing::warn;

pub struct PostgresAuditTrailRepo {
    pool: PgPool,
}

impl PostgresAuditTrailRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AuditEntryRaw {
    audit_uid: Uuid,
    table_name: String,
    entity_uid: Uuid,
    action: String,
    old_data: Option<Value>,
    new_data: Option<Value>,
    changed_fields: Vec<String>,
    timestamp: DateTime<Utc>,
}

impl AuditEntryRaw {
    fn into_entry(self) -> Option<AuditEntry> {
        let action = match self.action.parse::<AuditAction>() {
            Ok(action) => action,
            Err(e) => {
                warn!("Skipping audit entry {}: {}", self.audit_uid, e);
                return None;
            }
        };
        Some(AuditEntry {
            id: self.audit_uid.into(),
            table_name: self.table_name,
            entity_id: self.entity_uid.into(),
            action,
            old_data: self.old_data,
            new_data: self.new_data,
            changed_fields: self.changed_fields,
            timestamp: self.timestamp,
        })
    }
}

#[async_trait::async_trait]
impl IAuditTrailRepo for PostgresAuditTrailRepo {
    async fn insert(&self, entry: &AuditEntry) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO audit_trail
            (audit_uid, table_name, entity_uid, action, old_data, new_data, changed_fields, "timestamp")
            VALUES($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(entry.id.inner_ref())
        .bind(&entry.table_name)
        .bind(entry.entity_id.inner_ref())
        .bind(entry.action.as_str())
        .bind(&entry.old_data)
        .bind(&entry.new_data)
        .bind(&entry.changed_fields)
        .bind(entry.timestamp)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find_recent(
        &self,
        entity_id: Option<&ID>,
        limit: usize,
    ) -> anyhow::Result<Vec<AuditEntry>> {
        let entries = sqlx::query_as::<_, AuditEntryRaw>(
            r#"
            SELECT * FROM audit_trail AS a
            WHERE $1::uuid IS NULL OR a.entity_uid = $1
            ORDER BY a."timestamp" DESC
            LIMIT $2
            "#,
        )
        .bind(entity_id.map(|id| *id.inner_ref()))
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await?;
        Ok(entries
            .into_iter()
            .filter_map(AuditEntryRaw::into_entry)
            .collect())
    }
}
