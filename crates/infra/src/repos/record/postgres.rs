use super::IRecordRepo;
use chrono::{DateTime, NaiveDate, Utc};
use record_keeper_domain::{Record, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use tracing::error;

pub struct PostgresRecordRepo {
    pool: PgPool,
}

impl PostgresRecordRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct RecordRaw {
    record_uid: Uuid,
    title: String,
    category: Option<String>,
    description: Option<String>,
    notes: Option<String>,
    event_date: NaiveDate,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<RecordRaw> for Record {
    fn from(r: RecordRaw) -> Self {
        Self {
            id: r.record_uid.into(),
            title: r.title,
            category: r.category,
            description: r.description,
            notes: r.notes,
            event_date: r.event_date,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

#[async_trait::async_trait]
impl IRecordRepo for PostgresRecordRepo {
    async fn insert(&self, record: &Record) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO records
            (record_uid, title, category, description, notes, event_date, created_at, updated_at)
            VALUES($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(record.id.inner_ref())
        .bind(&record.title)
        .bind(&record.category)
        .bind(&record.description)
        .bind(&record.notes)
        .bind(record.event_date)
        .bind(record.created_at)
        .bind(record.updated_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn save(&self, record: &Record) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE records
            SET title = $2,
            category = $3,
            description = $4,
            notes = $5,
            event_date = $6,
            updated_at = $7
            WHERE record_uid = $1
            "#,
        )
        .bind(record.id.inner_ref())
        .bind(&record.title)
        .bind(&record.category)
        .bind(&record.description)
        .bind(&record.notes)
        .bind(record.event_date)
        .bind(record.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!("Unable to update record: {:?}", e);
            e
        })?;
        Ok(())
    }

    async fn find(&self, record_id: &ID) -> anyhow::Result<Option<Record>> {
        let record = sqlx::query_as::<_, RecordRaw>(
            r#"
            SELECT * FROM records AS r
            WHERE r.record_uid = $1
            "#,
        )
        .bind(record_id.inner_ref())
        .fetch_optional(&self.pool)
        .await?;
        Ok(record.map(|r| r.into()))
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Record>> {
        let records = sqlx::query_as::<_, RecordRaw>(
            r#"
            SELECT * FROM records AS r
            ORDER BY r.event_date DESC, r.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(records.into_iter().map(|r| r.into()).collect())
    }

    async fn delete(&self, record_id: &ID) -> anyhow::Result<Option<Record>> {
        let record = sqlx::query_as::<_, RecordRaw>(
            r#"
            DELETE FROM records AS r
            WHERE r.record_uid = $1
            RETURNING *
            "#,
        )
        .bind(record_id.inner_ref())
        .fetch_optional(&self.pool)
        .await?;
        Ok(record.map(|r| r.into()))
    }
}
