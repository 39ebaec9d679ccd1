use chrono::{DateTime, NaiveDate, Utc};
use record_keeper_domain::{Record, RecordStats, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RecordDTO {
    pub id: ID,
    pub title: String,
    pub category: Option<String>,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub event_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RecordDTO {
    pub fn new(record: Record) -> Self {
        Self {
            id: record.id,
            title: record.title,
            category: record.category,
            description: record.description,
            notes: record.notes,
            event_date: record.event_date,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RecordStatsDTO {
    pub total_records: usize,
    pub this_month: usize,
    pub this_week: usize,
    pub categories: usize,
}

impl RecordStatsDTO {
    pub fn new(stats: RecordStats) -> Self {
        Self {
            total_records: stats.total,
            this_month: stats.this_month,
            this_week: stats.last_seven_days,
            categories: stats.categories,
        }
    }
}
