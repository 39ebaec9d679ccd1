use crate::dtos::{AuditEntryDTO, RecordDTO, RecordStatsDTO};
use chrono::NaiveDate;
use record_keeper_domain::{AuditEntry, Record, RecordStats, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordResponse {
    pub record: RecordDTO,
}

impl RecordResponse {
    pub fn new(record: Record) -> Self {
        Self {
            record: RecordDTO::new(record),
        }
    }
}

pub mod create_record {
    use super::*;

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub title: String,
        #[serde(default)]
        pub category: Option<String>,
        #[serde(default)]
        pub description: Option<String>,
        #[serde(default)]
        pub notes: Option<String>,
        pub event_date: NaiveDate,
    }

    pub type APIResponse = RecordResponse;
}

pub mod get_record {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub record_id: ID,
    }

    pub type APIResponse = RecordResponse;
}

pub mod update_record {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub record_id: ID,
    }

    /// Fields left out are not changed
    #[derive(Deserialize, Serialize, Default)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        #[serde(default)]
        pub title: Option<String>,
        #[serde(default)]
        pub category: Option<String>,
        #[serde(default)]
        pub description: Option<String>,
        #[serde(default)]
        pub notes: Option<String>,
        #[serde(default)]
        pub event_date: Option<NaiveDate>,
    }

    pub type APIResponse = RecordResponse;
}

pub mod delete_record {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub record_id: ID,
    }

    pub type APIResponse = RecordResponse;
}

pub mod search_records {
    use super::*;

    #[derive(Deserialize, Serialize, Default)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        pub query: Option<String>,
        pub category: Option<String>,
        pub date_from: Option<NaiveDate>,
        pub date_to: Option<NaiveDate>,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub records: Vec<RecordDTO>,
        /// Categories used by any record, for the category filter
        pub categories: Vec<String>,
    }

    impl APIResponse {
        pub fn new(records: Vec<Record>, categories: Vec<String>) -> Self {
            Self {
                records: records.into_iter().map(RecordDTO::new).collect(),
                categories,
            }
        }
    }
}

pub mod get_record_stats {
    use super::*;

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub stats: RecordStatsDTO,
    }

    impl APIResponse {
        pub fn new(stats: RecordStats) -> Self {
            Self {
                stats: RecordStatsDTO::new(stats),
            }
        }
    }
}

pub mod get_record_audit_trail {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub record_id: ID,
    }

    #[derive(Deserialize, Serialize, Default)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        pub limit: Option<usize>,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub entries: Vec<AuditEntryDTO>,
    }

    impl APIResponse {
        pub fn new(entries: Vec<AuditEntry>) -> Self {
            Self {
                entries: entries.into_iter().map(AuditEntryDTO::new).collect(),
            }
        }
    }
}
