use crate::dtos::AuditEntryDTO;
use record_keeper_domain::{AuditAction, AuditEntry};
use serde::{Deserialize, Serialize};

pub mod get_audit_trail {
    use super::*;

    #[derive(Deserialize, Serialize, Default)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        pub action: Option<AuditAction>,
        pub search: Option<String>,
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
