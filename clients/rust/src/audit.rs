use crate::base::{APIResponse, BaseClient};
use record_keeper_api_structs::get_audit_trail;
use record_keeper_domain::AuditAction;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct AuditClient {
    base: Arc<BaseClient>,
}

#[derive(Default)]
pub struct GetAuditTrailInput {
    pub action: Option<AuditAction>,
    pub search: Option<String>,
    pub limit: Option<usize>,
}

impl AuditClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn get(&self, input: GetAuditTrailInput) -> APIResponse<get_audit_trail::APIResponse> {
        let query = get_audit_trail::QueryParams {
            action: input.action,
            search: input.search,
            limit: input.limit,
        };
        self.base
            .get_with_query("audit".into(), &query, StatusCode::OK)
            .await
    }
}
