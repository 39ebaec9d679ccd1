use crate::base::{APIResponse, BaseClient};
use chrono::NaiveDate;
use record_keeper_api_structs::*;
use record_keeper_domain::ID;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct RecordClient {
    base: Arc<BaseClient>,
}

pub struct CreateRecordInput {
    pub title: String,
    pub category: Option<String>,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub event_date: NaiveDate,
}

pub struct UpdateRecordInput {
    pub record_id: ID,
    pub title: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub event_date: Option<NaiveDate>,
}

#[derive(Default)]
pub struct SearchRecordsInput {
    pub query: Option<String>,
    pub category: Option<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

impl RecordClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(&self, input: CreateRecordInput) -> APIResponse<create_record::APIResponse> {
        let body = create_record::RequestBody {
            title: input.title,
            category: input.category,
            description: input.description,
            notes: input.notes,
            event_date: input.event_date,
        };
        self.base
            .post(body, "records".into(), StatusCode::CREATED)
            .await
    }

    pub async fn get(&self, record_id: ID) -> APIResponse<get_record::APIResponse> {
        self.base
            .get(format!("records/{}", record_id), StatusCode::OK)
            .await
    }

    pub async fn update(&self, input: UpdateRecordInput) -> APIResponse<update_record::APIResponse> {
        let body = update_record::RequestBody {
            title: input.title,
            category: input.category,
            description: input.description,
            notes: input.notes,
            event_date: input.event_date,
        };
        self.base
            .put(body, format!("records/{}", input.record_id), StatusCode::OK)
            .await
    }

    pub async fn delete(&self, record_id: ID) -> APIResponse<delete_record::APIResponse> {
        self.base
            .delete(format!("records/{}", record_id), StatusCode::OK)
            .await
    }

    pub async fn search(
        &self,
        input: SearchRecordsInput,
    ) -> APIResponse<search_records::APIResponse> {
        let query = search_records::QueryParams {
            query: input.query,
            category: input.category,
            date_from: input.date_from,
            date_to: input.date_to,
        };
        self.base
            .get_with_query("records".into(), &query, StatusCode::OK)
            .await
    }

    pub async fn stats(&self) -> APIResponse<get_record_stats::APIResponse> {
        self.base.get("records/stats".into(), StatusCode::OK).await
    }

    pub async fn audit_trail(
        &self,
        record_id: ID,
        limit: Option<usize>,
    ) -> APIResponse<get_record_audit_trail::APIResponse> {
        let query = get_record_audit_trail::QueryParams { limit };
        self.base
            .get_with_query(
                format!("records/{}/audit", record_id),
                &query,
                StatusCode::OK,
            )
            .await
    }
}
