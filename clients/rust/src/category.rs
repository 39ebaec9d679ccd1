use crate::base::{APIResponse, BaseClient};
use record_keeper_api_structs::*;
use record_keeper_domain::ID;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct CategoryClient {
    base: Arc<BaseClient>,
}

impl CategoryClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(&self, name: String) -> APIResponse<create_category::APIResponse> {
        let body = create_category::RequestBody { name };
        self.base
            .post(body, "categories".into(), StatusCode::CREATED)
            .await
    }

    pub async fn get_all(&self) -> APIResponse<get_categories::APIResponse> {
        self.base.get("categories".into(), StatusCode::OK).await
    }

    pub async fn delete(&self, category_id: ID) -> APIResponse<delete_category::APIResponse> {
        self.base
            .delete(format!("categories/{}", category_id), StatusCode::OK)
            .await
    }
}
