use crate::{
    error::KeeperError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use record_keeper_api_structs::get_audit_trail::{APIResponse, QueryParams};
use record_keeper_domain::{AuditAction, AuditEntry};
use record_keeper_infra::KeeperContext;

pub const DEFAULT_LIMIT: usize = 100;

pub async fn get_audit_trail_controller(
    query_params: web::Query<QueryParams>,
    ctx: web::Data<KeeperContext>,
) -> Result<HttpResponse, KeeperError> {
    let query_params = query_params.into_inner();
    let usecase = GetAuditTrailUseCase {
        action: query_params.action,
        search: query_params.search,
        limit: query_params.limit.unwrap_or(DEFAULT_LIMIT),
    };

    execute(usecase, &ctx)
        .await
        .map(|entries| HttpResponse::Ok().json(APIResponse::new(entries)))
        .map_err(|e| match e {
            UseCaseErrors::StorageError => KeeperError::InternalError,
        })
}

/// The filters apply to the `limit` most recent entries
#[derive(Debug)]
pub struct GetAuditTrailUseCase {
    pub action: Option<AuditAction>,
    pub search: Option<String>,
    pub limit: usize,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetAuditTrailUseCase {
    type Response = Vec<AuditEntry>;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "GetAuditTrail";

    async fn execute(&mut self, ctx: &KeeperContext) -> Result<Self::Response, Self::Errors> {
        let entries = ctx
            .repos
            .audit_trail_repo
            .find_recent(None, self.limit)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;

        Ok(entries
            .into_iter()
            .filter(|entry| self.action.map(|a| a == entry.action).unwrap_or(true))
            .filter(|entry| {
                self.search
                    .as_deref()
                    .map(|term| entry.matches_search(term))
                    .unwrap_or(true)
            })
            .collect())
    }
}
