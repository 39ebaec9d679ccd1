use super::get_audit_trail::DEFAULT_LIMIT;
use crate::{
    error::KeeperError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use record_keeper_api_structs::get_record_audit_trail::{APIResponse, PathParams, QueryParams};
use record_keeper_domain::{AuditEntry, ID};
use record_keeper_infra::KeeperContext;

pub async fn get_record_audit_trail_controller(
    path_params: web::Path<PathParams>,
    query_params: web::Query<QueryParams>,
    ctx: web::Data<KeeperContext>,
) -> Result<HttpResponse, KeeperError> {
    let usecase = GetRecordAuditTrailUseCase {
        record_id: path_params.record_id.clone(),
        limit: query_params.limit.unwrap_or(DEFAULT_LIMIT),
    };

    execute(usecase, &ctx)
        .await
        .map(|entries| HttpResponse::Ok().json(APIResponse::new(entries)))
        .map_err(|e| match e {
            UseCaseErrors::StorageError => KeeperError::InternalError,
        })
}

/// Changes made to one record. Entries of deleted records are kept.
#[derive(Debug)]
pub struct GetRecordAuditTrailUseCase {
    pub record_id: ID,
    pub limit: usize,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetRecordAuditTrailUseCase {
    type Response = Vec<AuditEntry>;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "GetRecordAuditTrail";

    async fn execute(&mut self, ctx: &KeeperContext) -> Result<Self::Response, Self::Errors> {
        ctx.repos
            .audit_trail_repo
            .find_recent(Some(&self.record_id), self.limit)
            .await
            .map_err(|_| UseCaseErrors::StorageError)
    }
}
