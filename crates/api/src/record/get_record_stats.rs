use crate::{
    error::KeeperError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use record_keeper_api_structs::get_record_stats::APIResponse;
use record_keeper_domain::RecordStats;
use record_keeper_infra::KeeperContext;

fn handle_errors(e: UseCaseErrors) -> KeeperError {
    match e {
        UseCaseErrors::StorageError => KeeperError::InternalError,
    }
}

pub async fn get_record_stats_controller(
    ctx: web::Data<KeeperContext>,
) -> Result<HttpResponse, KeeperError> {
    execute(GetRecordStatsUseCase {}, &ctx)
        .await
        .map(|stats| HttpResponse::Ok().json(APIResponse::new(stats)))
        .map_err(handle_errors)
}

#[derive(Debug)]
pub struct GetRecordStatsUseCase {}

#[derive(Debug)]
pub enum UseCaseErrors {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetRecordStatsUseCase {
    type Response = RecordStats;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "GetRecordStats";

    async fn execute(&mut self, ctx: &KeeperContext) -> Result<Self::Response, Self::Errors> {
        let records = ctx
            .repos
            .record_repo
            .find_all()
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;
        let today = ctx
            .sys
            .now()
            .with_timezone(&ctx.config.timezone)
            .date_naive();

        Ok(RecordStats::compute(&records, today))
    }
}
