use crate::{
    error::KeeperError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use record_keeper_api_structs::get_record::{APIResponse, PathParams};
use record_keeper_domain::{Record, ID};
use record_keeper_infra::KeeperContext;

fn handle_errors(e: UseCaseErrors) -> KeeperError {
    match e {
        UseCaseErrors::NotFound(record_id) => KeeperError::NotFound(format!(
            "The record with id: {}, was not found.",
            record_id
        )),
        UseCaseErrors::StorageError => KeeperError::InternalError,
    }
}

pub async fn get_record_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<KeeperContext>,
) -> Result<HttpResponse, KeeperError> {
    let usecase = GetRecordUseCase {
        record_id: path_params.record_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|record| HttpResponse::Ok().json(APIResponse::new(record)))
        .map_err(handle_errors)
}

#[derive(Debug)]
pub struct GetRecordUseCase {
    pub record_id: ID,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    NotFound(ID),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetRecordUseCase {
    type Response = Record;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "GetRecord";

    async fn execute(&mut self, ctx: &KeeperContext) -> Result<Self::Response, Self::Errors> {
        match ctx.repos.record_repo.find(&self.record_id).await {
            Ok(Some(record)) => Ok(record),
            Ok(None) => Err(UseCaseErrors::NotFound(self.record_id.clone())),
            Err(_) => Err(UseCaseErrors::StorageError),
        }
    }
}
