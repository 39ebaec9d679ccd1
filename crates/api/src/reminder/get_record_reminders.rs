use crate::{
    error::KeeperError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use record_keeper_api_structs::get_record_reminders::{APIResponse, PathParams};
use record_keeper_domain::{Reminder, ID};
use record_keeper_infra::KeeperContext;

fn handle_errors(e: UseCaseErrors) -> KeeperError {
    match e {
        UseCaseErrors::RecordNotFound(record_id) => KeeperError::NotFound(format!(
            "The record with id: {}, was not found.",
            record_id
        )),
        UseCaseErrors::StorageError => KeeperError::InternalError,
    }
}

pub async fn get_record_reminders_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<KeeperContext>,
) -> Result<HttpResponse, KeeperError> {
    let usecase = GetRecordRemindersUseCase {
        record_id: path_params.record_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|reminders| HttpResponse::Ok().json(APIResponse::new(reminders)))
        .map_err(handle_errors)
}

#[derive(Debug)]
pub struct GetRecordRemindersUseCase {
    pub record_id: ID,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    RecordNotFound(ID),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetRecordRemindersUseCase {
    type Response = Vec<Reminder>;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "GetRecordReminders";

    async fn execute(&mut self, ctx: &KeeperContext) -> Result<Self::Response, Self::Errors> {
        match ctx.repos.record_repo.find(&self.record_id).await {
            Ok(Some(_)) => {}
            Ok(None) => return Err(UseCaseErrors::RecordNotFound(self.record_id.clone())),
            Err(_) => return Err(UseCaseErrors::StorageError),
        }

        ctx.repos
            .reminder_repo
            .find_by_record(&self.record_id)
            .await
            .map_err(|_| UseCaseErrors::StorageError)
    }
}
