use crate::{
    audit::subscribers::{deleted, AuditedUseCase, WriteAuditTrail, RECORDS_TABLE, REMINDERS_TABLE},
    error::KeeperError,
    shared::usecase::{execute, Subscriber, UseCase},
};
use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use record_keeper_api_structs::delete_record::{APIResponse, PathParams};
use record_keeper_domain::{AuditEntry, Record, Reminder, ID};
use record_keeper_infra::KeeperContext;
use tracing::info;

fn handle_errors(e: UseCaseErrors) -> KeeperError {
    match e {
        UseCaseErrors::NotFound(record_id) => KeeperError::NotFound(format!(
            "The record with id: {}, was not found.",
            record_id
        )),
        UseCaseErrors::StorageError => KeeperError::InternalError,
    }
}

pub async fn delete_record_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<KeeperContext>,
) -> Result<HttpResponse, KeeperError> {
    let usecase = DeleteRecordUseCase {
        record_id: path_params.record_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|res| HttpResponse::Ok().json(APIResponse::new(res.record)))
        .map_err(handle_errors)
}

#[derive(Debug)]
pub struct DeleteRecordUseCase {
    pub record_id: ID,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    NotFound(ID),
    StorageError,
}

/// The deleted record together with the reminders that went with it
#[derive(Debug)]
pub struct DeletedRecord {
    pub record: Record,
    pub reminders: Vec<Reminder>,
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteRecordUseCase {
    type Response = DeletedRecord;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "DeleteRecord";

    async fn execute(&mut self, ctx: &KeeperContext) -> Result<Self::Response, Self::Errors> {
        let reminders = ctx
            .repos
            .reminder_repo
            .find_by_record(&self.record_id)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;

        let record = match ctx.repos.record_repo.delete(&self.record_id).await {
            Ok(Some(record)) => record,
            Ok(None) => return Err(UseCaseErrors::NotFound(self.record_id.clone())),
            Err(_) => return Err(UseCaseErrors::StorageError),
        };

        // The postgres store cascades on its own, the in-memory one does not
        match ctx.repos.reminder_repo.delete_by_record(&self.record_id).await {
            Ok(res) if res.deleted_count > 0 => {
                info!(
                    "Deleted {} reminders of record {}",
                    res.deleted_count, self.record_id
                );
            }
            Ok(_) => {}
            Err(_) => return Err(UseCaseErrors::StorageError),
        }

        Ok(DeletedRecord { record, reminders })
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(WriteAuditTrail)]
    }
}

impl AuditedUseCase for DeleteRecordUseCase {
    fn audit_entries(res: &DeletedRecord, timestamp: DateTime<Utc>) -> Vec<AuditEntry> {
        let mut entries = vec![deleted(RECORDS_TABLE, &res.record, timestamp)];
        entries.extend(
            res.reminders
                .iter()
                .map(|reminder| deleted(REMINDERS_TABLE, reminder, timestamp)),
        );
        entries
    }
}
