use crate::{
    audit::subscribers::{updated, AuditedUseCase, WriteAuditTrail, REMINDERS_TABLE},
    error::KeeperError,
    shared::{
        usecase::{execute, Subscriber, UseCase},
        Updated,
    },
};
use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use record_keeper_api_structs::set_reminder_active::{APIResponse, PathParams, RequestBody};
use record_keeper_domain::{AuditEntry, Reminder, ID};
use record_keeper_infra::KeeperContext;

fn handle_errors(e: UseCaseErrors) -> KeeperError {
    match e {
        UseCaseErrors::NotFound(reminder_id) => KeeperError::NotFound(format!(
            "The reminder with id: {}, was not found.",
            reminder_id
        )),
        UseCaseErrors::StorageError => KeeperError::InternalError,
    }
}

pub async fn set_reminder_active_controller(
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<KeeperContext>,
) -> Result<HttpResponse, KeeperError> {
    let usecase = SetReminderActiveUseCase {
        reminder_id: path_params.reminder_id.clone(),
        is_active: body.is_active,
    };

    execute(usecase, &ctx)
        .await
        .map(|update| HttpResponse::Ok().json(APIResponse::new(update.new)))
        .map_err(handle_errors)
}

/// Marking a reminder complete sets `is_active` to false
#[derive(Debug)]
pub struct SetReminderActiveUseCase {
    pub reminder_id: ID,
    pub is_active: bool,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    NotFound(ID),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for SetReminderActiveUseCase {
    type Response = Updated<Reminder>;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "SetReminderActive";

    async fn execute(&mut self, ctx: &KeeperContext) -> Result<Self::Response, Self::Errors> {
        let old = match ctx.repos.reminder_repo.find(&self.reminder_id).await {
            Ok(Some(reminder)) => reminder,
            Ok(None) => return Err(UseCaseErrors::NotFound(self.reminder_id.clone())),
            Err(_) => return Err(UseCaseErrors::StorageError),
        };

        match ctx
            .repos
            .reminder_repo
            .set_active(&self.reminder_id, self.is_active, ctx.sys.now())
            .await
        {
            Ok(Some(new)) => Ok(Updated { old, new }),
            Ok(None) => Err(UseCaseErrors::NotFound(self.reminder_id.clone())),
            Err(_) => Err(UseCaseErrors::StorageError),
        }
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(WriteAuditTrail)]
    }
}

impl AuditedUseCase for SetReminderActiveUseCase {
    fn audit_entries(update: &Updated<Reminder>, timestamp: DateTime<Utc>) -> Vec<AuditEntry> {
        vec![updated(REMINDERS_TABLE, &update.old, &update.new, timestamp)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_utils::{insert_record, insert_reminder, setup_context};

    #[actix_web::test]
    async fn marks_reminder_complete() {
        let (ctx, _) = setup_context();
        let record = insert_record(&ctx, "Dentist").await;
        let reminder = insert_reminder(&ctx, &record, "Dentist at 9").await;

        let usecase = SetReminderActiveUseCase {
            reminder_id: reminder.id.clone(),
            is_active: false,
        };
        let res = execute(usecase, &ctx).await.unwrap();
        assert!(res.old.is_active);
        assert!(!res.new.is_active);

        let entries = ctx
            .repos
            .audit_trail_repo
            .find_recent(Some(&reminder.id), 10)
            .await
            .unwrap();
        assert_eq!(entries[0].changed_fields, vec!["is_active"]);
    }
}
