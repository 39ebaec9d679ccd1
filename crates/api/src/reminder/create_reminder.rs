use super::{clean_actions, resolve_lead_time};
use crate::{
    audit::subscribers::{inserted, AuditedUseCase, WriteAuditTrail, REMINDERS_TABLE},
    error::KeeperError,
    shared::{
        non_empty,
        usecase::{execute, Subscriber, UseCase},
    },
};
use actix_web::{web, HttpResponse};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use record_keeper_api_structs::create_reminder::{APIResponse, PathParams, RequestBody};
use record_keeper_domain::{AuditEntry, Reminder, DEFAULT_LEAD_TIME_MINUTES, ID};
use record_keeper_infra::KeeperContext;

fn handle_errors(e: UseCaseErrors) -> KeeperError {
    match e {
        UseCaseErrors::RecordNotFound(record_id) => KeeperError::NotFound(format!(
            "The record with id: {}, was not found.",
            record_id
        )),
        UseCaseErrors::EmptyTitle => {
            KeeperError::BadClientData("A reminder needs a non empty title.".into())
        }
        UseCaseErrors::StorageError => KeeperError::InternalError,
    }
}

pub async fn create_reminder_controller(
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<KeeperContext>,
) -> Result<HttpResponse, KeeperError> {
    let body = body.0;
    let usecase = CreateReminderUseCase {
        record_id: path_params.record_id.clone(),
        title: body.title,
        description: body.description,
        reminder_date: body.reminder_date,
        reminder_time: body.reminder_time,
        time_limit: body.time_limit,
        actions: body.actions,
    };

    execute(usecase, &ctx)
        .await
        .map(|reminder| HttpResponse::Created().json(APIResponse::new(reminder)))
        .map_err(handle_errors)
}

#[derive(Debug)]
pub struct CreateReminderUseCase {
    pub record_id: ID,
    pub title: String,
    pub description: Option<String>,
    pub reminder_date: NaiveDate,
    pub reminder_time: NaiveTime,
    pub time_limit: Option<String>,
    pub actions: Vec<String>,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    RecordNotFound(ID),
    EmptyTitle,
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateReminderUseCase {
    type Response = Reminder;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "CreateReminder";

    async fn execute(&mut self, ctx: &KeeperContext) -> Result<Self::Response, Self::Errors> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(UseCaseErrors::EmptyTitle);
        }

        match ctx.repos.record_repo.find(&self.record_id).await {
            Ok(Some(_)) => {}
            Ok(None) => return Err(UseCaseErrors::RecordNotFound(self.record_id.clone())),
            Err(_) => return Err(UseCaseErrors::StorageError),
        }

        let time_limit = match non_empty(self.time_limit.take()) {
            Some(raw) => resolve_lead_time(&raw),
            None => Default::default(),
        };
        let now = ctx.sys.now();
        let reminder = Reminder {
            id: Default::default(),
            record_id: self.record_id.clone(),
            title: title.to_string(),
            description: non_empty(self.description.take()),
            reminder_date: self.reminder_date,
            reminder_time: self.reminder_time,
            time_limit,
            actions: clean_actions(std::mem::take(&mut self.actions)),
            is_active: true,
            created_at: now,
            updated_at: now,
        };

        ctx.repos
            .reminder_repo
            .insert(&reminder)
            .await
            .map(|_| reminder)
            .map_err(|_| UseCaseErrors::StorageError)
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(WriteAuditTrail)]
    }
}

impl AuditedUseCase for CreateReminderUseCase {
    fn audit_entries(reminder: &Reminder, timestamp: DateTime<Utc>) -> Vec<AuditEntry> {
        vec![inserted(REMINDERS_TABLE, reminder, timestamp)]
    }
}
