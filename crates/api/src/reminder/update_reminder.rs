use super::{clean_actions, resolve_lead_time};
use crate::{
    audit::subscribers::{updated, AuditedUseCase, WriteAuditTrail, REMINDERS_TABLE},
    error::KeeperError,
    shared::{
        non_empty,
        usecase::{execute, Subscriber, UseCase},
        Updated,
    },
};
use actix_web::{web, HttpResponse};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use record_keeper_api_structs::update_reminder::{APIResponse, PathParams, RequestBody};
use record_keeper_domain::{AuditEntry, Reminder, ID};
use record_keeper_infra::KeeperContext;

fn handle_errors(e: UseCaseErrors) -> KeeperError {
    match e {
        UseCaseErrors::NotFound(reminder_id) => KeeperError::NotFound(format!(
            "The reminder with id: {}, was not found.",
            reminder_id
        )),
        UseCaseErrors::EmptyTitle => {
            KeeperError::BadClientData("A reminder needs a non empty title.".into())
        }
        UseCaseErrors::StorageError => KeeperError::InternalError,
    }
}

pub async fn update_reminder_controller(
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<KeeperContext>,
) -> Result<HttpResponse, KeeperError> {
    let body = body.0;
    let usecase = UpdateReminderUseCase {
        reminder_id: path_params.reminder_id.clone(),
        title: body.title,
        description: body.description,
        reminder_date: body.reminder_date,
        reminder_time: body.reminder_time,
        time_limit: body.time_limit,
        actions: body.actions,
        is_active: body.is_active,
    };

    execute(usecase, &ctx)
        .await
        .map(|update| HttpResponse::Ok().json(APIResponse::new(update.new)))
        .map_err(handle_errors)
}

#[derive(Debug)]
pub struct UpdateReminderUseCase {
    pub reminder_id: ID,
    pub title: Option<String>,
    pub description: Option<String>,
    pub reminder_date: Option<NaiveDate>,
    pub reminder_time: Option<NaiveTime>,
    pub time_limit: Option<String>,
    pub actions: Option<Vec<String>>,
    pub is_active: Option<bool>,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    NotFound(ID),
    EmptyTitle,
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateReminderUseCase {
    type Response = Updated<Reminder>;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "UpdateReminder";

    async fn execute(&mut self, ctx: &KeeperContext) -> Result<Self::Response, Self::Errors> {
        let old = match ctx.repos.reminder_repo.find(&self.reminder_id).await {
            Ok(Some(reminder)) => reminder,
            Ok(None) => return Err(UseCaseErrors::NotFound(self.reminder_id.clone())),
            Err(_) => return Err(UseCaseErrors::StorageError),
        };

        let mut reminder = old.clone();
        if let Some(title) = &self.title {
            let title = title.trim();
            if title.is_empty() {
                return Err(UseCaseErrors::EmptyTitle);
            }
            reminder.title = title.to_string();
        }
        if self.description.is_some() {
            reminder.description = non_empty(self.description.take());
        }
        if let Some(reminder_date) = self.reminder_date {
            reminder.reminder_date = reminder_date;
        }
        if let Some(reminder_time) = self.reminder_time {
            reminder.reminder_time = reminder_time;
        }
        if let Some(time_limit) = non_empty(self.time_limit.take()) {
            reminder.time_limit = resolve_lead_time(&time_limit);
        }
        if let Some(actions) = self.actions.take() {
            reminder.actions = clean_actions(actions);
        }
        if let Some(is_active) = self.is_active {
            reminder.is_active = is_active;
        }
        reminder.updated_at = ctx.sys.now();

        ctx.repos
            .reminder_repo
            .save(&reminder)
            .await
            .map(|_| Updated { old, new: reminder })
            .map_err(|_| UseCaseErrors::StorageError)
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(WriteAuditTrail)]
    }
}

impl AuditedUseCase for UpdateReminderUseCase {
    fn audit_entries(update: &Updated<Reminder>, timestamp: DateTime<Utc>) -> Vec<AuditEntry> {
        vec![updated(REMINDERS_TABLE, &update.old, &update.new, timestamp)]
    }
}
