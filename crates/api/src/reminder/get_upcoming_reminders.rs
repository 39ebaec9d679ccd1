use crate::{
    error::KeeperError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use record_keeper_api_structs::{
    dtos::UpcomingReminderDTO,
    get_upcoming_reminders::{APIResponse, QueryParams},
};
use record_keeper_domain::{Record, Reminder, ID};
use record_keeper_infra::KeeperContext;
use std::collections::HashMap;

const DEFAULT_LIMIT: usize = 10;

pub async fn get_upcoming_reminders_controller(
    query_params: web::Query<QueryParams>,
    ctx: web::Data<KeeperContext>,
) -> Result<HttpResponse, KeeperError> {
    let usecase = GetUpcomingRemindersUseCase {
        limit: query_params.limit.unwrap_or(DEFAULT_LIMIT),
    };

    execute(usecase, &ctx)
        .await
        .map(|upcoming| {
            let reminders = upcoming
                .into_iter()
                .map(|u| UpcomingReminderDTO::new(u.reminder, u.record, u.due_at))
                .collect();
            HttpResponse::Ok().json(APIResponse::new(reminders))
        })
        .map_err(|e| match e {
            UseCaseErrors::StorageError => KeeperError::InternalError,
        })
}

/// Active reminders from today on, soonest first
#[derive(Debug)]
pub struct GetUpcomingRemindersUseCase {
    pub limit: usize,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    StorageError,
}

#[derive(Debug)]
pub struct UpcomingReminder {
    pub reminder: Reminder,
    pub record: Record,
    pub due_at: Option<DateTime<Utc>>,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetUpcomingRemindersUseCase {
    type Response = Vec<UpcomingReminder>;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "GetUpcomingReminders";

    async fn execute(&mut self, ctx: &KeeperContext) -> Result<Self::Response, Self::Errors> {
        let tz = ctx.config.timezone;
        let today = ctx.sys.now().with_timezone(&tz).date_naive();

        let reminders = ctx
            .repos
            .reminder_repo
            .find_active_from(today)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;
        let records = ctx
            .repos
            .record_repo
            .find_all()
            .await
            .map_err(|_| UseCaseErrors::StorageError)?
            .into_iter()
            .map(|record| (record.id.clone(), record))
            .collect::<HashMap<ID, Record>>();

        Ok(reminders
            .into_iter()
            .filter_map(|reminder| {
                let record = records.get(&reminder.record_id)?.clone();
                let due_at = reminder.due_at(&tz);
                Some(UpcomingReminder {
                    reminder,
                    record,
                    due_at,
                })
            })
            .take(self.limit)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_utils::{insert_record, insert_reminder, setup_context};
    use chrono::NaiveDate;

    #[actix_web::test]
    async fn lists_reminders_from_today_with_their_record() {
        let (ctx, _) = setup_context();
        let record = insert_record(&ctx, "Dentist").await;
        let upcoming = insert_reminder(&ctx, &record, "Dentist at 9").await;
        let mut past = insert_reminder(&ctx, &record, "Last week").await;
        past.reminder_date = NaiveDate::from_ymd_opt(2024, 5, 8).unwrap();
        ctx.repos.reminder_repo.save(&past).await.unwrap();
        let mut later = insert_reminder(&ctx, &record, "Next month").await;
        later.reminder_date = NaiveDate::from_ymd_opt(2024, 6, 8).unwrap();
        ctx.repos.reminder_repo.save(&later).await.unwrap();

        let res = execute(GetUpcomingRemindersUseCase { limit: 10 }, &ctx)
            .await
            .unwrap();
        let titles = res.iter().map(|u| u.reminder.title.as_str()).collect::<Vec<_>>();
        assert_eq!(titles, vec!["Dentist at 9", "Next month"]);
        assert_eq!(res[0].record.title, "Dentist");
        assert_eq!(res[0].reminder.id, upcoming.id);

        let res = execute(GetUpcomingRemindersUseCase { limit: 1 }, &ctx)
            .await
            .unwrap();
        assert_eq!(res.len(), 1);
    }
}
