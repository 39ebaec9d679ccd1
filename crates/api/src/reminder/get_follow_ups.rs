use crate::{
    error::KeeperError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use record_keeper_api_structs::get_follow_ups::{APIResponse, QueryParams};
use record_keeper_domain::{FollowUp, FollowUpPeriod, Record, ID};
use record_keeper_infra::KeeperContext;
use std::collections::HashMap;

pub async fn get_follow_ups_controller(
    query_params: web::Query<QueryParams>,
    ctx: web::Data<KeeperContext>,
) -> Result<HttpResponse, KeeperError> {
    let usecase = GetFollowUpsUseCase {
        period: query_params.period.unwrap_or_default(),
    };

    execute(usecase, &ctx)
        .await
        .map(|follow_ups| HttpResponse::Ok().json(APIResponse::new(follow_ups)))
        .map_err(|e| match e {
            UseCaseErrors::StorageError => KeeperError::InternalError,
        })
}

/// Every active reminder, overdue ones included, as follow-up items
#[derive(Debug)]
pub struct GetFollowUpsUseCase {
    pub period: FollowUpPeriod,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetFollowUpsUseCase {
    type Response = Vec<FollowUp>;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "GetFollowUps";

    async fn execute(&mut self, ctx: &KeeperContext) -> Result<Self::Response, Self::Errors> {
        let tz = ctx.config.timezone;
        let now = ctx.sys.now();

        let reminders = ctx
            .repos
            .reminder_repo
            .find_active()
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
            .iter()
            .filter_map(|reminder| {
                let record_title = records
                    .get(&reminder.record_id)
                    .map(|record| record.title.as_str())
                    .unwrap_or(reminder.title.as_str());
                FollowUp::from_reminder(reminder, record_title, now, &tz)
            })
            .filter(|follow_up| self.period.includes(follow_up, now, &tz))
            .collect())
    }
}
