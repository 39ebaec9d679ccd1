use crate::{
    audit::subscribers::{inserted, AuditedUseCase, WriteAuditTrail, RECORDS_TABLE},
    error::KeeperError,
    shared::{
        non_empty,
        usecase::{execute, Subscriber, UseCase},
    },
};
use actix_web::{web, HttpResponse};
use chrono::{DateTime, NaiveDate, Utc};
use record_keeper_api_structs::create_record::{APIResponse, RequestBody};
use record_keeper_domain::{AuditEntry, Record};
use record_keeper_infra::KeeperContext;

fn handle_errors(e: UseCaseErrors) -> KeeperError {
    match e {
        UseCaseErrors::EmptyTitle => {
            KeeperError::BadClientData("A record needs a non empty title.".into())
        }
        UseCaseErrors::StorageError => KeeperError::InternalError,
    }
}

pub async fn create_record_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<KeeperContext>,
) -> Result<HttpResponse, KeeperError> {
    let body = body.0;
    let usecase = CreateRecordUseCase {
        title: body.title,
        category: body.category,
        description: body.description,
        notes: body.notes,
        event_date: body.event_date,
    };

    execute(usecase, &ctx)
        .await
        .map(|record| HttpResponse::Created().json(APIResponse::new(record)))
        .map_err(handle_errors)
}

#[derive(Debug)]
pub struct CreateRecordUseCase {
    pub title: String,
    pub category: Option<String>,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub event_date: NaiveDate,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    EmptyTitle,
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateRecordUseCase {
    type Response = Record;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "CreateRecord";

    async fn execute(&mut self, ctx: &KeeperContext) -> Result<Self::Response, Self::Errors> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(UseCaseErrors::EmptyTitle);
        }

        let mut record = Record::new(title.to_string(), self.event_date, ctx.sys.now());
        record.category = non_empty(self.category.take());
        record.description = non_empty(self.description.take());
        record.notes = non_empty(self.notes.take());

        ctx.repos
            .record_repo
            .insert(&record)
            .await
            .map(|_| record)
            .map_err(|_| UseCaseErrors::StorageError)
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(WriteAuditTrail)]
    }
}

impl AuditedUseCase for CreateRecordUseCase {
    fn audit_entries(record: &Record, timestamp: DateTime<Utc>) -> Vec<AuditEntry> {
        vec![inserted(RECORDS_TABLE, record, timestamp)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_utils::setup_context;
    use record_keeper_domain::AuditAction;

    fn usecase(title: &str) -> CreateRecordUseCase {
        CreateRecordUseCase {
            title: title.into(),
            category: Some("  ".into()),
            description: Some("<p>Yearly check</p>".into()),
            notes: None,
            event_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        }
    }

    #[actix_web::test]
    async fn creates_record_and_audits_it() {
        let (ctx, _) = setup_context();

        let record = execute(usecase(" Dentist "), &ctx).await.unwrap();
        assert_eq!(record.title, "Dentist");
        assert_eq!(record.category, None);

        let stored = ctx.repos.record_repo.find(&record.id).await.unwrap();
        assert_eq!(stored, Some(record.clone()));

        let entries = ctx
            .repos
            .audit_trail_repo
            .find_recent(Some(&record.id), 10)
            .await
            .unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].action, AuditAction::Insert);
        assert_eq!(entries[0].table_name, "records");
        assert_eq!(entries[0].new_data.as_ref().unwrap()["title"], "Dentist");
    }

    #[actix_web::test]
    async fn rejects_empty_title() {
        let (ctx, _) = setup_context();
        let res = execute(usecase("   "), &ctx).await;
        assert!(matches!(res, Err(UseCaseErrors::EmptyTitle)));
        assert!(ctx.repos.record_repo.find_all().await.unwrap().is_empty());
    }
}
