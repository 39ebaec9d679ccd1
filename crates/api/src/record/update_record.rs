use crate::{
    audit::subscribers::{updated, AuditedUseCase, WriteAuditTrail, RECORDS_TABLE},
    error::KeeperError,
    shared::{
        non_empty,
        usecase::{execute, Subscriber, UseCase},
        Updated,
    },
};
use actix_web::{web, HttpResponse};
use chrono::{DateTime, NaiveDate, Utc};
use record_keeper_api_structs::update_record::{APIResponse, PathParams, RequestBody};
use record_keeper_domain::{AuditEntry, Record, ID};
use record_keeper_infra::KeeperContext;

fn handle_errors(e: UseCaseErrors) -> KeeperError {
    match e {
        UseCaseErrors::NotFound(record_id) => KeeperError::NotFound(format!(
            "The record with id: {}, was not found.",
            record_id
        )),
        UseCaseErrors::EmptyTitle => {
            KeeperError::BadClientData("A record needs a non empty title.".into())
        }
        UseCaseErrors::StorageError => KeeperError::InternalError,
    }
}

pub async fn update_record_controller(
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<KeeperContext>,
) -> Result<HttpResponse, KeeperError> {
    let body = body.0;
    let usecase = UpdateRecordUseCase {
        record_id: path_params.record_id.clone(),
        title: body.title,
        category: body.category,
        description: body.description,
        notes: body.notes,
        event_date: body.event_date,
    };

    execute(usecase, &ctx)
        .await
        .map(|update| HttpResponse::Ok().json(APIResponse::new(update.new)))
        .map_err(handle_errors)
}

/// Fields that are `None` are left as they are. Blank text clears
/// the optional fields.
#[derive(Debug)]
pub struct UpdateRecordUseCase {
    pub record_id: ID,
    pub title: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub event_date: Option<NaiveDate>,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    NotFound(ID),
    EmptyTitle,
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateRecordUseCase {
    type Response = Updated<Record>;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "UpdateRecord";

    async fn execute(&mut self, ctx: &KeeperContext) -> Result<Self::Response, Self::Errors> {
        let old = match ctx.repos.record_repo.find(&self.record_id).await {
            Ok(Some(record)) => record,
            Ok(None) => return Err(UseCaseErrors::NotFound(self.record_id.clone())),
            Err(_) => return Err(UseCaseErrors::StorageError),
        };

        let mut record = old.clone();
        if let Some(title) = &self.title {
            let title = title.trim();
            if title.is_empty() {
                return Err(UseCaseErrors::EmptyTitle);
            }
            record.title = title.to_string();
        }
        if self.category.is_some() {
            record.category = non_empty(self.category.take());
        }
        if self.description.is_some() {
            record.description = non_empty(self.description.take());
        }
        if self.notes.is_some() {
            record.notes = non_empty(self.notes.take());
        }
        if let Some(event_date) = self.event_date {
            record.event_date = event_date;
        }
        record.updated_at = ctx.sys.now();

        ctx.repos
            .record_repo
            .save(&record)
            .await
            .map(|_| Updated { old, new: record })
            .map_err(|_| UseCaseErrors::StorageError)
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(WriteAuditTrail)]
    }
}

impl AuditedUseCase for UpdateRecordUseCase {
    fn audit_entries(update: &Updated<Record>, timestamp: DateTime<Utc>) -> Vec<AuditEntry> {
        vec![updated(RECORDS_TABLE, &update.old, &update.new, timestamp)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_utils::{insert_record, setup_context};
    use chrono::Duration;

    fn usecase(record_id: &ID) -> UpdateRecordUseCase {
        UpdateRecordUseCase {
            record_id: record_id.clone(),
            title: None,
            category: None,
            description: None,
            notes: None,
            event_date: None,
        }
    }

    #[actix_web::test]
    async fn updates_given_fields_and_audits_the_diff() {
        let (ctx, sys) = setup_context();
        let record = insert_record(&ctx, "Dentist").await;
        sys.set(record.created_at + Duration::hours(1));

        let mut update = usecase(&record.id);
        update.category = Some("Health".into());
        update.notes = Some("Bring card".into());
        let res = execute(update, &ctx).await.unwrap();

        assert_eq!(res.new.title, "Dentist");
        assert_eq!(res.new.category.as_deref(), Some("Health"));
        assert_eq!(res.new.updated_at, record.created_at + Duration::hours(1));

        let entries = ctx
            .repos
            .audit_trail_repo
            .find_recent(Some(&record.id), 10)
            .await
            .unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].changed_fields, vec!["category", "notes"]);
    }

    #[actix_web::test]
    async fn rejects_unknown_record_and_blank_title() {
        let (ctx, _) = setup_context();
        let res = execute(usecase(&ID::default()), &ctx).await;
        assert!(matches!(res, Err(UseCaseErrors::NotFound(_))));

        let record = insert_record(&ctx, "Dentist").await;
        let mut update = usecase(&record.id);
        update.title = Some(" ".into());
        let res = execute(update, &ctx).await;
        assert!(matches!(res, Err(UseCaseErrors::EmptyTitle)));
    }
}
