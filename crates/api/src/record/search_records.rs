use crate::{
    error::KeeperError,
    shared::{
        non_empty,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpResponse};
use record_keeper_api_structs::search_records::{APIResponse, QueryParams};
use record_keeper_domain::{search_records, unique_categories, Record, RecordSearchQuery};
use record_keeper_infra::KeeperContext;

fn handle_errors(e: UseCaseErrors) -> KeeperError {
    match e {
        UseCaseErrors::StorageError => KeeperError::InternalError,
    }
}

pub async fn search_records_controller(
    query_params: web::Query<QueryParams>,
    ctx: web::Data<KeeperContext>,
) -> Result<HttpResponse, KeeperError> {
    let query_params = query_params.into_inner();
    let usecase = SearchRecordsUseCase {
        query: RecordSearchQuery {
            text: non_empty(query_params.query),
            category: non_empty(query_params.category),
            date_from: query_params.date_from,
            date_to: query_params.date_to,
        },
    };

    execute(usecase, &ctx)
        .await
        .map(|res| HttpResponse::Ok().json(APIResponse::new(res.records, res.categories)))
        .map_err(handle_errors)
}

#[derive(Debug)]
pub struct SearchRecordsUseCase {
    pub query: RecordSearchQuery,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    StorageError,
}

#[derive(Debug)]
pub struct UseCaseResponse {
    pub records: Vec<Record>,
    /// Categories of all records, not just the matching ones
    pub categories: Vec<String>,
}

#[async_trait::async_trait(?Send)]
impl UseCase for SearchRecordsUseCase {
    type Response = UseCaseResponse;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "SearchRecords";

    async fn execute(&mut self, ctx: &KeeperContext) -> Result<Self::Response, Self::Errors> {
        let all = ctx
            .repos
            .record_repo
            .find_all()
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;

        let categories = unique_categories(&all);
        let records = search_records(all, &self.query);

        Ok(UseCaseResponse {
            records,
            categories,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_utils::{insert_record, setup_context};

    #[actix_web::test]
    async fn filters_records_and_lists_all_categories() {
        let (ctx, _) = setup_context();
        let mut dentist = insert_record(&ctx, "Dentist").await;
        dentist.category = Some("Health".into());
        ctx.repos.record_repo.save(&dentist).await.unwrap();
        let mut tax = insert_record(&ctx, "Tax return").await;
        tax.category = Some("Finance".into());
        ctx.repos.record_repo.save(&tax).await.unwrap();

        let usecase = SearchRecordsUseCase {
            query: RecordSearchQuery {
                text: Some("dent".into()),
                ..Default::default()
            },
        };
        let res = execute(usecase, &ctx).await.unwrap();
        assert_eq!(res.records.len(), 1);
        assert_eq!(res.records[0].id, dentist.id);
        assert_eq!(res.categories, vec!["Finance", "Health"]);

        let usecase = SearchRecordsUseCase {
            query: Default::default(),
        };
        let res = execute(usecase, &ctx).await.unwrap();
        assert_eq!(res.records.len(), 2);
    }
}
