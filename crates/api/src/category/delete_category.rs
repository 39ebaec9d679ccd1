use crate::{
    audit::subscribers::{deleted, AuditedUseCase, WriteAuditTrail, CATEGORIES_TABLE},
    error::KeeperError,
    shared::usecase::{execute, Subscriber, UseCase},
};
use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use record_keeper_api_structs::delete_category::{APIResponse, PathParams};
use record_keeper_domain::{AuditEntry, Category, ID};
use record_keeper_infra::KeeperContext;

fn handle_errors(e: UseCaseErrors) -> KeeperError {
    match e {
        UseCaseErrors::NotFound(category_id) => KeeperError::NotFound(format!(
            "The category with id: {}, was not found.",
            category_id
        )),
        UseCaseErrors::StorageError => KeeperError::InternalError,
    }
}

pub async fn delete_category_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<KeeperContext>,
) -> Result<HttpResponse, KeeperError> {
    let usecase = DeleteCategoryUseCase {
        category_id: path_params.category_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|category| HttpResponse::Ok().json(APIResponse::new(category)))
        .map_err(handle_errors)
}

/// Records keep the category name they were saved with
#[derive(Debug)]
pub struct DeleteCategoryUseCase {
    pub category_id: ID,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    NotFound(ID),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteCategoryUseCase {
    type Response = Category;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "DeleteCategory";

    async fn execute(&mut self, ctx: &KeeperContext) -> Result<Self::Response, Self::Errors> {
        match ctx.repos.category_repo.delete(&self.category_id).await {
            Ok(Some(category)) => Ok(category),
            Ok(None) => Err(UseCaseErrors::NotFound(self.category_id.clone())),
            Err(_) => Err(UseCaseErrors::StorageError),
        }
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(WriteAuditTrail)]
    }
}

impl AuditedUseCase for DeleteCategoryUseCase {
    fn audit_entries(category: &Category, timestamp: DateTime<Utc>) -> Vec<AuditEntry> {
        vec![deleted(CATEGORIES_TABLE, category, timestamp)]
    }
}
