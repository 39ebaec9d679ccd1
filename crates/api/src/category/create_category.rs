use crate::{
    audit::subscribers::{inserted, AuditedUseCase, WriteAuditTrail, CATEGORIES_TABLE},
    error::KeeperError,
    shared::usecase::{execute, Subscriber, UseCase},
};
use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use record_keeper_api_structs::create_category::{APIResponse, RequestBody};
use record_keeper_domain::{AuditEntry, Category};
use record_keeper_infra::KeeperContext;

fn handle_errors(e: UseCaseErrors) -> KeeperError {
    match e {
        UseCaseErrors::EmptyName => {
            KeeperError::BadClientData("A category needs a non empty name.".into())
        }
        UseCaseErrors::AlreadyExists(name) => KeeperError::Conflict(format!(
            "A category with the name: {}, already exists.",
            name
        )),
        UseCaseErrors::StorageError => KeeperError::InternalError,
    }
}

pub async fn create_category_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<KeeperContext>,
) -> Result<HttpResponse, KeeperError> {
    let usecase = CreateCategoryUseCase {
        name: body.0.name,
    };

    execute(usecase, &ctx)
        .await
        .map(|category| HttpResponse::Created().json(APIResponse::new(category)))
        .map_err(handle_errors)
}

#[derive(Debug)]
pub struct CreateCategoryUseCase {
    pub name: String,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    EmptyName,
    AlreadyExists(String),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateCategoryUseCase {
    type Response = Category;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "CreateCategory";

    async fn execute(&mut self, ctx: &KeeperContext) -> Result<Self::Response, Self::Errors> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(UseCaseErrors::EmptyName);
        }

        match ctx.repos.category_repo.find_by_name(name).await {
            Ok(Some(existing)) => return Err(UseCaseErrors::AlreadyExists(existing.name)),
            Ok(None) => {}
            Err(_) => return Err(UseCaseErrors::StorageError),
        }

        let category = Category::new(name.to_string(), ctx.sys.now());
        ctx.repos
            .category_repo
            .insert(&category)
            .await
            .map(|_| category)
            .map_err(|_| UseCaseErrors::StorageError)
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(WriteAuditTrail)]
    }
}

impl AuditedUseCase for CreateCategoryUseCase {
    fn audit_entries(category: &Category, timestamp: DateTime<Utc>) -> Vec<AuditEntry> {
        vec![inserted(CATEGORIES_TABLE, category, timestamp)]
    }
}
