use crate::{
    error::KeeperError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use record_keeper_api_structs::get_categories::APIResponse;
use record_keeper_domain::Category;
use record_keeper_infra::KeeperContext;

pub async fn get_categories_controller(
    ctx: web::Data<KeeperContext>,
) -> Result<HttpResponse, KeeperError> {
    execute(GetCategoriesUseCase {}, &ctx)
        .await
        .map(|categories| HttpResponse::Ok().json(APIResponse::new(categories)))
        .map_err(|e| match e {
            UseCaseErrors::StorageError => KeeperError::InternalError,
        })
}

#[derive(Debug)]
pub struct GetCategoriesUseCase {}

#[derive(Debug)]
pub enum UseCaseErrors {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetCategoriesUseCase {
    type Response = Vec<Category>;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "GetCategories";

    async fn execute(&mut self, ctx: &KeeperContext) -> Result<Self::Response, Self::Errors> {
        ctx.repos
            .category_repo
            .find_all()
            .await
            .map_err(|_| UseCaseErrors::StorageError)
    }
}
