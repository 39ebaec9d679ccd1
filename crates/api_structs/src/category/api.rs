use crate::dtos::CategoryDTO;
use record_keeper_domain::{Category, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub category: CategoryDTO,
}

impl CategoryResponse {
    pub fn new(category: Category) -> Self {
        Self {
            category: CategoryDTO::new(category),
        }
    }
}

pub mod create_category {
    use super::*;

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub name: String,
    }

    pub type APIResponse = CategoryResponse;
}

pub mod get_categories {
    use super::*;

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub categories: Vec<CategoryDTO>,
    }

    impl APIResponse {
        pub fn new(categories: Vec<Category>) -> Self {
            Self {
                categories: categories.into_iter().map(CategoryDTO::new).collect(),
            }
        }
    }
}

pub mod delete_category {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub category_id: ID,
    }

    pub type APIResponse = CategoryResponse;
}
