use chrono::{DateTime, Utc};
use record_keeper_domain::{Category, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDTO {
    pub id: ID,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl CategoryDTO {
    pub fn new(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            created_at: category.created_at,
        }
    }
}
