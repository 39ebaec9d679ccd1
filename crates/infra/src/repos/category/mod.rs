mod inmemory;
mod postgres;

pub use inmemory::InMemoryCategoryRepo;
pub use postgres::PostgresCategoryRepo;
use record_keeper_domain::{Category, ID};

#[async_trait::async_trait]
pub trait ICategoryRepo: Send + Sync {
    async fn insert(&self, category: &Category) -> anyhow::Result<()>;
    async fn find(&self, category_id: &ID) -> anyhow::Result<Option<Category>>;
    /// All categories ordered by name
    async fn find_all(&self) -> anyhow::Result<Vec<Category>>;
    /// Case insensitive lookup
    async fn find_by_name(&self, name: &str) -> anyhow::Result<Option<Category>>;
    async fn delete(&self, category_id: &ID) -> anyhow::Result<Option<Category>>;
}
