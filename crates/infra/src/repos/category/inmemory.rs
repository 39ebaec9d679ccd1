use super::ICategoryRepo;
use crate::repos::shared::inmemory_repo::*;
use record_keeper_domain::{Category, ID};

pub struct InMemoryCategoryRepo {
    categories: std::sync::Mutex<Vec<Category>>,
}

impl InMemoryCategoryRepo {
    pub fn new() -> Self {
        Self {
            categories: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl ICategoryRepo for InMemoryCategoryRepo {
    async fn insert(&self, category: &Category) -> anyhow::Result<()> {
        insert(category, &self.categories);
        Ok(())
    }

    async fn find(&self, category_id: &ID) -> anyhow::Result<Option<Category>> {
        Ok(find(category_id, &self.categories))
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Category>> {
        let mut categories = find_by(&self.categories, |_| true);
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }

    async fn find_by_name(&self, name: &str) -> anyhow::Result<Option<Category>> {
        Ok(find_by(&self.categories, |c| c.has_name(name)).into_iter().next())
    }

    async fn delete(&self, category_id: &ID) -> anyhow::Result<Option<Category>> {
        Ok(delete(category_id, &self.categories))
    }
}
