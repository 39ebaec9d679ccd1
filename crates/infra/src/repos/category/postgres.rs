use super::ICategoryRepo;
use chrono::{DateTime, Utc};
use record_keeper_domain::{Category, ID};
use sqlx::{types::Uuid, FromRow, PgPool};

pub struct PostgresCategoryRepo {
    pool: PgPool,
}

impl PostgresCategoryRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CategoryRaw {
    category_uid: Uuid,
    name: String,
    created_at: DateTime<Utc>,
}

impl From<CategoryRaw> for Category {
    fn from(c: CategoryRaw) -> Self {
        Self {
            id: c.category_uid.into(),
            name: c.name,
            created_at: c.created_at,
        }
    }
}

#[async_trait::async_trait]
impl ICategoryRepo for PostgresCategoryRepo {
    async fn insert(&self, category: &Category) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO categories(category_uid, name, created_at)
            VALUES($1, $2, $3)
            "#,
        )
        .bind(category.id.inner_ref())
        .bind(&category.name)
        .bind(category.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find(&self, category_id: &ID) -> anyhow::Result<Option<Category>> {
        let category = sqlx::query_as::<_, CategoryRaw>(
            r#"
            SELECT * FROM categories AS c
            WHERE c.category_uid = $1
            "#,
        )
        .bind(category_id.inner_ref())
        .fetch_optional(&self.pool)
        .await?;
        Ok(category.map(|c| c.into()))
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Category>> {
        let categories = sqlx::query_as::<_, CategoryRaw>(
            r#"
            SELECT * FROM categories AS c
            ORDER BY c.name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(categories.into_iter().map(|c| c.into()).collect())
    }

    async fn find_by_name(&self, name: &str) -> anyhow::Result<Option<Category>> {
        let category = sqlx::query_as::<_, CategoryRaw>(
            r#"
            SELECT * FROM categories AS c
            WHERE lower(c.name) = lower($1)
            "#,
        )
        .bind(name.trim())
        .fetch_optional(&self.pool)
        .await?;
        Ok(category.map(|c| c.into()))
    }

    async fn delete(&self, category_id: &ID) -> anyhow::Result<Option<Category>> {
        let category = sqlx::query_as::<_, CategoryRaw>(
            r#"
            DELETE FROM categories AS c
            WHERE c.category_uid = $1
            RETURNING *
            "#,
        )
        .bind(category_id.inner_ref())
        .fetch_optional(&self.pool)
        .await?;
        Ok(category.map(|c| c.into()))
    }
}
