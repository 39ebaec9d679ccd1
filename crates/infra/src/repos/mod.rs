mod audit_trail;
mod category;
mod record;
mod reminder;
mod shared;

pub use audit_trail::IAuditTrailRepo;
use audit_trail::{InMemoryAuditTrailRepo, PostgresAuditTrailRepo};
pub use category::ICategoryRepo;
use category::{InMemoryCategoryRepo, PostgresCategoryRepo};
pub use record::IRecordRepo;
use record::{InMemoryRecordRepo, PostgresRecordRepo};
pub use reminder::IReminderRepo;
use reminder::{InMemoryReminderRepo, PostgresReminderRepo};
pub use shared::repo::DeleteResult;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct Repos {
    pub record_repo: Arc<dyn IRecordRepo>,
    pub reminder_repo: Arc<dyn IReminderRepo>,
    pub category_repo: Arc<dyn ICategoryRepo>,
    pub audit_trail_repo: Arc<dyn IAuditTrailRepo>,
}

impl Repos {
    pub async fn create_postgres(connection_string: &str) -> anyhow::Result<Self> {
        info!("DB CHECKING CONNECTION ...");
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(connection_string)
            .await?;
        info!("DB CHECKING CONNECTION ... [done]");

        info!("DB EXECUTING MIGRATION ...");
        sqlx::migrate!().run(&pool).await?;
        info!("DB EXECUTING MIGRATION ... [done]");

        Ok(Self {
            record_repo: Arc::new(PostgresRecordRepo::new(pool.clone())),
            reminder_repo: Arc::new(PostgresReminderRepo::new(pool.clone())),
            category_repo: Arc::new(PostgresCategoryRepo::new(pool.clone())),
            audit_trail_repo: Arc::new(PostgresAuditTrailRepo::new(pool)),
        })
    }

    pub fn create_inmemory() -> Self {
        Self {
            record_repo: Arc::new(InMemoryRecordRepo::new()),
            reminder_repo: Arc::new(InMemoryReminderRepo::new()),
            category_repo: Arc::new(InMemoryCategoryRepo::new()),
            audit_trail_repo: Arc::new(InMemoryAuditTrailRepo::new()),
        }
    }
}
