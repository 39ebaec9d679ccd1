mod config;
mod repos;
mod services;
mod system;

pub use config::Config;
pub use repos::{
    DeleteResult, IAuditTrailRepo, ICategoryRepo, IRecordRepo, IReminderRepo, Repos,
};
pub use services::*;
use std::sync::Arc;
pub use system::{ISys, RealSys, StaticTimeSys};
use tracing::info;

#[derive(Clone)]
pub struct KeeperContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub notifications: Arc<NotificationCenter>,
    pub webhooks: WebhookClient,
}

impl KeeperContext {
    fn new(repos: Repos, config: Config, sys: Arc<dyn ISys>) -> Self {
        info!(
            "Notification permission resolved to: {}",
            config.notification_permission
        );
        let notifications = Arc::new(NotificationCenter::new(
            config.notification_permission,
            config.notification_capacity,
        ));
        let webhooks = WebhookClient::new(config.action_timeout);
        Self {
            repos,
            config,
            sys,
            notifications,
            webhooks,
        }
    }

    async fn create(config: Config) -> anyhow::Result<Self> {
        let repos = match &config.database_url {
            Some(database_url) => Repos::create_postgres(database_url).await?,
            None => Repos::create_inmemory(),
        };
        Ok(Self::new(repos, config, Arc::new(RealSys {})))
    }

    /// Context backed by in-memory repositories and the given clock
    pub fn create_inmemory(config: Config, sys: Arc<dyn ISys>) -> Self {
        Self::new(Repos::create_inmemory(), config, sys)
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> anyhow::Result<KeeperContext> {
    KeeperContext::create(Config::new()).await
}
