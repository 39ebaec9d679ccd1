use super::actions::{ActionDispatcher, DispatchReport};
use crate::shared::usecase::UseCase;
use record_keeper_infra::KeeperContext;
use std::sync::Arc;
use tracing::{error, info, warn};

/// One scheduler tick: fetches the active reminders from today on and
/// dispatches the actions of those that are inside their firing window.
///
/// There is no record of reminders already dispatched, so a reminder
/// is dispatched again on every tick that finds it inside its window.
#[derive(Debug)]
pub struct SendRemindersUseCase {
    pub dispatcher: Arc<ActionDispatcher>,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    StorageError,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Reminders returned by the store
    pub fetched: usize,
    /// Reminders that were inside their firing window
    pub due: usize,
    pub dispatch: DispatchReport,
}

#[async_trait::async_trait(?Send)]
impl UseCase for SendRemindersUseCase {
    type Response = TickReport;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "SendReminders";

    async fn execute(&mut self, ctx: &KeeperContext) -> Result<Self::Response, Self::Errors> {
        let tz = ctx.config.timezone;
        let now = ctx.sys.now();
        let today = now.with_timezone(&tz).date_naive();

        let reminders = ctx
            .repos
            .reminder_repo
            .find_active_from(today)
            .await
            .map_err(|e| {
                error!("Unable to fetch active reminders from {}: {:?}", today, e);
                UseCaseErrors::StorageError
            })?;

        let mut report = TickReport {
            fetched: reminders.len(),
            ..Default::default()
        };
        for reminder in &reminders {
            if reminder.time_limit.is_fallback() {
                warn!(
                    "Reminder {} has an unrecognized time limit: {:?}, using the default lead time",
                    reminder.id,
                    reminder.time_limit.as_str()
                );
            }
            if !reminder.is_due(now, &tz) {
                continue;
            }

            info!("Triggering reminder: {} ({})", reminder.title, reminder.id);
            report.due += 1;
            let dispatched = self.dispatcher.dispatch(reminder, ctx).await;
            report.dispatch.merge(&dispatched);
        }

        Ok(report)
    }
}
