mod builtin;

pub use builtin::{BrowserNotificationAction, CalendarAction, LogOnlyAction, WebhookAction, WebhookTarget};
use record_keeper_domain::{BuiltinAction, Reminder};
use record_keeper_infra::KeeperContext;
use std::{collections::HashMap, fmt::Debug, sync::Arc};
use tokio::time::timeout;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Executed,
    /// The action did nothing, with the reason why
    Skipped(String),
}

/// A side effect run when a reminder fires
#[async_trait::async_trait(?Send)]
pub trait ReminderAction: Send + Sync {
    async fn execute(
        &self,
        reminder: &Reminder,
        ctx: &KeeperContext,
    ) -> anyhow::Result<ActionOutcome>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchReport {
    pub executed: usize,
    pub skipped: usize,
    pub unknown: usize,
    pub failed: usize,
}

impl DispatchReport {
    pub fn merge(&mut self, other: &DispatchReport) {
        self.executed += other.executed;
        self.skipped += other.skipped;
        self.unknown += other.unknown;
        self.failed += other.failed;
    }
}

/// Registry of reminder actions by their name
#[derive(Default)]
pub struct ActionDispatcher {
    actions: HashMap<String, Arc<dyn ReminderAction>>,
}

impl Debug for ActionDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names = self.actions.keys().collect::<Vec<_>>();
        names.sort();
        f.debug_struct("ActionDispatcher")
            .field("actions", &names)
            .finish()
    }
}

impl ActionDispatcher {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_builtin_actions() -> Self {
        let mut dispatcher = Self::new();
        for action in BuiltinAction::ALL {
            let handler: Arc<dyn ReminderAction> = match action {
                BuiltinAction::BrowserNotification => Arc::new(BrowserNotificationAction),
                BuiltinAction::AddToCalendar => Arc::new(CalendarAction),
                BuiltinAction::EmailNotification => {
                    Arc::new(WebhookAction::new(WebhookTarget::Email))
                }
                BuiltinAction::SlackNotification => {
                    Arc::new(WebhookAction::new(WebhookTarget::Slack))
                }
                BuiltinAction::WhatsAppMessage => {
                    Arc::new(WebhookAction::new(WebhookTarget::WhatsApp))
                }
                BuiltinAction::FollowUpTask | BuiltinAction::MeetingReminder => {
                    Arc::new(LogOnlyAction::new(action))
                }
            };
            dispatcher.register(action.name(), handler);
        }
        dispatcher
    }

    /// Adds the action, replacing any action already registered with `name`
    pub fn register(&mut self, name: impl Into<String>, action: Arc<dyn ReminderAction>) {
        self.actions.insert(name.into(), action);
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.actions.contains_key(name)
    }

    /// Runs the actions of `reminder` one after the other in the order they
    /// are listed. An action that is unknown, skipped or failing does not
    /// stop the ones after it. An action still running after
    /// `config.action_timeout` is abandoned and counted as failed.
    pub async fn dispatch(&self, reminder: &Reminder, ctx: &KeeperContext) -> DispatchReport {
        let mut report = DispatchReport::default();

        for name in &reminder.actions {
            let action = match self.actions.get(name) {
                Some(action) => action,
                None => {
                    info!("Unknown action: {} on reminder {}", name, reminder.id);
                    report.unknown += 1;
                    continue;
                }
            };

            let run = action.execute(reminder, ctx);
            let outcome = match timeout(ctx.config.action_timeout, run).await {
                Ok(outcome) => outcome,
                Err(_) => {
                    warn!(
                        "Action: {} on reminder {} did not finish within {} seconds",
                        name,
                        reminder.id,
                        ctx.config.action_timeout.as_secs()
                    );
                    report.failed += 1;
                    continue;
                }
            };

            match outcome {
                Ok(ActionOutcome::Executed) => report.executed += 1,
                Ok(ActionOutcome::Skipped(reason)) => {
                    info!(
                        "Skipped action: {} on reminder {}: {}",
                        name, reminder.id, reason
                    );
                    report.skipped += 1;
                }
                Err(e) => {
                    warn!(
                        "Action: {} on reminder {} failed: {:?}",
                        name, reminder.id, e
                    );
                    report.failed += 1;
                }
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_utils::{insert_record, insert_reminder, setup_context, HangingAction};
    use record_keeper_infra::{Config, NotificationPermission, StaticTimeSys};

    struct FailingAction;

    #[async_trait::async_trait(?Send)]
    impl ReminderAction for FailingAction {
        async fn execute(&self, _: &Reminder, _: &KeeperContext) -> anyhow::Result<ActionOutcome> {
            Err(anyhow::anyhow!("Integration is down"))
        }
    }

    #[actix_web::test]
    async fn hanging_action_times_out_and_does_not_stop_the_list() {
        tokio::time::pause();
        let (ctx, _) = setup_context();
        let record = insert_record(&ctx, "Dentist").await;
        let mut reminder = insert_reminder(&ctx, &record, "Dentist at 9").await;
        reminder.actions = vec![
            "Ring the bell".into(),
            BuiltinAction::BrowserNotification.name().into(),
        ];

        let mut dispatcher = ActionDispatcher::with_builtin_actions();
        dispatcher.register("Ring the bell", Arc::new(HangingAction));

        let started = tokio::time::Instant::now();
        let report = dispatcher.dispatch(&reminder, &ctx).await;
        assert!(started.elapsed() >= ctx.config.action_timeout);
        assert!(started.elapsed() < ctx.config.action_timeout * 2);
        assert_eq!(
            report,
            DispatchReport {
                executed: 1,
                failed: 1,
                ..Default::default()
            }
        );
        assert_eq!(ctx.notifications.recent(1)[0].title, "Dentist at 9");
    }

    #[actix_web::test]
    async fn unknown_action_does_not_stop_the_list() {
        let (ctx, _) = setup_context();
        let record = insert_record(&ctx, "Dentist").await;
        let mut reminder = insert_reminder(&ctx, &record, "Dentist at 9").await;
        reminder.actions = vec![
            "Unknown action".into(),
            BuiltinAction::BrowserNotification.name().into(),
        ];

        let report = ActionDispatcher::with_builtin_actions()
            .dispatch(&reminder, &ctx)
            .await;
        assert_eq!(
            report,
            DispatchReport {
                executed: 1,
                unknown: 1,
                ..Default::default()
            }
        );
        let shown = ctx.notifications.recent(10);
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].title, "Dentist at 9");
        assert_eq!(shown[0].tag, reminder.id.to_string());
    }

    #[actix_web::test]
    async fn failing_action_does_not_stop_the_list() {
        let (ctx, _) = setup_context();
        let record = insert_record(&ctx, "Dentist").await;
        let mut reminder = insert_reminder(&ctx, &record, "Dentist at 9").await;
        reminder.actions = vec![
            "Page the dentist".into(),
            BuiltinAction::BrowserNotification.name().into(),
            BuiltinAction::BrowserNotification.name().into(),
        ];

        let mut dispatcher = ActionDispatcher::with_builtin_actions();
        dispatcher.register("Page the dentist", Arc::new(FailingAction));
        assert!(dispatcher.is_registered("Page the dentist"));

        let report = dispatcher.dispatch(&reminder, &ctx).await;
        assert_eq!(report.failed, 1);
        assert_eq!(report.executed, 2);
        assert_eq!(ctx.notifications.len(), 2);
    }

    #[actix_web::test]
    async fn missing_permission_and_webhooks_skip() {
        let mut config = Config::inmemory();
        config.notification_permission = NotificationPermission::Denied;
        let sys = Arc::new(StaticTimeSys::new(crate::shared::test_utils::now()));
        let ctx = KeeperContext::create_inmemory(config, sys);
        let record = insert_record(&ctx, "Dentist").await;
        let mut reminder = insert_reminder(&ctx, &record, "Dentist at 9").await;
        reminder.actions = BuiltinAction::ALL
            .iter()
            .map(|action| action.name().to_string())
            .collect();

        let report = ActionDispatcher::with_builtin_actions()
            .dispatch(&reminder, &ctx)
            .await;
        // Browser notification, email, slack and whatsapp
        assert_eq!(report.skipped, 4);
        // Calendar link, follow-up task and meeting reminder
        assert_eq!(report.executed, 3);
        assert_eq!(report.unknown + report.failed, 0);

        let shown = ctx.notifications.recent(10);
        assert_eq!(shown.len(), 1);
        assert!(shown[0]
            .url
            .as_deref()
            .unwrap()
            .starts_with("https://calendar.google.com/calendar/render"));
    }
}
