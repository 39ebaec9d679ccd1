use super::{ActionOutcome, ReminderAction};
use chrono::{DateTime, Utc};
use record_keeper_domain::{BuiltinAction, Reminder, ID};
use record_keeper_infra::{Config, KeeperContext, Notification};
use serde::Serialize;
use tracing::info;

/// Shows the reminder on the notification center
pub struct BrowserNotificationAction;

#[async_trait::async_trait(?Send)]
impl ReminderAction for BrowserNotificationAction {
    async fn execute(
        &self,
        reminder: &Reminder,
        ctx: &KeeperContext,
    ) -> anyhow::Result<ActionOutcome> {
        if !ctx.notifications.is_permitted() {
            return Ok(ActionOutcome::Skipped(format!(
                "Notification permission is {}",
                ctx.notifications.permission()
            )));
        }

        ctx.notifications.push(Notification::new(
            reminder.title.clone(),
            reminder.body(),
            reminder.id.to_string(),
            ctx.sys.now(),
        ));
        Ok(ActionOutcome::Executed)
    }
}

/// Offers a link that creates a calendar event at the due time
pub struct CalendarAction;

#[async_trait::async_trait(?Send)]
impl ReminderAction for CalendarAction {
    async fn execute(
        &self,
        reminder: &Reminder,
        ctx: &KeeperContext,
    ) -> anyhow::Result<ActionOutcome> {
        let url = match reminder.calendar_template_url(&ctx.config.timezone) {
            Some(url) => url,
            None => {
                return Ok(ActionOutcome::Skipped(
                    "The reminder has no due time in the configured time zone".into(),
                ))
            }
        };

        let notification = Notification::new(
            format!("Add to calendar: {}", reminder.title),
            reminder.body(),
            reminder.id.to_string(),
            ctx.sys.now(),
        )
        .with_url(url.to_string());
        ctx.notifications.push(notification);
        Ok(ActionOutcome::Executed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebhookTarget {
    Email,
    Slack,
    WhatsApp,
}

impl WebhookTarget {
    fn name(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Slack => "Slack",
            Self::WhatsApp => "WhatsApp",
        }
    }

    fn url<'a>(&self, config: &'a Config) -> Option<&'a str> {
        match self {
            Self::Email => config.email_webhook_url.as_deref(),
            Self::Slack => config.slack_webhook_url.as_deref(),
            Self::WhatsApp => config.whatsapp_webhook_url.as_deref(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookPayload<'a> {
    pub text: String,
    pub reminder_id: &'a ID,
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub due_at: Option<DateTime<Utc>>,
}

/// Sends the reminder to the webhook configured for `target`
pub struct WebhookAction {
    target: WebhookTarget,
}

impl WebhookAction {
    pub fn new(target: WebhookTarget) -> Self {
        Self { target }
    }
}

#[async_trait::async_trait(?Send)]
impl ReminderAction for WebhookAction {
    async fn execute(
        &self,
        reminder: &Reminder,
        ctx: &KeeperContext,
    ) -> anyhow::Result<ActionOutcome> {
        let url = match self.target.url(&ctx.config) {
            Some(url) => url,
            None => {
                info!(
                    "Sending {} notification for: {}",
                    self.target.name(),
                    reminder.title
                );
                return Ok(ActionOutcome::Skipped(format!(
                    "No {} webhook is configured",
                    self.target.name()
                )));
            }
        };

        let payload = WebhookPayload {
            text: format!("Reminder: {}", reminder.title),
            reminder_id: &reminder.id,
            title: &reminder.title,
            description: reminder.description.as_deref(),
            due_at: reminder.due_at(&ctx.config.timezone),
        };
        ctx.webhooks.post_json(url, &payload).await?;
        Ok(ActionOutcome::Executed)
    }
}

/// Actions without an integration behind them yet
pub struct LogOnlyAction {
    action: BuiltinAction,
}

impl LogOnlyAction {
    pub fn new(action: BuiltinAction) -> Self {
        Self { action }
    }
}

#[async_trait::async_trait(?Send)]
impl ReminderAction for LogOnlyAction {
    async fn execute(
        &self,
        reminder: &Reminder,
        _ctx: &KeeperContext,
    ) -> anyhow::Result<ActionOutcome> {
        info!("{} for: {}", self.action, reminder.title);
        Ok(ActionOutcome::Executed)
    }
}
