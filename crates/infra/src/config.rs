use crate::services::NotificationPermission;
use chrono_tz::Tz;
use std::{fmt::Display, str::FromStr, time::Duration};
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// The local time zone reminder dates and times are written in
    pub timezone: Tz,
    /// How often the reminder scheduler checks for due reminders
    pub reminder_check_interval: Duration,
    /// Answer given when the user was asked to allow notifications.
    /// Read once at startup and kept for the lifetime of the process
    pub notification_permission: NotificationPermission,
    /// Longest a single reminder action, webhook calls included, may run
    /// before it is counted as failed
    pub action_timeout: Duration,
    /// Number of notifications kept in the notification feed
    pub notification_capacity: usize,
    /// Webhooks for the messaging integrations. When one is missing the
    /// corresponding reminder action only logs
    pub email_webhook_url: Option<String>,
    pub slack_webhook_url: Option<String>,
    pub whatsapp_webhook_url: Option<String>,
    /// Postgres connection string. Reminders are kept in memory when missing
    pub database_url: Option<String>,
}

fn env_or_default<T>(key: &str, default: T) -> T
where
    T: FromStr + Display,
{
    let value = match std::env::var(key) {
        Ok(value) => value,
        Err(_) => return default,
    };
    match value.parse::<T>() {
        Ok(parsed) => parsed,
        Err(_) => {
            warn!(
                "The given {}: {} is not valid, falling back to the default: {}.",
                key, value, default
            );
            default
        }
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

impl Config {
    pub fn new() -> Self {
        let port = env_or_default("PORT", 5000);
        let timezone = env_or_default("TIMEZONE", Tz::UTC);
        let check_interval_secs = match env_or_default("REMINDER_CHECK_INTERVAL_SECS", 60u64) {
            0 => {
                warn!("REMINDER_CHECK_INTERVAL_SECS cannot be 0, falling back to the default: 60.");
                60
            }
            secs => secs,
        };
        let action_timeout_secs = match env_or_default("ACTION_TIMEOUT_SECS", 10u64) {
            0 => {
                warn!("ACTION_TIMEOUT_SECS cannot be 0, falling back to the default: 10.");
                10
            }
            secs => secs,
        };
        let notification_permission =
            env_or_default("NOTIFICATION_PERMISSION", NotificationPermission::Default);
        let notification_capacity = env_or_default("NOTIFICATION_CAPACITY", 100);
        let database_url = optional_env("DATABASE_URL");
        if database_url.is_none() {
            info!("Did not find DATABASE_URL environment variable. Records will be kept in memory.");
        }

        Self {
            port,
            timezone,
            reminder_check_interval: Duration::from_secs(check_interval_secs),
            action_timeout: Duration::from_secs(action_timeout_secs),
            notification_permission,
            notification_capacity,
            email_webhook_url: optional_env("EMAIL_WEBHOOK_URL"),
            slack_webhook_url: optional_env("SLACK_WEBHOOK_URL"),
            whatsapp_webhook_url: optional_env("WHATSAPP_WEBHOOK_URL"),
            database_url,
        }
    }

    /// Configuration that does not look at the environment, useful for tests
    pub fn inmemory() -> Self {
        Self {
            port: 0,
            timezone: Tz::UTC,
            reminder_check_interval: Duration::from_secs(60),
            action_timeout: Duration::from_secs(10),
            notification_permission: NotificationPermission::Granted,
            notification_capacity: 100,
            email_webhook_url: None,
            slack_webhook_url: None,
            whatsapp_webhook_url: None,
            database_url: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
