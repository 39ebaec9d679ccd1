mod notifications;
mod webhook;

pub use notifications::{Notification, NotificationCenter, NotificationPermission};
pub use webhook::WebhookClient;
