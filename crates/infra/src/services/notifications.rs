use chrono::{DateTime, Duration, Utc};
use record_keeper_domain::ID;
use std::{collections::VecDeque, fmt::Display, str::FromStr, sync::Mutex};

/// How long a notification stays open before it closes by itself
pub const AUTO_CLOSE_AFTER_SECS: i64 = 30;

/// The answer the user gave when asked to allow notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationPermission {
    Granted,
    Denied,
    /// The user has not answered yet, which is treated like `Denied`
    Default,
}

impl FromStr for NotificationPermission {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "granted" => Ok(Self::Granted),
            "denied" => Ok(Self::Denied),
            "default" => Ok(Self::Default),
            _ => Err(format!("Unknown notification permission: {}", s)),
        }
    }
}

impl Display for NotificationPermission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = match self {
            Self::Granted => "granted",
            Self::Denied => "denied",
            Self::Default => "default",
        };
        write!(f, "{}", value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: ID,
    pub title: String,
    pub body: String,
    /// Notifications with the same tag belong to the same reminder
    pub tag: String,
    pub url: Option<String>,
    pub require_interaction: bool,
    pub created_at: DateTime<Utc>,
    pub auto_close_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(title: String, body: String, tag: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Default::default(),
            title,
            body,
            tag,
            url: None,
            require_interaction: true,
            created_at,
            auto_close_at: created_at + Duration::seconds(AUTO_CLOSE_AFTER_SECS),
        }
    }

    pub fn with_url(mut self, url: String) -> Self {
        self.url = Some(url);
        self
    }

    pub fn is_open(&self, now: DateTime<Utc>) -> bool {
        now < self.auto_close_at
    }
}

/// The notification surface reminders are shown on. Keeps a bounded
/// feed of the most recent notifications, dropping the oldest.
pub struct NotificationCenter {
    permission: NotificationPermission,
    capacity: usize,
    feed: Mutex<VecDeque<Notification>>,
}

impl NotificationCenter {
    pub fn new(permission: NotificationPermission, capacity: usize) -> Self {
        Self {
            permission,
            capacity: capacity.max(1),
            feed: Mutex::new(VecDeque::new()),
        }
    }

    pub fn permission(&self) -> NotificationPermission {
        self.permission
    }

    pub fn is_permitted(&self) -> bool {
        self.permission == NotificationPermission::Granted
    }

    pub fn push(&self, notification: Notification) {
        let mut feed = self.feed.lock().unwrap();
        while feed.len() >= self.capacity {
            feed.pop_front();
        }
        feed.push_back(notification);
    }

    /// Newest first
    pub fn recent(&self, limit: usize) -> Vec<Notification> {
        let feed = self.feed.lock().unwrap();
        feed.iter().rev().take(limit).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.feed.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
