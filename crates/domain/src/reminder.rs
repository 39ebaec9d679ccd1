use crate::{
    lead_time::LeadTime,
    shared::entity::{Entity, ID},
};
use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::Serialize;
use std::fmt::Display;
use url::Url;

const CALENDAR_TEMPLATE_URL: &str = "https://calendar.google.com/calendar/render";

/// A `Reminder` is attached to a `Record` and should notify the user
/// through its `actions` when "now" enters its firing window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reminder {
    pub id: ID,
    /// The `Record` this `Reminder` belongs to
    pub record_id: ID,
    pub title: String,
    pub description: Option<String>,
    /// Together with `reminder_time` this is the due instant in the
    /// configured local time zone
    pub reminder_date: NaiveDate,
    pub reminder_time: NaiveTime,
    /// How long before the due instant the reminder starts firing
    pub time_limit: LeadTime,
    /// Action names, executed in order. Unknown names are skipped
    pub actions: Vec<String>,
    /// Inactive reminders are never evaluated. Set to false when a reminder
    /// is marked as complete
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The closed interval `[opens_at, due_at]` in which a reminder is due
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FiringWindow {
    pub opens_at: DateTime<Utc>,
    pub due_at: DateTime<Utc>,
}

impl FiringWindow {
    pub fn contains(&self, now: DateTime<Utc>) -> bool {
        self.opens_at <= now && now <= self.due_at
    }
}

impl Reminder {
    /// The instant `reminder_date` + `reminder_time` denotes in `tz`.
    ///
    /// Local times repeated by a DST transition resolve to the earlier
    /// instant. Local times skipped by a DST transition have no instant.
    pub fn due_at(&self, tz: &Tz) -> Option<DateTime<Utc>> {
        let local = self.reminder_date.and_time(self.reminder_time);
        tz.from_local_datetime(&local)
            .earliest()
            .map(|due| due.with_timezone(&Utc))
    }

    /// The window opens at the earliest representable instant when the lead
    /// reaches further back than that
    pub fn firing_window(&self, tz: &Tz) -> Option<FiringWindow> {
        let due_at = self.due_at(tz)?;
        let opens_at = due_at
            .checked_sub_signed(self.time_limit.duration())
            .unwrap_or(DateTime::<Utc>::MIN_UTC);
        Some(FiringWindow { opens_at, due_at })
    }

    pub fn is_due(&self, now: DateTime<Utc>, tz: &Tz) -> bool {
        self.firing_window(tz)
            .map(|window| window.contains(now))
            .unwrap_or(false)
    }

    /// Link to a prefilled Google Calendar event starting and ending at the due instant
    pub fn calendar_template_url(&self, tz: &Tz) -> Option<Url> {
        let due_at = self.due_at(tz)?;
        let stamp = due_at.format("%Y%m%dT%H%M%SZ").to_string();
        let dates = format!("{}/{}", stamp, stamp);
        Url::parse_with_params(
            CALENDAR_TEMPLATE_URL,
            &[
                ("action", "TEMPLATE"),
                ("text", self.title.as_str()),
                ("details", self.description.as_deref().unwrap_or_default()),
                ("dates", dates.as_str()),
            ],
        )
        .ok()
    }

    /// The notification body, falling back to a generic text
    pub fn body(&self) -> String {
        match &self.description {
            Some(description) if !description.trim().is_empty() => description.clone(),
            _ => format!("Reminder for: {}", self.title),
        }
    }

    pub fn complete(&mut self, now: DateTime<Utc>) {
        self.is_active = false;
        self.updated_at = now;
    }
}

impl Entity for Reminder {
    fn id(&self) -> &ID {
        &self.id
    }
}

/// The actions a reminder can be configured with out of the box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinAction {
    BrowserNotification,
    EmailNotification,
    AddToCalendar,
    FollowUpTask,
    SlackNotification,
    MeetingReminder,
    WhatsAppMessage,
}

impl BuiltinAction {
    pub const ALL: [BuiltinAction; 7] = [
        BuiltinAction::BrowserNotification,
        BuiltinAction::EmailNotification,
        BuiltinAction::AddToCalendar,
        BuiltinAction::FollowUpTask,
        BuiltinAction::SlackNotification,
        BuiltinAction::MeetingReminder,
        BuiltinAction::WhatsAppMessage,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::BrowserNotification => "Show browser notification",
            Self::EmailNotification => "Send email notification",
            Self::AddToCalendar => "Add to calendar",
            Self::FollowUpTask => "Create follow-up task",
            Self::SlackNotification => "Send Slack notification",
            Self::MeetingReminder => "Create meeting reminder",
            Self::WhatsAppMessage => "Send WhatsApp message",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|action| action.name() == name)
    }
}

impl Display for BuiltinAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
