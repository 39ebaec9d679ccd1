use crate::reminder::actions::{ActionOutcome, ReminderAction};
use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use record_keeper_domain::{BuiltinAction, LeadTime, Record, Reminder, ID};
use record_keeper_infra::{Config, DeleteResult, IReminderRepo, KeeperContext, StaticTimeSys};
use std::sync::Arc;

pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 15, 12, 0, 0).unwrap()
}

/// In-memory context with a clock standing still at `now()`
pub fn setup_context() -> (KeeperContext, Arc<StaticTimeSys>) {
    let sys = Arc::new(StaticTimeSys::new(now()));
    let ctx = KeeperContext::create_inmemory(Config::inmemory(), sys.clone());
    (ctx, sys)
}

pub async fn insert_record(ctx: &KeeperContext, title: &str) -> Record {
    let record = Record::new(
        title.into(),
        NaiveDate::from_ymd_opt(2024, 5, 20).unwrap(),
        now(),
    );
    ctx.repos.record_repo.insert(&record).await.unwrap();
    record
}

/// Active reminder on the event date of `record` at 09:00 with a one hour lead
pub async fn insert_reminder(ctx: &KeeperContext, record: &Record, title: &str) -> Reminder {
    let reminder = Reminder {
        id: Default::default(),
        record_id: record.id.clone(),
        title: title.into(),
        description: None,
        reminder_date: record.event_date,
        reminder_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        time_limit: LeadTime::parse("1hour"),
        actions: vec![BuiltinAction::BrowserNotification.name().into()],
        is_active: true,
        created_at: now(),
        updated_at: now(),
    };
    ctx.repos.reminder_repo.insert(&reminder).await.unwrap();
    reminder
}

/// Reminder store whose every call fails, as when the database is unreachable
pub struct UnavailableReminderRepo;

fn unavailable<T>() -> anyhow::Result<T> {
    Err(anyhow::anyhow!("Connection refused"))
}

#[async_trait::async_trait]
impl IReminderRepo for UnavailableReminderRepo {
    async fn insert(&self, _: &Reminder) -> anyhow::Result<()> {
        unavailable()
    }
    async fn save(&self, _: &Reminder) -> anyhow::Result<()> {
        unavailable()
    }
    async fn find(&self, _: &ID) -> anyhow::Result<Option<Reminder>> {
        unavailable()
    }
    async fn find_by_record(&self, _: &ID) -> anyhow::Result<Vec<Reminder>> {
        unavailable()
    }
    async fn find_active(&self) -> anyhow::Result<Vec<Reminder>> {
        unavailable()
    }
    async fn find_active_from(&self, _: NaiveDate) -> anyhow::Result<Vec<Reminder>> {
        unavailable()
    }
    async fn set_active(
        &self,
        _: &ID,
        _: bool,
        _: DateTime<Utc>,
    ) -> anyhow::Result<Option<Reminder>> {
        unavailable()
    }
    async fn delete(&self, _: &ID) -> anyhow::Result<Option<Reminder>> {
        unavailable()
    }
    async fn delete_by_record(&self, _: &ID) -> anyhow::Result<DeleteResult> {
        unavailable()
    }
}

/// In-memory context whose reminder store is unreachable
pub fn setup_context_without_reminder_store() -> (KeeperContext, Arc<StaticTimeSys>) {
    let (mut ctx, sys) = setup_context();
    ctx.repos.reminder_repo = Arc::new(UnavailableReminderRepo);
    (ctx, sys)
}

/// Reminder action that never finishes on its own
pub struct HangingAction;

#[async_trait::async_trait(?Send)]
impl ReminderAction for HangingAction {
    async fn execute(&self, _: &Reminder, _: &KeeperContext) -> anyhow::Result<ActionOutcome> {
        futures::future::pending().await
    }
}
