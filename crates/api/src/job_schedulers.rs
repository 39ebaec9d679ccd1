use crate::{
    reminder::{
        actions::ActionDispatcher,
        send_reminders::{SendRemindersUseCase, TickReport},
    },
    shared::usecase::execute,
};
use record_keeper_infra::KeeperContext;
use std::{
    sync::{
        atomic::{AtomicBool, AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};
use tokio::{
    task::JoinHandle,
    time::{interval_at, Instant, MissedTickBehavior},
};
use tracing::{debug, info};

/// Periodically dispatches the reminders that are due.
///
/// The scheduler is owned by whoever starts it and stops when dropped.
/// A timer fire while a tick is still running is skipped, so ticks never
/// overlap.
pub struct ReminderScheduler {
    ctx: KeeperContext,
    dispatcher: Arc<ActionDispatcher>,
    period: Duration,
    timer: Option<JoinHandle<()>>,
    tick_in_progress: Arc<AtomicBool>,
    completed_ticks: Arc<AtomicUsize>,
}

/// Marks a tick as in progress until dropped
struct TickGuard(Arc<AtomicBool>);

impl TickGuard {
    fn acquire(flag: &Arc<AtomicBool>) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()
            .map(|_| Self(flag.clone()))
    }
}

impl Drop for TickGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

#[tracing::instrument(name = "Reminder scheduler tick", skip_all)]
async fn tick(
    ctx: KeeperContext,
    dispatcher: Arc<ActionDispatcher>,
    completed_ticks: Arc<AtomicUsize>,
    _guard: TickGuard,
) -> Option<TickReport> {
    let usecase = SendRemindersUseCase { dispatcher };
    // Failures are logged by the use case executor
    let report = execute(usecase, &ctx).await.ok();
    if let Some(report) = &report {
        debug!(
            "Tick done: {} fetched, {} due, {:?}",
            report.fetched, report.due, report.dispatch
        );
    }
    completed_ticks.fetch_add(1, Ordering::SeqCst);
    report
}

impl ReminderScheduler {
    pub fn new(ctx: KeeperContext, dispatcher: ActionDispatcher) -> Self {
        let period = ctx.config.reminder_check_interval;
        Self {
            ctx,
            dispatcher: Arc::new(dispatcher),
            period,
            timer: None,
            tick_in_progress: Arc::new(AtomicBool::new(false)),
            completed_ticks: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Spawns one tick right away and then one every period. Returns
    /// without waiting for any tick. Starting a running scheduler restarts it.
    pub fn start(&mut self) {
        self.stop();

        match TickGuard::acquire(&self.tick_in_progress) {
            Some(guard) => {
                actix_web::rt::spawn(tick(
                    self.ctx.clone(),
                    self.dispatcher.clone(),
                    self.completed_ticks.clone(),
                    guard,
                ));
            }
            None => debug!("A tick is already in progress, skipping the first tick"),
        }

        let ctx = self.ctx.clone();
        let dispatcher = self.dispatcher.clone();
        let tick_in_progress = self.tick_in_progress.clone();
        let completed_ticks = self.completed_ticks.clone();
        let period = self.period;
        self.timer = Some(actix_web::rt::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                interval.tick().await;
                let guard = match TickGuard::acquire(&tick_in_progress) {
                    Some(guard) => guard,
                    None => {
                        debug!("Previous tick is still in progress, skipping this one");
                        continue;
                    }
                };
                actix_web::rt::spawn(tick(
                    ctx.clone(),
                    dispatcher.clone(),
                    completed_ticks.clone(),
                    guard,
                ));
            }
        }));
        info!(
            "Reminder scheduler started, checking every {} seconds",
            period.as_secs()
        );
    }

    /// Prevents new ticks from starting. A tick already running is left
    /// to finish.
    pub fn stop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
            info!("Reminder scheduler stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    pub fn completed_ticks(&self) -> usize {
        self.completed_ticks.load(Ordering::SeqCst)
    }
}

impl Drop for ReminderScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_utils::{
        insert_record, insert_reminder, now, setup_context,
        setup_context_without_reminder_store, HangingAction,
    };
    use chrono::NaiveTime;
    use record_keeper_domain::BuiltinAction;
    use tokio::time::sleep;

    fn scheduler(ctx: &KeeperContext) -> ReminderScheduler {
        ReminderScheduler::new(ctx.clone(), ActionDispatcher::with_builtin_actions())
    }

    /// Scheduler whose "Ring the bell" action never finishes
    fn scheduler_with_hanging_action(ctx: &KeeperContext) -> ReminderScheduler {
        let mut dispatcher = ActionDispatcher::with_builtin_actions();
        dispatcher.register("Ring the bell", Arc::new(HangingAction));
        ReminderScheduler::new(ctx.clone(), dispatcher)
    }

    /// Reminder due at 12:30 today, inside its window at `now()`
    async fn insert_due_reminder(ctx: &KeeperContext, actions: Vec<String>) {
        let record = insert_record(ctx, "Dentist").await;
        let mut reminder = insert_reminder(ctx, &record, "Dentist at 12:30").await;
        reminder.reminder_date = now().date_naive();
        reminder.reminder_time = NaiveTime::from_hms_opt(12, 30, 0).unwrap();
        reminder.actions = actions;
        ctx.repos.reminder_repo.save(&reminder).await.unwrap();
    }

    fn hanging_then_notify() -> Vec<String> {
        vec![
            "Ring the bell".into(),
            BuiltinAction::BrowserNotification.name().into(),
        ]
    }

    async fn wait(secs: u64) {
        sleep(Duration::from_secs(secs)).await;
        tokio::task::yield_now().await;
    }

    #[actix_web::test]
    async fn ticks_right_away_and_then_every_period() {
        tokio::time::pause();
        let (ctx, _) = setup_context();
        let mut scheduler = scheduler(&ctx);
        assert!(!scheduler.is_running());

        scheduler.start();
        assert!(scheduler.is_running());
        wait(1).await;
        assert_eq!(scheduler.completed_ticks(), 1);

        wait(125).await;
        assert_eq!(scheduler.completed_ticks(), 3);
    }

    #[actix_web::test]
    async fn start_does_not_wait_for_a_hanging_first_tick() {
        tokio::time::pause();
        let (ctx, _) = setup_context();
        insert_due_reminder(&ctx, hanging_then_notify()).await;
        let mut scheduler = scheduler_with_hanging_action(&ctx);

        scheduler.start();
        assert!(scheduler.is_running());
        assert_eq!(scheduler.completed_ticks(), 0);

        wait(1).await;
        assert_eq!(scheduler.completed_ticks(), 0);

        // The hanging action is abandoned after the action timeout
        wait(ctx.config.action_timeout.as_secs()).await;
        assert_eq!(scheduler.completed_ticks(), 1);
        assert_eq!(ctx.notifications.len(), 1);
    }

    #[actix_web::test]
    async fn hanging_action_does_not_stop_later_ticks() {
        tokio::time::pause();
        let (ctx, _) = setup_context();
        insert_due_reminder(&ctx, hanging_then_notify()).await;
        let mut scheduler = scheduler_with_hanging_action(&ctx);

        scheduler.start();
        // Ticks start at 0, 60 and 120 seconds and each one ends 10 seconds later
        wait(135).await;
        assert_eq!(scheduler.completed_ticks(), 3);
        assert_eq!(ctx.notifications.len(), 3);

        wait(30 * 60).await;
        assert_eq!(scheduler.completed_ticks(), 33);
    }

    #[actix_web::test]
    async fn store_failure_does_not_stop_later_ticks() {
        tokio::time::pause();
        let (ctx, _) = setup_context_without_reminder_store();
        let mut scheduler = scheduler(&ctx);

        scheduler.start();
        wait(1).await;
        assert_eq!(scheduler.completed_ticks(), 1);

        wait(120).await;
        assert_eq!(scheduler.completed_ticks(), 3);
    }

    #[actix_web::test]
    async fn starting_twice_keeps_one_timer() {
        tokio::time::pause();
        let (ctx, _) = setup_context();
        insert_due_reminder(
            &ctx,
            vec![BuiltinAction::BrowserNotification.name().into()],
        )
        .await;

        let mut scheduler = scheduler(&ctx);
        scheduler.start();
        wait(1).await;
        scheduler.start();
        wait(1).await;
        assert_eq!(scheduler.completed_ticks(), 2);
        assert_eq!(ctx.notifications.len(), 2);

        // The first timer would have fired at 60 seconds
        wait(60).await;
        assert_eq!(scheduler.completed_ticks(), 3);
        assert_eq!(ctx.notifications.len(), 3);
    }

    #[actix_web::test]
    async fn no_ticks_after_stop() {
        tokio::time::pause();
        let (ctx, _) = setup_context();
        let mut scheduler = scheduler(&ctx);

        scheduler.start();
        scheduler.stop();
        assert!(!scheduler.is_running());
        scheduler.stop();

        // Only the tick spawned by start runs
        wait(61).await;
        assert_eq!(scheduler.completed_ticks(), 1);
    }

    #[test]
    fn tick_guard_is_exclusive() {
        let flag = Arc::new(AtomicBool::new(false));
        let guard = TickGuard::acquire(&flag);
        assert!(guard.is_some());
        assert!(TickGuard::acquire(&flag).is_none());
        drop(guard);
        assert!(TickGuard::acquire(&flag).is_some());
    }
}
