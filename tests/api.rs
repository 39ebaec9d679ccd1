mod helpers;

use chrono::{Duration, NaiveDate, NaiveTime};
use helpers::setup::{now, spawn_app, spawn_app_with_context, test_context};
use record_keeper_domain::{LeadTime, Record, Reminder};
use record_keeper_sdk::{
    APIErrorVariant, AuditAction, BuiltinAction, CreateRecordInput, CreateReminderInput,
    FollowUpPeriod, GetAuditTrailInput, SearchRecordsInput, UpdateRecordInput, ID,
};

fn record_input(title: &str, category: Option<&str>) -> CreateRecordInput {
    CreateRecordInput {
        title: title.into(),
        category: category.map(String::from),
        description: Some("<p>Details</p>".into()),
        notes: None,
        event_date: NaiveDate::from_ymd_opt(2024, 5, 20).unwrap(),
    }
}

fn reminder_input(record_id: &ID, hour: u32, time_limit: &str) -> CreateReminderInput {
    CreateReminderInput {
        record_id: record_id.clone(),
        title: "Call the dentist".into(),
        description: None,
        reminder_date: NaiveDate::from_ymd_opt(2024, 5, 20).unwrap(),
        reminder_time: NaiveTime::from_hms_opt(hour, 0, 0).unwrap(),
        time_limit: Some(time_limit.into()),
        actions: vec![BuiltinAction::BrowserNotification.name().into()],
    }
}

#[actix_web::test]
async fn test_status_ok() {
    let (_, sdk) = spawn_app().await;
    let status = sdk.status.check_health().await.unwrap();
    assert_eq!(status.server_time, now());
    assert_eq!(status.timezone, "UTC");
}

#[actix_web::test]
async fn test_crud_records() {
    let (app, sdk) = spawn_app().await;

    let record = sdk
        .record
        .create(record_input("Dentist", Some("Health")))
        .await
        .unwrap()
        .record;
    assert_eq!(record.title, "Dentist");
    app.sys.set(now() + Duration::minutes(1));

    let res = sdk.record.create(record_input("  ", None)).await;
    assert!(matches!(
        res.unwrap_err().variant,
        APIErrorVariant::UnexpectedStatusCode
    ));

    let updated = sdk
        .record
        .update(UpdateRecordInput {
            record_id: record.id.clone(),
            title: Some("Dentist visit".into()),
            category: None,
            description: None,
            notes: Some("Bring card".into()),
            event_date: None,
        })
        .await
        .unwrap()
        .record;
    assert_eq!(updated.title, "Dentist visit");
    assert_eq!(updated.category.as_deref(), Some("Health"));
    assert_eq!(updated.notes.as_deref(), Some("Bring card"));

    let fetched = sdk.record.get(record.id.clone()).await.unwrap().record;
    assert_eq!(fetched.title, "Dentist visit");
    app.sys.set(now() + Duration::minutes(2));

    sdk.record.delete(record.id.clone()).await.unwrap();
    let res = sdk.record.get(record.id.clone()).await;
    let err = res.unwrap_err();
    assert_eq!(err.status.map(|s| s.as_u16()), Some(404));

    let trail = sdk
        .record
        .audit_trail(record.id.clone(), None)
        .await
        .unwrap()
        .entries;
    let actions = trail.iter().map(|e| e.action).collect::<Vec<_>>();
    assert_eq!(
        actions,
        vec![AuditAction::Delete, AuditAction::Update, AuditAction::Insert]
    );
}

#[actix_web::test]
async fn test_search_and_stats() {
    let (_, sdk) = spawn_app().await;
    sdk.record
        .create(record_input("Dentist", Some("Health")))
        .await
        .unwrap();
    sdk.record
        .create(record_input("Tax return", Some("Finance")))
        .await
        .unwrap();

    let res = sdk
        .record
        .search(SearchRecordsInput {
            query: Some("tax".into()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(res.records.len(), 1);
    assert_eq!(res.records[0].title, "Tax return");
    assert_eq!(res.categories, vec!["Finance", "Health"]);

    let res = sdk
        .record
        .search(SearchRecordsInput {
            date_from: NaiveDate::from_ymd_opt(2024, 5, 21),
            ..Default::default()
        })
        .await
        .unwrap();
    assert!(res.records.is_empty());

    let stats = sdk.record.stats().await.unwrap().stats;
    assert_eq!(stats.total_records, 2);
    assert_eq!(stats.categories, 2);
}

#[actix_web::test]
async fn test_categories() {
    let (_, sdk) = spawn_app().await;

    let category = sdk
        .category
        .create("Health".into())
        .await
        .unwrap()
        .category;
    let res = sdk.category.create("health".into()).await;
    assert_eq!(res.unwrap_err().status.map(|s| s.as_u16()), Some(409));

    let categories = sdk.category.get_all().await.unwrap().categories;
    assert_eq!(categories.len(), 1);

    sdk.category.delete(category.id.clone()).await.unwrap();
    assert!(sdk.category.get_all().await.unwrap().categories.is_empty());
    assert!(sdk.category.delete(category.id).await.is_err());
}

#[actix_web::test]
async fn test_reminders() {
    let (_, sdk) = spawn_app().await;
    let record = sdk
        .record
        .create(record_input("Dentist", None))
        .await
        .unwrap()
        .record;

    let reminder = sdk
        .reminder
        .create(reminder_input(&record.id, 9, "30min"))
        .await
        .unwrap()
        .reminder;
    assert!(reminder.is_active);
    assert_eq!(reminder.time_limit, "30min");
    assert_eq!(reminder.lead_time_minutes, 30);

    let res = sdk
        .reminder
        .create(reminder_input(&ID::default(), 9, "30min"))
        .await;
    assert_eq!(res.unwrap_err().status.map(|s| s.as_u16()), Some(404));

    let reminders = sdk
        .reminder
        .get_by_record(record.id.clone())
        .await
        .unwrap()
        .reminders;
    assert_eq!(reminders.len(), 1);

    let upcoming = sdk.reminder.upcoming(None).await.unwrap().reminders;
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].record_title, "Dentist");

    let follow_ups = sdk
        .reminder
        .follow_ups(Some(FollowUpPeriod::ThisMonth))
        .await
        .unwrap()
        .follow_ups;
    assert_eq!(follow_ups.len(), 1);

    let completed = sdk
        .reminder
        .set_active(reminder.id.clone(), false)
        .await
        .unwrap()
        .reminder;
    assert!(!completed.is_active);
    assert!(sdk.reminder.upcoming(None).await.unwrap().reminders.is_empty());

    sdk.reminder.delete(reminder.id.clone()).await.unwrap();
    assert!(sdk
        .reminder
        .get_by_record(record.id)
        .await
        .unwrap()
        .reminders
        .is_empty());
}

#[actix_web::test]
async fn test_audit_trail_filters() {
    let (_, sdk) = spawn_app().await;
    let record = sdk
        .record
        .create(record_input("Dentist", None))
        .await
        .unwrap()
        .record;
    sdk.reminder
        .create(reminder_input(&record.id, 9, "1hour"))
        .await
        .unwrap();
    sdk.record.delete(record.id).await.unwrap();

    let entries = sdk
        .audit
        .get(GetAuditTrailInput::default())
        .await
        .unwrap()
        .entries;
    assert_eq!(entries.len(), 4);

    let deletes = sdk
        .audit
        .get(GetAuditTrailInput {
            action: Some(AuditAction::Delete),
            ..Default::default()
        })
        .await
        .unwrap()
        .entries;
    assert_eq!(deletes.len(), 2);

    let reminder_entries = sdk
        .audit
        .get(GetAuditTrailInput {
            search: Some("reminders".into()),
            ..Default::default()
        })
        .await
        .unwrap()
        .entries;
    assert_eq!(reminder_entries.len(), 2);
}

#[actix_web::test]
async fn test_due_reminder_is_dispatched_on_startup() {
    let (ctx, sys) = test_context();
    let record = Record::new(
        "Dentist".into(),
        NaiveDate::from_ymd_opt(2024, 5, 15).unwrap(),
        now(),
    );
    ctx.repos.record_repo.insert(&record).await.unwrap();
    // Due in 30 minutes with a one hour lead time
    let reminder = Reminder {
        id: Default::default(),
        record_id: record.id.clone(),
        title: "Dentist at 12:30".into(),
        description: None,
        reminder_date: record.event_date,
        reminder_time: NaiveTime::from_hms_opt(12, 30, 0).unwrap(),
        time_limit: LeadTime::parse("1hour"),
        actions: vec![
            "Unknown action".into(),
            BuiltinAction::BrowserNotification.name().into(),
        ],
        is_active: true,
        created_at: now(),
        updated_at: now(),
    };
    ctx.repos.reminder_repo.insert(&reminder).await.unwrap();

    let (_, sdk) = spawn_app_with_context(ctx, sys).await;
    let res = sdk.notification.get(None).await.unwrap();
    assert_eq!(res.permission, "granted");
    assert_eq!(res.notifications.len(), 1);
    assert_eq!(res.notifications[0].title, "Dentist at 12:30");
    assert_eq!(res.notifications[0].tag, reminder.id.to_string());
}
