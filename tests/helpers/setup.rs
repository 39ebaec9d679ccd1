use chrono::{DateTime, TimeZone, Utc};
use record_keeper_api::Application;
use record_keeper_infra::{Config, KeeperContext, StaticTimeSys};
use record_keeper_sdk::RecordKeeperSDK;
use std::sync::Arc;

pub struct TestApp {
    pub ctx: KeeperContext,
    pub sys: Arc<StaticTimeSys>,
}

/// The time the application clock stands still at
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 15, 12, 0, 0).unwrap()
}

/// In-memory context on a random port with the clock standing still at `now()`
pub fn test_context() -> (KeeperContext, Arc<StaticTimeSys>) {
    let mut config = Config::inmemory();
    config.port = 0; // Random port
    let sys = Arc::new(StaticTimeSys::new(now()));
    let ctx = KeeperContext::create_inmemory(config, sys.clone());
    (ctx, sys)
}

pub async fn spawn_app() -> (TestApp, RecordKeeperSDK) {
    let (ctx, sys) = test_context();
    spawn_app_with_context(ctx, sys).await
}

// Launch the application as a background task
pub async fn spawn_app_with_context(
    ctx: KeeperContext,
    sys: Arc<StaticTimeSys>,
) -> (TestApp, RecordKeeperSDK) {
    let application = Application::new(ctx.clone())
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let app = TestApp { ctx, sys };
    let sdk = RecordKeeperSDK::new(address);
    (app, sdk)
}
