mod audit;
mod category;
mod error;
mod job_schedulers;
mod notification;
mod record;
mod reminder;
mod shared;
mod status;

use actix_cors::Cors;
use actix_web::{dev::Server, middleware, web, App, HttpServer};
pub use error::KeeperError;
pub use job_schedulers::ReminderScheduler;
use record_keeper_infra::KeeperContext;
pub use reminder::actions::{ActionDispatcher, ActionOutcome, DispatchReport, ReminderAction};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub fn configure_server_api(cfg: &mut web::ServiceConfig) {
    // Records first, their static routes have to be matched before the record id routes
    record::configure_routes(cfg);
    reminder::configure_routes(cfg);
    category::configure_routes(cfg);
    audit::configure_routes(cfg);
    notification::configure_routes(cfg);
    status::configure_routes(cfg);
}

pub struct Application {
    server: Server,
    port: u16,
    scheduler: ReminderScheduler,
}

impl Application {
    pub async fn new(context: KeeperContext) -> Result<Self, std::io::Error> {
        Self::with_dispatcher(context, ActionDispatcher::with_builtin_actions()).await
    }

    /// Application whose reminders are dispatched with the actions of `dispatcher`
    pub async fn with_dispatcher(
        context: KeeperContext,
        dispatcher: ActionDispatcher,
    ) -> Result<Self, std::io::Error> {
        let (server, port) = Application::configure_server(context.clone()).await?;
        let mut scheduler = ReminderScheduler::new(context, dispatcher);
        scheduler.start();

        Ok(Self {
            server,
            port,
            scheduler,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn scheduler(&self) -> &ReminderScheduler {
        &self.scheduler
    }

    async fn configure_server(context: KeeperContext) -> Result<(Server, u16), std::io::Error> {
        let port = context.config.port;
        let address = format!("0.0.0.0:{}", port);
        let listener = TcpListener::bind(&address)?;
        let port = listener.local_addr()?.port();

        let server = HttpServer::new(move || {
            let ctx = context.clone();

            App::new()
                .wrap(Cors::permissive())
                .wrap(middleware::Compress::default())
                .wrap(TracingLogger::default())
                .app_data(web::Data::new(ctx))
                .service(web::scope("/api/v1").configure(configure_server_api))
        })
        .listen(listener)?
        .workers(4)
        .run();

        Ok((server, port))
    }

    /// Serves requests until the server shuts down. The reminder scheduler
    /// is stopped afterwards.
    pub async fn start(self) -> Result<(), std::io::Error> {
        let Self {
            server,
            mut scheduler,
            ..
        } = self;
        let res = server.await;
        scheduler.stop();
        res
    }
}
