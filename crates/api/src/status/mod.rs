use actix_web::{web, HttpResponse};
use record_keeper_api_structs::get_service_health::*;
use record_keeper_infra::KeeperContext;

async fn status(ctx: web::Data<KeeperContext>) -> HttpResponse {
    HttpResponse::Ok().json(APIResponse {
        message: "Yo! We are up!\r\n".into(),
        server_time: ctx.sys.now(),
        timezone: ctx.config.timezone.name().to_string(),
    })
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(status));
}
