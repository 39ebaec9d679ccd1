mod get_audit_trail;
mod get_record_audit_trail;
pub mod subscribers;

use actix_web::web;
use get_audit_trail::get_audit_trail_controller;
use get_record_audit_trail::get_record_audit_trail_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/audit", web::get().to(get_audit_trail_controller));
    cfg.route(
        "/records/{record_id}/audit",
        web::get().to(get_record_audit_trail_controller),
    );
}
