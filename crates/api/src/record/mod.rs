mod create_record;
mod delete_record;
mod get_record;
mod get_record_stats;
mod search_records;
mod update_record;

use actix_web::web;
use create_record::create_record_controller;
use delete_record::delete_record_controller;
use get_record::get_record_controller;
use get_record_stats::get_record_stats_controller;
use search_records::search_records_controller;
use update_record::update_record_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/records", web::post().to(create_record_controller));
    cfg.route("/records", web::get().to(search_records_controller));
    // Has to come before the record id routes
    cfg.route("/records/stats", web::get().to(get_record_stats_controller));
    cfg.route("/records/{record_id}", web::get().to(get_record_controller));
    cfg.route("/records/{record_id}", web::put().to(update_record_controller));
    cfg.route(
        "/records/{record_id}",
        web::delete().to(delete_record_controller),
    );
}
