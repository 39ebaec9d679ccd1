mod create_category;
mod delete_category;
mod get_categories;

use actix_web::web;
use create_category::create_category_controller;
use delete_category::delete_category_controller;
use get_categories::get_categories_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/categories", web::post().to(create_category_controller));
    cfg.route("/categories", web::get().to(get_categories_controller));
    cfg.route(
        "/categories/{category_id}",
        web::delete().to(delete_category_controller),
    );
}
