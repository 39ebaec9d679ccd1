pub mod actions;
mod create_reminder;
mod delete_reminder;
mod get_follow_ups;
mod get_record_reminders;
mod get_upcoming_reminders;
pub mod send_reminders;
mod set_reminder_active;
mod update_reminder;

use actix_web::web;
use create_reminder::create_reminder_controller;
use delete_reminder::delete_reminder_controller;
use get_follow_ups::get_follow_ups_controller;
use get_record_reminders::get_record_reminders_controller;
use get_upcoming_reminders::get_upcoming_reminders_controller;
use record_keeper_domain::LeadTime;
use set_reminder_active::set_reminder_active_controller;
use tracing::warn;
use update_reminder::update_reminder_controller;

/// Parses a lead time given by a user, warning when it is not understood
fn resolve_lead_time(raw: &str) -> LeadTime {
    let lead_time = LeadTime::parse(raw);
    if lead_time.is_fallback() {
        warn!(
            "Unrecognized time limit: {:?}, falling back to the default lead time",
            raw
        );
    }
    lead_time
}

/// Trimmed action names, blank ones dropped. Duplicates are kept.
fn clean_actions(actions: Vec<String>) -> Vec<String> {
    actions
        .into_iter()
        .map(|action| action.trim().to_string())
        .filter(|action| !action.is_empty())
        .collect()
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/records/{record_id}/reminders",
        web::get().to(get_record_reminders_controller),
    );
    cfg.route(
        "/records/{record_id}/reminders",
        web::post().to(create_reminder_controller),
    );
    cfg.route(
        "/reminders/upcoming",
        web::get().to(get_upcoming_reminders_controller),
    );
    cfg.route(
        "/reminders/follow-ups",
        web::get().to(get_follow_ups_controller),
    );
    cfg.route(
        "/reminders/{reminder_id}",
        web::put().to(update_reminder_controller),
    );
    cfg.route(
        "/reminders/{reminder_id}",
        web::delete().to(delete_reminder_controller),
    );
    cfg.route(
        "/reminders/{reminder_id}/active",
        web::put().to(set_reminder_active_controller),
    );
}
