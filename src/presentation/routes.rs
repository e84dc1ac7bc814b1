use crate::presentation::handlers::{filter_users, health_check, list_users};
use actix_web::web;

/// Query API routes. `/filter` and `/filter/` are the same endpoint.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(list_users))
        .route("/filter/", web::get().to(filter_users))
        .route("/filter", web::get().to(filter_users))
        .route("/health", web::get().to(health_check));
}
