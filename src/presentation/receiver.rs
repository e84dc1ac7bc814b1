//! Stand-in for the real notification endpoint, for local runs and tests.

use actix_web::{HttpResponse, web};
use serde::Serialize;
use tracing::info;

#[derive(Serialize)]
struct ReceiverResponse {
    status: &'static str,
    message: &'static str,
}

pub async fn receive_notification(body: web::Json<serde_json::Value>) -> HttpResponse {
    info!(body = %body.0, "Notification received");
    HttpResponse::Ok().json(ReceiverResponse {
        status: "success",
        message: "Notification received",
    })
}

pub fn configure_receiver(cfg: &mut web::ServiceConfig) {
    cfg.route("/notifications", web::post().to(receive_notification));
}
