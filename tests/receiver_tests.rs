use actix_web::{App, test};
use health_notifier::presentation::receiver::configure_receiver;

#[actix_web::test]
async fn test_receiver_acknowledges_any_json() {
    let app = test::init_service(App::new().configure(configure_receiver)).await;

    for body in [
        serde_json::json!({
            "user_id": "123",
            "name": "John Doe",
            "email": "john@example.com",
            "message": "Stay hydrated!"
        }),
        serde_json::json!({"anything": [1, 2, 3]}),
    ] {
        let req = test::TestRequest::post()
            .uri("/notifications")
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            serde_json::json!({"status": "success", "message": "Notification received"})
        );
    }
}

#[actix_web::test]
async fn test_receiver_only_accepts_post() {
    let app = test::init_service(App::new().configure(configure_receiver)).await;

    let req = test::TestRequest::get().uri("/notifications").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_client_error());
}
