use actix_cors::Cors;
use actix_web::{App, HttpServer, web};
use health_notifier::application::user_service::UserService;
use health_notifier::data::open_store;
use health_notifier::infrastructure::config::ServerConfig;
use health_notifier::infrastructure::logging::init_logging;
use health_notifier::presentation::handlers::AppState;
use health_notifier::presentation::middleware::RequestLogger;
use health_notifier::presentation::routes::configure_routes;
use std::io;
use tracing::info;

#[tokio::main]
async fn main() -> io::Result<()> {
    init_logging();

    let config = ServerConfig::from_env();
    let store = open_store(&config.store)
        .await
        .map_err(|e| io::Error::other(format!("failed to open user store: {:#}", e)))?;

    let state = web::Data::new(AppState {
        users: UserService::new(store),
    });

    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET"])
            .max_age(3600);

        App::new()
            .app_data(state.clone())
            .wrap(RequestLogger)
            .wrap(cors)
            .configure(configure_routes)
    });

    let server = server.bind(config.bind_addr.as_str())?;
    info!(
        address = %config.bind_addr,
        routes = %"GET /, GET /filter/?id=<id>|name=<name>, GET /health",
        "Starting user query API"
    );
    server.run().await
}
