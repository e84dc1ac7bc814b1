use actix_web::{App, HttpServer};
use health_notifier::infrastructure::config::ReceiverConfig;
use health_notifier::infrastructure::logging::init_logging;
use health_notifier::presentation::middleware::RequestLogger;
use health_notifier::presentation::receiver::configure_receiver;
use tracing::info;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    init_logging();

    let config = ReceiverConfig::from_env();
    let server = HttpServer::new(|| {
        App::new()
            .wrap(RequestLogger)
            .configure(configure_receiver)
    })
    .bind(config.bind_addr.as_str())?;

    info!(address = %config.bind_addr, "Mock notification receiver listening on POST /notifications");
    server.run().await
}
