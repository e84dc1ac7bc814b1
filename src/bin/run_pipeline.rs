use anyhow::Result;
use health_notifier::application::message_generator::MessageGenerator;
use health_notifier::application::notifier::Notifier;
use health_notifier::application::pipeline::PipelineRunner;
use health_notifier::data::open_store;
use health_notifier::infrastructure::config::PipelineConfig;
use health_notifier::infrastructure::logging::init_logging;
use health_notifier::infrastructure::openai::OpenAiClient;
use health_notifier::infrastructure::webhook::WebhookClient;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let config = PipelineConfig::from_env()?;
    let users = open_store(&config.store).await?;
    let generator = MessageGenerator::new(Arc::new(OpenAiClient::new(config.generator)?));
    let notifier = Notifier::new(Arc::new(WebhookClient::new(config.notifier)?));

    PipelineRunner::new(users, generator, notifier).run().await?;
    Ok(())
}
