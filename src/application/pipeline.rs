use crate::application::message_generator::MessageGenerator;
use crate::application::notifier::Notifier;
use crate::domain::notification::Category;
use crate::domain::repository::UserRepository;
use anyhow::Result;
use std::sync::Arc;
use tracing::{info, instrument, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PipelineSummary {
    pub users_processed: usize,
}

/// One batch run over every stored user: draw a category, generate a
/// message, deliver it. Users are handled strictly one after another.
pub struct PipelineRunner {
    users: Arc<dyn UserRepository>,
    generator: MessageGenerator,
    notifier: Notifier,
    seed: Option<u64>,
}

impl PipelineRunner {
    pub fn new(
        users: Arc<dyn UserRepository>,
        generator: MessageGenerator,
        notifier: Notifier,
    ) -> Self {
        Self {
            users,
            generator,
            notifier,
            seed: None,
        }
    }

    /// Fixes the category draw sequence.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Only a failure to read the user store is returned; per-user
    /// generation and delivery failures are absorbed by the components.
    #[instrument(skip(self))]
    pub async fn run(&self) -> Result<PipelineSummary> {
        info!("Starting daily notification pipeline...");

        let users = self.users.list_users().await?;
        if users.is_empty() {
            warn!("No users found in the database.");
            return Ok(PipelineSummary::default());
        }

        let mut rng = match self.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };

        for user in &users {
            let category = Category::pick(&mut rng);
            let message = self.generator.generate(category, user).await;
            self.notifier.notify(user, &message, category).await;
        }

        let summary = PipelineSummary {
            users_processed: users.len(),
        };
        info!(
            users_processed = summary.users_processed,
            "Daily notification pipeline completed successfully."
        );
        Ok(summary)
    }
}
