pub mod memory;
pub mod postgres;

use crate::domain::repository::UserRepository;
use crate::infrastructure::config::StoreConfig;
use anyhow::Result;
use memory::InMemoryUserRepository;
use postgres::PgUserRepository;
use std::sync::Arc;
use tracing::{info, warn};

/// Opens the configured user store: PostgreSQL when `DATABASE_URL` is set,
/// otherwise an in-memory store seeded from `USERS_FILE` (or empty).
pub async fn open_store(config: &StoreConfig) -> Result<Arc<dyn UserRepository>> {
    if let Some(url) = &config.database_url {
        let repo = PgUserRepository::connect(url).await?;
        repo.run_migrations().await?;
        return Ok(Arc::new(repo));
    }

    match &config.users_file {
        Some(path) => {
            info!(path = %path.display(), "Using in-memory user store");
            Ok(Arc::new(InMemoryUserRepository::from_json_file(path)?))
        }
        None => {
            warn!("Neither DATABASE_URL nor USERS_FILE is set, user store is empty");
            Ok(Arc::new(InMemoryUserRepository::new()))
        }
    }
}
