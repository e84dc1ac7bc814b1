//! PostgreSQL-backed user store.

use crate::domain::error::DomainError;
use crate::domain::repository::UserRepository;
use crate::domain::user::User;
use anyhow::Result;
use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use tracing::{debug, info, instrument};

const USER_COLUMNS: &str = "user_id, name, email, signup_date, age, height_cm, weight_kg, activity_level, health_goals";

#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Connects a small pool; the pipeline and API only ever read.
    #[instrument(skip(database_url))]
    pub async fn connect(database_url: &str) -> Result<Self> {
        info!("Connecting to PostgreSQL");
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(30))
            .connect(database_url)
            .await
            .map_err(|e| DomainError::Storage(format!("failed to connect: {}", e)))?;
        info!("PostgreSQL connection pool established");
        Ok(Self { pool })
    }

    #[instrument(skip(self))]
    pub async fn run_migrations(&self) -> Result<()> {
        info!("Running database migrations");
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| DomainError::Storage(format!("migration failed: {}", e)))?;
        info!("Database migrations completed");
        Ok(())
    }
}

fn storage_error(e: sqlx::Error) -> anyhow::Error {
    DomainError::Storage(e.to_string()).into()
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn list_users(&self) -> Result<Vec<User>> {
        let query = format!("SELECT {} FROM users ORDER BY id", USER_COLUMNS);
        let users = sqlx::query_as::<_, User>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error)?;
        debug!(count = users.len(), "Listed users");
        Ok(users)
    }

    #[instrument(skip(self))]
    async fn find_user_by_id(&self, user_id: &str) -> Result<Option<User>> {
        let query = format!("SELECT {} FROM users WHERE user_id = $1", USER_COLUMNS);
        sqlx::query_as::<_, User>(&query)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error)
    }

    #[instrument(skip(self))]
    async fn find_users_by_name(&self, name: &str) -> Result<Vec<User>> {
        // strpos avoids treating '%' or '_' in the input as wildcards
        let query = format!(
            "SELECT {} FROM users WHERE strpos(lower(name), lower($1)) > 0 ORDER BY id",
            USER_COLUMNS
        );
        let users = sqlx::query_as::<_, User>(&query)
            .bind(name)
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error)?;
        debug!(matches = users.len(), "Name search completed");
        Ok(users)
    }
}
