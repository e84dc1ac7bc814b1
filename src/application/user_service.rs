use crate::domain::error::DomainError;
use crate::domain::repository::UserRepository;
use crate::domain::user::{User, UserLookup, UserQuery};
use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_users(&self) -> Result<Vec<User>> {
        self.repository.list_users().await
    }

    /// `id` takes precedence over `name`; an exact id miss is an error,
    /// a name search may come back empty.
    #[instrument(skip(self))]
    pub async fn find_users(&self, query: &UserQuery) -> Result<UserLookup> {
        if let Some(id) = query.id() {
            debug!(user_id = id, "Looking up user by id");
            return self
                .repository
                .find_user_by_id(id)
                .await?
                .map(UserLookup::One)
                .ok_or_else(|| DomainError::UserNotFound.into());
        }

        if let Some(name) = query.name() {
            debug!(name, "Searching users by name");
            let users = self.repository.find_users_by_name(name).await?;
            return Ok(UserLookup::Many(users));
        }

        Err(DomainError::MissingQuery.into())
    }
}
