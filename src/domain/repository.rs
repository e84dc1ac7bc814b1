use crate::domain::error::{GenerationError, NotifyError};
use crate::domain::notification::NotificationPayload;
use crate::domain::user::User;
use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All users in store iteration order.
    async fn list_users(&self) -> Result<Vec<User>>;
    async fn find_user_by_id(&self, user_id: &str) -> Result<Option<User>>;
    /// Case-insensitive substring match on `name`.
    async fn find_users_by_name(&self, name: &str) -> Result<Vec<User>>;
}

/// A single chat message sent to the text generation service.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptMessage {
    pub role: &'static str,
    pub content: String,
}

#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn complete(&self, messages: &[PromptMessage]) -> Result<String, GenerationError>;
}

#[async_trait]
pub trait NotificationSender: Send + Sync {
    async fn send(&self, payload: &NotificationPayload) -> Result<(), NotifyError>;
}
