use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("User not found")]
    UserNotFound,
    #[error("Please provide 'id' or 'name' as query parameters")]
    MissingQuery,
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Failures of the chat-completion call. Never leave the message generator.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Malformed(String),
    #[error("empty completion")]
    EmptyResponse,
}

/// Failures of the webhook POST. Never leave the notifier.
#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("unexpected status {0}")]
    UnexpectedStatus(u16),
    #[error("transport error: {0}")]
    Transport(String),
}
