use crate::domain::error::NotifyError;
use crate::domain::notification::{Category, NotificationPayload};
use crate::domain::repository::NotificationSender;
use crate::domain::user::User;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

/// Delivers one message per call. Outcomes are logged, never returned.
#[derive(Clone)]
pub struct Notifier {
    sender: Arc<dyn NotificationSender>,
}

impl Notifier {
    pub fn new(sender: Arc<dyn NotificationSender>) -> Self {
        Self { sender }
    }

    #[instrument(skip(self, user, message, category), fields(user_id = %user.user_id, category = %category))]
    pub async fn notify(&self, user: &User, message: &str, category: Category) {
        let payload = NotificationPayload::new(user, message);
        match self.sender.send(&payload).await {
            Ok(()) => info!(
                name = %user.name,
                "Notification sent successfully to {} in {} category",
                user.name,
                category
            ),
            Err(NotifyError::UnexpectedStatus(status)) => warn!(
                name = %user.name,
                status,
                "Failed to send notification to {}: {}",
                user.name,
                status
            ),
            Err(NotifyError::Transport(detail)) => error!(
                name = %user.name,
                error = %detail,
                "Error sending notification to {}",
                user.name
            ),
        }
    }
}
