use crate::domain::error::NotifyError;
use crate::domain::notification::NotificationPayload;
use crate::domain::repository::NotificationSender;
use crate::infrastructure::config::NotifierConfig;
use anyhow::Result;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};

/// Posts notification payloads to the configured endpoint.
pub struct WebhookClient {
    endpoint: String,
    client: Client,
}

impl WebhookClient {
    pub fn new(config: NotifierConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            endpoint: config.endpoint,
            client,
        })
    }
}

#[async_trait]
impl NotificationSender for WebhookClient {
    async fn send(&self, payload: &NotificationPayload) -> Result<(), NotifyError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(payload)
            .send()
            .await
            .map_err(|e| NotifyError::Transport(e.to_string()))?;

        // Only a plain 200 counts as delivered.
        match response.status() {
            StatusCode::OK => Ok(()),
            status => Err(NotifyError::UnexpectedStatus(status.as_u16())),
        }
    }
}
