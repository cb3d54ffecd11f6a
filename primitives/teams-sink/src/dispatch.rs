//! Single-attempt HTTPS delivery of a message card.

use std::time::Duration;

use reqwest::Client;

use crate::{
    error::DeliveryError,
    payload::{MessageCard, ResolvedMessage},
    validate::is_connector_url,
};

/// Request timeout applied to the one delivery attempt.
pub const SEND_TIMEOUT: Duration = Duration::from_secs(5);

/// Body Office 365 connectors return on success.
const CONNECTOR_ACK: &str = "1";

/// Posts message cards to webhook URLs.
///
/// URLs are sent as given; validation happens before dispatch.
#[derive(Debug, Clone)]
pub struct WebhookClient {
    client: Client,
}

impl WebhookClient {
    pub fn new() -> Result<Self, DeliveryError> {
        let client = Client::builder()
            .timeout(SEND_TIMEOUT)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    /// Wraps an existing client, keeping its timeout and headers.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Sends `card` to `url` once. No retries.
    ///
    /// A 2xx only counts when its body is empty or the connector ack `"1"`.
    /// Office 365 connector URLs must answer with the ack itself.
    pub async fn deliver(&self, url: &str, card: &MessageCard) -> Result<(), DeliveryError> {
        let response = self.client.post(url).json(card).send().await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(DeliveryError::Status { status, body: text });
        }

        let trimmed = text.trim();
        let acknowledged = if is_connector_url(url) {
            trimmed == CONNECTOR_ACK
        } else {
            trimmed.is_empty() || trimmed == CONNECTOR_ACK
        };

        if !acknowledged {
            return Err(DeliveryError::UnexpectedResponse {
                status,
                body: trimmed.to_string(),
            });
        }

        Ok(())
    }

    /// Delivers a resolved message to its destination.
    pub async fn dispatch(&self, message: &ResolvedMessage) -> Result<(), DeliveryError> {
        let card = MessageCard::from(message);
        self.deliver(&message.destination_url, &card).await?;
        tracing::info!(host = %host_of(&message.destination_url), "message delivered");
        Ok(())
    }
}

/// Host portion of a URL for logging; webhook paths embed secrets.
pub(crate) fn host_of(url: &str) -> String {
    reqwest::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_else(|| "<unparsed>".to_string())
}
