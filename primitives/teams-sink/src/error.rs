//! Failure taxonomy for a single send.
//!
//! Every variant is terminal: the binary prints it and exits non-zero.

use std::path::PathBuf;

use crate::request::WEBHOOK_URL_ENV;

/// Reasons a message could not be sent.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// Neither `--body` nor `--body-from-file` carried anything.
    #[error("No body provided")]
    MissingBody,

    /// Neither the environment nor `--url` supplied a webhook URL.
    #[error("No webhook url provided")]
    MissingWebhookUrl,

    /// The selected webhook URL was rejected by the URL validator.
    #[error("Invalid webhook url: {detail}")]
    InvalidWebhookUrl { detail: String },

    /// The body file could not be read.
    #[error("Failed to read body from {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The webhook did not accept the message.
    #[error("Failed to deliver message: {source}")]
    Delivery {
        #[from]
        source: DeliveryError,
    },
}

impl SinkError {
    /// Remediation line printed under the diagnostic, when one applies.
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::MissingBody => Some(
                "Either --body (-b) or --body-from-file (-f) must be supplied".to_string(),
            ),
            Self::MissingWebhookUrl => Some(format!(
                "To configure the webhook url, either export {WEBHOOK_URL_ENV} or use the --url (-u) flag"
            )),
            Self::InvalidWebhookUrl { .. } => Some(
                "Expected an incoming webhook url such as https://<tenant>.webhook.office.com/webhookb2/..."
                    .to_string(),
            ),
            Self::FileRead { .. } | Self::Delivery { .. } => None,
        }
    }
}

/// Failures raised by the HTTPS delivery client.
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("webhook responded with {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("webhook answered {status} without acknowledging the message: {body}")]
    UnexpectedResponse {
        status: reqwest::StatusCode,
        body: String,
    },
}
