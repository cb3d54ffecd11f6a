//! Builds the resolved message and its MessageCard wire form.

use serde::Serialize;

use crate::{colors, error::SinkError, request::ContentSource};

const CARD_TYPE: &str = "MessageCard";
const CARD_CONTEXT: &str = "https://schema.org/extensions";

/// Validated, precedence-resolved message ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMessage {
    pub title: String,
    pub body_text: String,
    /// Hex value for known color names, otherwise the raw input. Empty means no color.
    pub color_value: String,
    pub destination_url: String,
}

/// Office 365 connector card posted to the webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageCard {
    #[serde(rename = "@type")]
    pub card_type: &'static str,

    #[serde(rename = "@context")]
    pub context: &'static str,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub summary: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,

    pub text: String,

    #[serde(rename = "themeColor", skip_serializing_if = "String::is_empty")]
    pub theme_color: String,
}

impl From<&ResolvedMessage> for MessageCard {
    fn from(message: &ResolvedMessage) -> Self {
        Self {
            card_type: CARD_TYPE,
            context: CARD_CONTEXT,
            summary: message.title.clone(),
            title: message.title.clone(),
            text: message.body_text.clone(),
            theme_color: message.color_value.clone(),
        }
    }
}

/// Produces the body text, reading the file when the content comes from one.
pub async fn load_body(content: &ContentSource) -> Result<String, SinkError> {
    match content {
        ContentSource::Inline(text) => Ok(text.clone()),
        ContentSource::File(path) => {
            let bytes = tokio::fs::read(path)
                .await
                .map_err(|source| SinkError::FileRead {
                    path: path.clone(),
                    source,
                })?;
            tracing::debug!(path = %path.display(), bytes = bytes.len(), "loaded body from file");
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
    }
}

/// Assembles the message, substituting known color names with their hex value.
pub fn build(
    title: &str,
    body_text: String,
    color_input: &str,
    destination_url: &str,
) -> ResolvedMessage {
    let color_value = colors::resolve(color_input);
    if color_value != color_input {
        tracing::debug!(color = color_input, hex = %color_value, "resolved color name");
    }

    ResolvedMessage {
        title: title.to_string(),
        body_text,
        color_value,
        destination_url: destination_url.to_string(),
    }
}
