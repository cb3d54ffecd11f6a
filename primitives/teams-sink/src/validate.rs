//! Pre-flight checks run before any file or network access.

use regex::Regex;
use reqwest::Url;

use crate::{error::SinkError, request::ContentSource};

/// Office 365 connector webhooks.
const CONNECTOR_PATTERN: &str = r"^https://(?:.*\.webhook|outlook)\.office(?:365)?\.com";

/// Power Automate workflow webhooks.
const WORKFLOW_PATTERN: &str =
    r"^https://(?:.*)(?:\.azure-api|logic\.azure|api\.powerplatform)\.(?:com|net)";

/// Syntactic check of a webhook URL.
pub trait UrlValidator {
    /// Returns a human-readable reason when `url` is not acceptable.
    fn validate(&self, url: &str) -> Result<(), String>;
}

/// Accepts https URLs that look like Teams incoming webhooks.
#[derive(Debug, Clone)]
pub struct WebhookUrlValidator {
    patterns: Vec<Regex>,
}

impl WebhookUrlValidator {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            patterns: vec![Regex::new(CONNECTOR_PATTERN)?, Regex::new(WORKFLOW_PATTERN)?],
        })
    }

    /// Accepts URLs matching an additional pattern.
    pub fn with_pattern(mut self, pattern: &str) -> Result<Self, regex::Error> {
        self.patterns.push(Regex::new(pattern)?);
        Ok(self)
    }
}

impl UrlValidator for WebhookUrlValidator {
    fn validate(&self, url: &str) -> Result<(), String> {
        let parsed =
            Url::parse(url).map_err(|e| format!("unable to parse webhook url {url:?}: {e}"))?;

        if parsed.scheme() != "https" {
            return Err(format!(
                "webhook url scheme must be https, got {:?}",
                parsed.scheme()
            ));
        }

        if parsed.host_str().is_none_or(str::is_empty) {
            return Err("webhook url has no host".to_string());
        }

        if self.patterns.iter().any(|p| p.is_match(url)) {
            Ok(())
        } else {
            Err("webhook url does not match any known Teams webhook pattern".to_string())
        }
    }
}

/// Whether `url` addresses a legacy Office 365 connector, which acks with `"1"`.
pub fn is_connector_url(url: &str) -> bool {
    Regex::new(CONNECTOR_PATTERN).is_ok_and(|re| re.is_match(url))
}

/// Checks content presence, then URL presence, then URL shape.
///
/// Stops at the first failure.
pub fn validate(
    content: &ContentSource,
    url: &str,
    validator: &impl UrlValidator,
) -> Result<(), SinkError> {
    if content.is_empty() {
        return Err(SinkError::MissingBody);
    }

    if url.is_empty() {
        return Err(SinkError::MissingWebhookUrl);
    }

    validator
        .validate(url)
        .map_err(|detail| SinkError::InvalidWebhookUrl { detail })
}
