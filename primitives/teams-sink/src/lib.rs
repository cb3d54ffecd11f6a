//! Teams Sink - Microsoft Teams Incoming Webhook Poster
//!
//! Composes one message card from command-line flags and the environment
//! and posts it to a Teams incoming webhook. Exactly one delivery attempt
//! is made per invocation.
//!
//! # Usage
//!
//! ```bash
//! # Webhook URL from the environment
//! export TURMS_URL=https://contoso.webhook.office.com/webhookb2/...
//! teams-sink --body "Build finished"
//!
//! # Markdown body from a file, with title and theme color
//! teams-sink -f report.md -t "Nightly report" -c seagreen
//!
//! # Explicit webhook URL and raw hex color
//! teams-sink -b "Deploy failed" -c "#d9534f" -u https://contoso.webhook.office.com/webhookb2/...
//! ```

pub mod cli;
pub mod colors;
pub mod dispatch;
pub mod error;
pub mod payload;
pub mod pipeline;
pub mod request;
pub mod validate;

pub use cli::Args;
pub use dispatch::WebhookClient;
pub use error::{DeliveryError, SinkError};
pub use payload::{MessageCard, ResolvedMessage};
pub use pipeline::{prepare, run};
pub use request::{ContentSource, MessageRequest, WEBHOOK_URL_ENV};
pub use validate::{UrlValidator, WebhookUrlValidator};
