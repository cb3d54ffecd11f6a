//! Command-line surface.

use clap::Parser;

use crate::request::WEBHOOK_URL_ENV;

const LONG_ABOUT: &str = "\
Send messages to Teams channels via incoming webhooks.

For information on how to configure an incoming webhook in Teams, see
https://learn.microsoft.com/en-us/microsoftteams/platform/webhooks-and-connectors/how-to/add-incoming-webhook

To configure the webhook url, export the following environment variable:
export TURMS_URL=https://some-tenant.webhook.office.com/webhookb2/some-id/IncomingWebhook/some-other-id/yet-another-id";

/// Teams incoming webhook poster.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "teams-sink", version)]
#[command(about = "Send messages to Teams channels")]
#[command(long_about = LONG_ABOUT)]
pub struct Args {
    /// Text body to send. Required if --body-from-file is not set.
    #[arg(short, long)]
    pub body: Option<String>,

    /// Path to a markdown file to send as body (takes precedence over --body).
    #[arg(short = 'f', long)]
    pub body_from_file: Option<String>,

    /// Theme color of the message (web color names or hex codes).
    #[arg(short, long)]
    pub color: Option<String>,

    /// Title to display in the message.
    #[arg(short, long)]
    pub title: Option<String>,

    /// Webhook URL (overrides $TURMS_URL).
    #[arg(short, long)]
    pub url: Option<String>,

    /// Default webhook URL, normally taken from the environment.
    #[arg(long = "env-url", env = WEBHOOK_URL_ENV, hide = true)]
    pub env_url: Option<String>,

    /// Log pipeline decisions to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}
