//! Resolve, validate, load, build, dispatch.

use std::io::Write;

use crate::{
    dispatch::{WebhookClient, host_of},
    error::SinkError,
    payload::{self, ResolvedMessage},
    request::MessageRequest,
    validate::{self, UrlValidator},
};

/// Runs every stage up to (not including) delivery.
///
/// Validation finishes before the body file is read.
pub async fn prepare(
    request: &MessageRequest,
    validator: &impl UrlValidator,
) -> Result<ResolvedMessage, SinkError> {
    let content = request.content_source();
    let destination = request.destination();

    validate::validate(&content, destination, validator)?;
    tracing::debug!(?content, host = %host_of(destination), "request validated");

    let body_text = payload::load_body(&content).await?;

    Ok(payload::build(
        &request.title,
        body_text,
        &request.color_input,
        destination,
    ))
}

/// Sends the request as one message. Returns what was delivered.
pub async fn run(
    request: &MessageRequest,
    validator: &impl UrlValidator,
    client: &WebhookClient,
) -> Result<ResolvedMessage, SinkError> {
    let message = prepare(request, validator).await?;
    client.dispatch(&message).await?;
    Ok(message)
}

/// Prints the outcome of [`run`] and returns the process exit code.
pub fn report(
    result: &Result<ResolvedMessage, SinkError>,
    out: &mut impl Write,
    err: &mut impl Write,
) -> i32 {
    match result {
        Ok(_) => {
            let _ = writeln!(out, "📬  Message Sent!");
            0
        }
        Err(e) => {
            let _ = writeln!(err, "❌  {e}");
            if let Some(hint) = e.hint() {
                let _ = writeln!(err, "{hint}");
            }
            1
        }
    }
}
