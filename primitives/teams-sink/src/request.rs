//! Message request assembled from flags and environment, plus the
//! precedence rules that pick a destination and a content source.

use std::path::PathBuf;

use crate::cli::Args;

/// Environment variable holding the default webhook URL.
pub const WEBHOOK_URL_ENV: &str = "TURMS_URL";

/// Raw inputs for one invocation.
///
/// Built once from parsed flags and the environment, then only read.
/// Empty strings mean "not supplied".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageRequest {
    pub body_text: String,
    pub body_file_path: String,
    pub color_input: String,
    pub title: String,
    pub webhook_url: String,
    pub webhook_url_override: String,
}

impl MessageRequest {
    /// Takes the parsed flags and the environment-sourced default URL.
    pub fn from_args(args: Args) -> Self {
        Self {
            body_text: args.body.unwrap_or_default(),
            body_file_path: args.body_from_file.unwrap_or_default(),
            color_input: args.color.unwrap_or_default(),
            title: args.title.unwrap_or_default(),
            webhook_url: args.env_url.unwrap_or_default(),
            webhook_url_override: args.url.unwrap_or_default(),
        }
    }

    pub fn destination(&self) -> &str {
        resolve_url(&self.webhook_url, &self.webhook_url_override)
    }

    pub fn content_source(&self) -> ContentSource {
        resolve_content_source(&self.body_text, &self.body_file_path)
    }
}

/// Where the message body comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    Inline(String),
    File(PathBuf),
}

impl ContentSource {
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Inline(text) => text.is_empty(),
            Self::File(path) => path.as_os_str().is_empty(),
        }
    }
}

/// Picks the override URL when it is non-empty, otherwise the environment URL.
pub fn resolve_url<'a>(env_url: &'a str, override_url: &'a str) -> &'a str {
    if override_url.is_empty() {
        env_url
    } else {
        override_url
    }
}

/// A non-empty file path always beats inline text. The file is not touched here.
pub fn resolve_content_source(inline_text: &str, file_path: &str) -> ContentSource {
    if file_path.is_empty() {
        ContentSource::Inline(inline_text.to_string())
    } else {
        ContentSource::File(PathBuf::from(file_path))
    }
}
