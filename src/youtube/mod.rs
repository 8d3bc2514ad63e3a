//! Harvesting a YouTube channel's uploads into a local JSON resource file.
//!
//! Used by the `harvest_youtube` binary; shares nothing with the bot at runtime.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

pub mod client;
pub mod store;

pub use client::YoutubeClient;
pub use store::ResourceStore;

pub const DEFAULT_RESOURCES_PATH: &str = "resources_youtube.json";

static HANDLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@([\w\-]+)").expect("valid handle regex"));
static LEGACY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:/c/|/user/)([\w\-]+)").expect("valid legacy url regex"));

#[derive(Debug, thiserror::Error)]
pub enum YoutubeError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("YouTube API error: {status} - {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("Could not resolve channel ID. Please enter a valid YouTube channel URL, handle, or ID.")]
    Unresolved,
    #[error("channel {0} has no uploads playlist")]
    NoUploads(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("{0} does not contain a JSON object")]
    InvalidStore(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRecord {
    pub title: String,
    pub url: String,
    pub description: String,
}

impl VideoRecord {
    pub fn new(title: String, video_id: &str, description: String) -> Self {
        Self {
            title,
            url: format!("https://www.youtube.com/watch?v={}", video_id),
            description,
        }
    }
}

/// How the user identified the channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelInput {
    /// Already a canonical `UC…` id.
    pub channel_id: Option<String>,
    /// `@handle`, looked up through channel search.
    pub handle: Option<String>,
    /// `/c/name` or `/user/name`, looked up by legacy username.
    pub username: Option<String>,
}

impl ChannelInput {
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        if input.starts_with("UC") {
            return Self {
                channel_id: Some(input.to_string()),
                handle: None,
                username: None,
            };
        }

        let capture = |re: &Regex| re.captures(input).map(|c| c[1].to_string());
        Self {
            channel_id: None,
            handle: capture(&HANDLE_RE),
            username: capture(&LEGACY_RE),
        }
    }
}
