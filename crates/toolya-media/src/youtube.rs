//! YouTube thumbnail URL derivation and download.

use crate::error::{MediaError, Result};
use regex::Regex;
use std::io::Read;
use std::sync::OnceLock;

static VIDEO_ID: OnceLock<Regex> = OnceLock::new();

fn video_id_regex() -> &'static Regex {
    VIDEO_ID.get_or_init(|| {
        Regex::new(r"(?:youtube\.com/.*v=|youtu\.be/)([A-Za-z0-9_-]{11})").unwrap()
    })
}

/// Extract the 11-character video id from a watch or short-link URL.
pub fn extract_video_id(url: &str) -> Result<&str> {
    video_id_regex()
        .captures(url)
        .and_then(|captures| captures.get(1))
        .map(|id| id.as_str())
        .ok_or_else(|| MediaError::InvalidInput("no YouTube video id in URL".to_string()))
}

/// The max-resolution thumbnail URL for a video URL.
pub fn thumbnail_url(url: &str) -> Result<String> {
    let id = extract_video_id(url)?;
    Ok(format!("https://img.youtube.com/vi/{id}/maxresdefault.jpg"))
}

/// Download the thumbnail for a video URL.
///
/// Network failures are surfaced to the caller and never retried.
pub async fn fetch_thumbnail(video_url: &str) -> Result<Vec<u8>> {
    let url = thumbnail_url(video_url)?;
    tokio::task::spawn_blocking(move || fetch_bytes(&url)).await?
}

fn fetch_bytes(url: &str) -> Result<Vec<u8>> {
    let response = ureq::get(url)
        .call()
        .map_err(|e| MediaError::Network(e.to_string()))?;
    let mut bytes = Vec::new();
    response.into_reader().read_to_end(&mut bytes)?;
    Ok(bytes)
}
