//! Client for the Genius API and song page lyric extraction.
//!
//! Song metadata comes from the JSON API; lyric text is extracted from
//! the song page HTML, since the API does not serve lyrics directly.
//! Requests run sequentially with a fixed delay between song pages.

use std::sync::LazyLock;
use std::time::Duration as StdDuration;

use async_trait::async_trait;
use regex::Regex;
use reqwest::Client;
use serde_json::Value;

use crate::config::Config;
use crate::constants::fetch;
use crate::error::{Error, Result};
use crate::genius::{clean, LyricsProvider};
use crate::types::Song;

const BASE_URL: &str = "https://api.genius.com";

/// Regex matching the lyric container blocks of a Genius song page.
#[allow(clippy::expect_used)]
static RE_CONTAINER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<div[^>]*data-lyrics-container="true"[^>]*>(.*?)</div>"#)
        .expect("valid regex: RE_CONTAINER")
});

/// Regex matching `<br>` variants.
#[allow(clippy::expect_used)]
static RE_BR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<br\s*/?>").expect("valid regex: RE_BR")
});

/// Regex matching any remaining HTML tag.
#[allow(clippy::expect_used)]
static RE_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<[^>]+>").expect("valid regex: RE_TAG")
});

/// Client for the Genius lyrics service.
#[derive(Clone)]
pub struct GeniusClient {
    token: String,
    client: Client,
}

impl GeniusClient {
    /// Create a new Genius client from config
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            token: config.genius_token.clone(),
            client: Client::builder()
                .timeout(StdDuration::from_secs(30))
                .build()
                .unwrap_or_default(),
        }
    }

    /// Check if credentials are configured
    fn is_configured(&self) -> bool {
        !self.token.is_empty()
    }

    /// Make an authenticated GET request to the Genius API
    async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<Value> {
        let url = format!("{BASE_URL}{path}");
        let resp = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .query(query)
            .send()
            .await
            .map_err(|e| Error::Network(format!("Request to {path} failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::provider_status(
                format!("Request to {path} returned {status}"),
                status.as_u16(),
            ));
        }

        resp.json()
            .await
            .map_err(|e| Error::parse(path.to_string(), format!("Invalid JSON: {e}")))
    }

    /// Resolve an artist name to its Genius artist id and canonical name
    async fn find_artist(&self, artist: &str) -> Result<(u64, String)> {
        let json = self.get("/search", &[("q", artist)]).await?;
        let hits = json["response"]["hits"].as_array().map(Vec::as_slice).unwrap_or(&[]);

        for hit in hits {
            let primary = &hit["result"]["primary_artist"];
            let Some(name) = primary["name"].as_str() else {
                continue;
            };
            if name.eq_ignore_ascii_case(artist) {
                if let Some(id) = primary["id"].as_u64() {
                    return Ok((id, name.to_string()));
                }
            }
        }

        Err(Error::artist_not_found(artist))
    }

    /// List up to `max_songs` (title, url) pairs for an artist, by popularity
    async fn list_songs(&self, artist_id: u64, max_songs: usize) -> Result<Vec<(String, String)>> {
        let per_page = fetch::SONGS_PER_PAGE.to_string();
        let mut entries: Vec<(String, String)> = Vec::new();
        let mut page = 1u64;

        loop {
            let page_str = page.to_string();
            let path = format!("/artists/{artist_id}/songs");
            let json = self
                .get(&path, &[
                    ("sort", "popularity"),
                    ("per_page", &per_page),
                    ("page", &page_str),
                ])
                .await?;

            let songs = json["response"]["songs"].as_array().map(Vec::as_slice).unwrap_or(&[]);
            for song in songs {
                if entries.len() >= max_songs {
                    break;
                }
                let Some(title) = song["title"].as_str() else {
                    continue;
                };
                // Only songs where this artist is primary, skipping
                // non-studio versions
                if song["primary_artist"]["id"].as_u64() != Some(artist_id) {
                    continue;
                }
                if is_excluded_title(title) {
                    continue;
                }
                let Some(url) = song["url"].as_str() else {
                    continue;
                };
                entries.push((title.to_string(), url.to_string()));
            }

            if entries.len() >= max_songs {
                break;
            }
            let Some(next) = json["response"]["next_page"].as_u64() else {
                break;
            };
            page = next;
        }

        Ok(entries)
    }

    /// Fetch a song page and extract its lyric text
    async fn fetch_lyrics(&self, url: &str) -> Result<String> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Network(format!("Request to {url} failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::provider_status(
                format!("Request to {url} returned {status}"),
                status.as_u16(),
            ));
        }

        let html = resp
            .text()
            .await
            .map_err(|e| Error::Network(format!("Reading {url} failed: {e}")))?;

        extract_lyrics(&html)
            .ok_or_else(|| Error::parse(url.to_string(), "No lyric containers in page"))
    }
}

#[async_trait]
impl LyricsProvider for GeniusClient {
    async fn fetch_artist_songs(&self, artist: &str, max_songs: usize) -> Result<Vec<Song>> {
        if !self.is_configured() {
            return Err(Error::config(
                "Genius client not configured",
                "Set the GENIUS_ACCESS_TOKEN environment variable",
            ));
        }

        let (artist_id, canonical_name) = self.find_artist(artist).await?;
        let entries = self.list_songs(artist_id, max_songs).await?;
        tracing::info!("Found {} candidate songs for {canonical_name}", entries.len());

        let mut songs = Vec::new();
        for (title, url) in entries {
            // One outstanding request at a time, spaced out
            tokio::time::sleep(StdDuration::from_millis(fetch::REQUEST_DELAY_MS)).await;

            let lyrics = match self.fetch_lyrics(&url).await {
                Ok(lyrics) => lyrics,
                Err(e) => {
                    tracing::warn!("Skipping {title}: {e}");
                    continue;
                }
            };

            let raw = clean::clean_lyrics(&lyrics);
            let cleaned = clean::collapse_blank_lines(&raw);
            if cleaned.len() < fetch::MIN_LYRICS_LENGTH {
                tracing::debug!("Skipping {title}: lyrics too short");
                continue;
            }

            songs.push(Song::new(title, canonical_name.clone(), raw, cleaned));
        }

        tracing::info!("Fetched {} songs for {canonical_name}", songs.len());
        Ok(songs)
    }

    async fn fetch_song(&self, artist: &str, title: &str) -> Result<Song> {
        if !self.is_configured() {
            return Err(Error::config(
                "Genius client not configured",
                "Set the GENIUS_ACCESS_TOKEN environment variable",
            ));
        }

        let query = format!("{title} {artist}");
        let json = self.get("/search", &[("q", &query)]).await?;
        let hits = json["response"]["hits"].as_array().map(Vec::as_slice).unwrap_or(&[]);

        let hit = hits
            .iter()
            .find(|hit| {
                hit["result"]["primary_artist"]["name"]
                    .as_str()
                    .is_some_and(|name| name.eq_ignore_ascii_case(artist))
            })
            .ok_or_else(|| Error::song_not_found(artist, title))?;

        let result = &hit["result"];
        let found_title = result["title"].as_str().unwrap_or(title).to_string();
        let url = result["url"]
            .as_str()
            .ok_or_else(|| Error::song_not_found(artist, title))?;

        let lyrics = self.fetch_lyrics(url).await?;
        let raw = clean::clean_lyrics(&lyrics);
        let cleaned = clean::collapse_blank_lines(&raw);

        Ok(Song::new(found_title, artist, raw, cleaned))
    }
}

/// Whether a song title marks a non-studio version to skip.
fn is_excluded_title(title: &str) -> bool {
    fetch::EXCLUDED_TITLE_TERMS.iter().any(|term| title.contains(term))
}

/// Extract lyric text from a Genius song page.
///
/// Concatenates the `data-lyrics-container` blocks with `<br>` turned
/// into newlines and remaining tags stripped.
fn extract_lyrics(html: &str) -> Option<String> {
    let mut blocks: Vec<String> = Vec::new();

    for caps in RE_CONTAINER.captures_iter(html) {
        if let Some(inner) = caps.get(1) {
            let block = RE_BR.replace_all(inner.as_str(), "\n");
            let block = RE_TAG.replace_all(&block, "");
            blocks.push(decode_entities(&block));
        }
    }

    let text = blocks.join("\n\n");
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Decode the handful of HTML entities that show up in lyric markup.
fn decode_entities(text: &str) -> String {
    text.replace("&amp;", "&")
        .replace("&quot;", "\"")
        .replace("&#x27;", "'")
        .replace("&#39;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
}
