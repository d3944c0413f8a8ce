//! Genius lyrics provider.
//!
//! Fetching is sequential with a fixed inter-request delay; the core
//! never retries, the caller decides what a failure means.

mod api;
mod clean;

pub use api::GeniusClient;
pub use clean::{clean_lyrics, collapse_blank_lines};

use async_trait::async_trait;

use crate::error::Result;
use crate::types::Song;

/// External source of song lyrics.
///
/// Both operations fail with [`crate::error::Error::NotFound`] when the
/// artist or song is absent upstream.
#[async_trait]
pub trait LyricsProvider {
    /// Fetch up to `max_songs` songs for an artist, in provider order.
    async fn fetch_artist_songs(&self, artist: &str, max_songs: usize) -> Result<Vec<Song>>;

    /// Fetch a single song by artist and title.
    async fn fetch_song(&self, artist: &str, title: &str) -> Result<Song>;
}
