//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.

use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

use crate::constants::fetch;
use crate::error::Result;

/// Configuration for the application.
#[derive(Debug, Clone)]
pub struct Config {
    /// The application name
    app_name: String,
    /// The application version
    app_version: String,
    /// Genius API access token
    pub genius_token: String,
    /// Google Gemini API key
    pub gemini_key: String,
    /// Maximum number of songs to analyze per artist
    pub max_songs: usize,
    /// Root directory for cached songs, profiles and generated output
    pub data_dir: PathBuf,
}

impl Config {
    /// Get the application name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Get the application version.
    #[must_use]
    pub fn app_version(&self) -> &str {
        &self.app_version
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: env!("CARGO_PKG_NAME").to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            genius_token: String::new(),
            gemini_key: String::new(),
            max_songs: fetch::MAX_SONGS_PER_ARTIST,
            data_dir: default_data_dir(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    #[allow(clippy::unnecessary_wraps)] // Returns Result for forward-compatible API
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        let mut config = Self::default();

        if let Ok(token) = env::var("GENIUS_ACCESS_TOKEN") {
            config.genius_token = token;
        }

        if let Ok(key) = env::var("GEMINI_API_KEY") {
            config.gemini_key = key;
        }

        // Songs per artist can be configured via environment
        if let Ok(max) = env::var("MAX_SONGS") {
            if let Ok(max) = max.parse::<usize>() {
                config.max_songs = max;
            }
        }

        // Data directory: env var override, or platform data dir
        if let Ok(dir) = env::var("VERSECRAFT_DATA_DIR") {
            config.data_dir = PathBuf::from(shellexpand::tilde(&dir).to_string());
        }

        Ok(config)
    }

    /// Replace the data directory, chaining. Used by tests and overrides.
    #[must_use]
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Check if Genius credentials are configured
    pub const fn has_genius_token(&self) -> bool {
        !self.genius_token.is_empty()
    }

    /// Check if the Gemini API key is configured
    pub const fn has_gemini_key(&self) -> bool {
        !self.gemini_key.is_empty()
    }

    /// Directory for cached song collections
    #[must_use]
    pub fn lyrics_cache_dir(&self) -> PathBuf {
        self.data_dir.join("lyrics_cache")
    }

    /// Directory for persisted style profiles
    #[must_use]
    pub fn profiles_dir(&self) -> PathBuf {
        self.data_dir.join("style_profiles")
    }

    /// Directory for generated song output
    #[must_use]
    pub fn generated_dir(&self) -> PathBuf {
        self.data_dir.join("generated_songs")
    }
}

/// Platform data directory for the application, falling back to ./data
fn default_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(|| PathBuf::from("data"), |d| d.join("versecraft"))
}
