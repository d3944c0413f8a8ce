//! Application error types.
//!
//! Provides unified error handling with actionable context for debugging.

use thiserror::Error;

/// Application result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types with specific context for actionable debugging
#[derive(Debug, Error)]
pub enum Error {
    /// IO error with path context
    #[error("IO error at {path:?}: {source}")]
    Io {
        /// The underlying IO error.
        source: std::io::Error,
        /// File path where the error occurred, if known.
        path: Option<std::path::PathBuf>,
    },

    /// Network error (connection, timeout, DNS)
    #[error("Network error: {0}")]
    Network(String),

    /// Lyrics provider API error with status context
    #[error("Lyrics provider error: {message}")]
    Provider {
        /// Human-readable error description.
        message: String,
        /// HTTP status code, if from an HTTP response.
        status: Option<u16>,
        /// Actionable suggestion for resolving the error.
        hint: Option<&'static str>,
    },

    /// Artist or song absent upstream. Surfaced to the caller, never retried.
    #[error("Not found: {artist}{}", title.as_deref().map(|t| format!(" - {t}")).unwrap_or_default())]
    NotFound {
        /// Artist that was looked up.
        artist: String,
        /// Song title, when a single song lookup failed.
        title: Option<String>,
    },

    /// Configuration error with guidance
    #[error("Configuration error: {message}. {hint}")]
    Config {
        /// Description of the configuration problem.
        message: String,
        /// Actionable guidance for fixing the issue.
        hint: &'static str,
    },

    /// Response or cache blob parsing error
    #[error("Parse error in {context}: {message}")]
    Parse {
        /// What was being parsed when the error occurred.
        context: String,
        /// Description of the parse failure.
        message: String,
    },

    /// Text generation error
    #[error("Generation failed: {0}")]
    Generation(String),

    /// Generic message error (escape hatch)
    #[error("{0}")]
    Msg(String),
}

impl Error {
    /// Create an IO error with path context
    pub fn io(source: std::io::Error, path: impl Into<Option<std::path::PathBuf>>) -> Self {
        Self::Io { source, path: path.into() }
    }

    /// Create a lyrics provider error without HTTP context
    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider {
            message: message.into(),
            status: None,
            hint: None,
        }
    }

    /// Create a lyrics provider error with HTTP status
    pub fn provider_status(message: impl Into<String>, status: u16) -> Self {
        let hint = match status {
            401 => Some("Check the GENIUS_ACCESS_TOKEN environment variable"),
            403 => Some("Your API token may lack required permissions"),
            404 => Some("The requested resource was not found"),
            429 => Some("Rate limited - wait a moment and try again"),
            500..=599 => Some("Upstream server error - try again later"),
            _ => None,
        };
        Self::Provider {
            message: message.into(),
            status: Some(status),
            hint,
        }
    }

    /// Create a not-found error for an artist lookup
    pub fn artist_not_found(artist: impl Into<String>) -> Self {
        Self::NotFound { artist: artist.into(), title: None }
    }

    /// Create a not-found error for a single song lookup
    pub fn song_not_found(artist: impl Into<String>, title: impl Into<String>) -> Self {
        Self::NotFound { artist: artist.into(), title: Some(title.into()) }
    }

    /// Create a config error with actionable hint
    pub fn config(message: impl Into<String>, hint: &'static str) -> Self {
        Self::Config { message: message.into(), hint }
    }

    /// Create a parse error with context
    pub fn parse(context: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse { context: context.into(), message: message.into() }
    }
}

// Convenience conversions
impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io { source: e, path: None }
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Self::Msg(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Self::Msg(s.to_string())
    }
}
