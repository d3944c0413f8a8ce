//! Versecraft: artist lyric style profiling and style-conditioned
//! song generation.
//!
//! The crate fetches an artist's lyrics from Genius, distills them into
//! a [`types::StyleProfile`] (vocabulary, sentiment, rhyme and structure
//! signals), and uses that profile to condition a Gemini prompt for
//! original or rewritten songs. Fetched songs, built profiles and
//! generated output are all persisted under the configured data
//! directory.

pub mod analysis;
pub mod app;
pub mod cache;
pub mod config;
pub mod constants;
pub mod error;
pub mod gemini;
pub mod genius;
pub mod types;

pub use app::App;
pub use config::Config;
pub use error::{Error, Result};
