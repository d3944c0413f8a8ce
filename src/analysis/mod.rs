//! Style-profiling pipeline.
//!
//! Tokenization, rhyme-key clustering, vocabulary statistics, sentiment and
//! theme scoring, structural-pattern detection, and the profile builder that
//! assembles them into one serializable [`crate::types::StyleProfile`].

pub mod lexicon;
pub mod profile;
pub mod rhyme;
pub mod sentiment;
pub mod structure;
pub mod text;
pub mod vocabulary;

pub use lexicon::{Lexicon, LexiconScorer};
pub use profile::ProfileBuilder;
pub use sentiment::SentimentScorer;
