//! Line and token segmentation.
//!
//! The leaf of the analysis pipeline: splits raw lyric text into trimmed
//! non-empty lines and into lower-cased alphabetic token streams. Pure
//! functions, deterministic for a given stop-word set.

use crate::analysis::lexicon::Lexicon;

/// Ordered trimmed non-empty lines of a text block.
#[must_use]
pub fn lines(text: &str) -> Vec<&str> {
    text.lines().map(str::trim).filter(|l| !l.is_empty()).collect()
}

/// Lower-cased alphabetic tokens of a text, stop words included.
///
/// Non-alphabetic characters act as separators, so punctuation and
/// numerals are dropped entirely rather than replaced.
#[must_use]
pub fn alpha_tokens(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphabetic())
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Lower-cased alphabetic tokens with stop words removed.
#[must_use]
pub fn tokenize(text: &str, lexicon: &Lexicon) -> Vec<String> {
    alpha_tokens(text)
        .into_iter()
        .filter(|t| !lexicon.is_stop_word(t))
        .collect()
}
