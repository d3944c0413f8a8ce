//! Constant word tables and the built-in lexicon sentiment scorer.
//!
//! Stop words, theme keyword buckets and the polarity word lists are
//! process-wide constant data, loaded once into an immutable [`Lexicon`]
//! value and injected into the analyzers.

use std::collections::HashSet;

use crate::analysis::sentiment::SentimentScorer;
use crate::analysis::text;
use crate::types::SentimentScores;

/// English stop words excluded from token streams.
///
/// Tokenization splits on non-alphabetic characters, so contraction
/// fragments ("don", "t", "ll") appear here as standalone entries.
const STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your",
    "yours", "yourself", "yourselves", "he", "him", "his", "himself", "she",
    "her", "hers", "herself", "it", "its", "itself", "they", "them", "their",
    "theirs", "themselves", "what", "which", "who", "whom", "this", "that",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being",
    "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an",
    "the", "and", "but", "if", "or", "because", "as", "until", "while", "of",
    "at", "by", "for", "with", "about", "against", "between", "into",
    "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again",
    "further", "then", "once", "here", "there", "when", "where", "why", "how",
    "all", "any", "both", "each", "few", "more", "most", "other", "some",
    "such", "no", "nor", "not", "only", "own", "same", "so", "than", "too",
    "very", "s", "t", "can", "will", "just", "don", "should", "now", "d",
    "ll", "m", "o", "re", "ve", "y", "ain", "aren", "couldn", "didn",
    "doesn", "hadn", "hasn", "haven", "isn", "ma", "mightn", "mustn",
    "needn", "shan", "shouldn", "wasn", "weren", "won", "wouldn",
];

/// Theme label to keyword bucket mapping, in ranking-tiebreak order.
const THEME_KEYWORDS: &[(&str, &[&str])] = &[
    ("love", &["love", "heart", "kiss", "romance", "baby", "darling", "sweet", "forever", "together"]),
    ("heartbreak", &["break", "pain", "cry", "tears", "goodbye", "alone", "hurt", "sad", "miss"]),
    ("party", &["party", "dance", "club", "night", "music", "drink", "fun", "celebrate", "tonight"]),
    ("success", &["money", "fame", "win", "success", "top", "king", "queen", "power", "rich"]),
    ("struggle", &["fight", "struggle", "hard", "difficult", "battle", "war", "challenge", "overcome"]),
    ("nature", &["sky", "sun", "moon", "stars", "rain", "ocean", "mountain", "flower", "tree"]),
    ("urban", &["city", "street", "town", "building", "lights", "traffic", "downtown", "neighborhood"]),
];

/// Positive polarity words for the built-in scorer.
const POSITIVE_WORDS: &[&str] = &[
    "love", "loved", "loving", "happy", "happiness", "joy", "joyful", "smile",
    "smiling", "laugh", "laughing", "bright", "shine", "shining", "beautiful",
    "wonderful", "amazing", "sweet", "sweetest", "good", "great", "best",
    "better", "hope", "hopeful", "dream", "dreams", "free", "freedom",
    "alive", "heaven", "paradise", "warm", "gold", "golden", "dance",
    "dancing", "celebrate", "glory", "grace", "peace", "perfect", "magic",
    "bliss", "kind", "gentle", "strong", "win", "winning", "rise", "shelter",
];

/// Negative polarity words for the built-in scorer.
const NEGATIVE_WORDS: &[&str] = &[
    "hate", "hated", "pain", "painful", "hurt", "hurting", "cry", "crying",
    "tears", "sad", "sadness", "sorrow", "lonely", "alone", "broken",
    "break", "breaking", "lost", "lose", "losing", "dark", "darkness",
    "cold", "fear", "afraid", "scared", "die", "dying", "dead", "death",
    "grave", "war", "fight", "fighting", "wrong", "bad", "worst", "worse",
    "goodbye", "miss", "missing", "empty", "bleed", "bleeding", "scars",
    "shame", "regret", "sorry", "falling", "fall", "nightmare",
];

/// Normalization constant for the compound score, matching the usual
/// valence-aggregation curve.
const COMPOUND_ALPHA: f64 = 15.0;

/// Immutable analysis word tables: stop words and theme keyword buckets.
#[derive(Debug, Clone)]
pub struct Lexicon {
    stop_words: HashSet<&'static str>,
    themes: Vec<(&'static str, &'static [&'static str])>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            stop_words: STOP_WORDS.iter().copied().collect(),
            themes: THEME_KEYWORDS.to_vec(),
        }
    }
}

impl Lexicon {
    /// Whether a lower-cased token is a stop word.
    #[must_use]
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Theme buckets in scoring-tiebreak order.
    #[must_use]
    pub fn themes(&self) -> &[(&'static str, &'static [&'static str])] {
        &self.themes
    }
}

/// Deterministic word-list sentiment scorer.
///
/// Counts polarity word hits over the alphabetic token stream and maps the
/// hit balance onto a bounded compound score. Coarse, but self-contained
/// and reproducible, which is what profile idempotence requires.
#[derive(Debug, Clone, Default)]
pub struct LexiconScorer {
    _private: (),
}

impl LexiconScorer {
    /// Create a scorer backed by the built-in polarity word lists.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl SentimentScorer for LexiconScorer {
    #[allow(clippy::cast_precision_loss)]
    fn score(&self, text: &str) -> SentimentScores {
        let tokens = text::alpha_tokens(text);
        if tokens.is_empty() {
            return SentimentScores::default();
        }

        let pos_hits = tokens.iter().filter(|t| POSITIVE_WORDS.contains(&t.as_str())).count();
        let neg_hits = tokens.iter().filter(|t| NEGATIVE_WORDS.contains(&t.as_str())).count();

        let total = tokens.len() as f64;
        let positive = pos_hits as f64 / total;
        let negative = neg_hits as f64 / total;
        let neutral = (1.0 - positive - negative).max(0.0);

        let balance = pos_hits as f64 - neg_hits as f64;
        let compound = (balance / balance.mul_add(balance, COMPOUND_ALPHA).sqrt()).clamp(-1.0, 1.0);

        SentimentScores { compound, positive, negative, neutral }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic, clippy::float_cmp)]

    use super::*;

    #[test]
    fn stop_words_cover_common_function_words() {
        let lexicon = Lexicon::default();
        assert!(lexicon.is_stop_word("the"));
        assert!(lexicon.is_stop_word("and"));
        assert!(lexicon.is_stop_word("t"));
        assert!(!lexicon.is_stop_word("love"));
    }

    #[test]
    fn theme_table_has_seven_buckets() {
        let lexicon = Lexicon::default();
        assert_eq!(lexicon.themes().len(), 7);
        assert_eq!(lexicon.themes()[0].0, "love");
    }

    #[test]
    fn positive_text_scores_positive_compound() {
        let scorer = LexiconScorer::new();
        let scores = scorer.score("love and joy, a beautiful bright smile");
        assert!(scores.compound > 0.0);
        assert!(scores.positive > 0.0);
        assert!((0.0..=1.0).contains(&scores.positive));
        assert!((-1.0..=1.0).contains(&scores.compound));
    }

    #[test]
    fn negative_text_scores_negative_compound() {
        let scorer = LexiconScorer::new();
        let scores = scorer.score("pain and tears, broken and lost in the dark");
        assert!(scores.compound < 0.0);
        assert!(scores.negative > 0.0);
    }

    #[test]
    fn empty_text_scores_zero() {
        let scorer = LexiconScorer::new();
        let scores = scorer.score("");
        assert_eq!(scores, SentimentScores::default());
    }

    #[test]
    fn scoring_is_deterministic() {
        let scorer = LexiconScorer::new();
        let a = scorer.score("love hurts but love heals");
        let b = scorer.score("love hurts but love heals");
        assert_eq!(a, b);
    }

    #[test]
    fn components_stay_in_range_for_saturated_input() {
        let scorer = LexiconScorer::new();
        let scores = scorer.score("love love love love love love love love love love");
        assert!((0.0..=1.0).contains(&scores.positive));
        assert!((0.0..=1.0).contains(&scores.neutral));
        assert!((-1.0..=1.0).contains(&scores.compound));
    }
}
