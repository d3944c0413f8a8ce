//! Core data types: fetched songs and the serializable style profile.

use serde::{Deserialize, Serialize};

/// A single fetched song. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    /// Song title as reported by the provider.
    pub title: String,
    /// Primary artist name.
    pub artist: String,
    /// Lyrics with section breaks (blank lines) preserved.
    pub raw_lyrics: String,
    /// Lyrics with headers stripped and blank lines collapsed.
    pub cleaned_lyrics: String,
    /// Whitespace-separated word count of the cleaned lyrics.
    pub word_count: usize,
    /// Line count of the cleaned lyrics.
    pub line_count: usize,
}

impl Song {
    /// Build a song from raw and cleaned lyric text, deriving the counts.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        raw_lyrics: impl Into<String>,
        cleaned_lyrics: impl Into<String>,
    ) -> Self {
        let cleaned_lyrics = cleaned_lyrics.into();
        let word_count = cleaned_lyrics.split_whitespace().count();
        let line_count = cleaned_lyrics.lines().count();
        Self {
            title: title.into(),
            artist: artist.into(),
            raw_lyrics: raw_lyrics.into(),
            cleaned_lyrics,
            word_count,
            line_count,
        }
    }
}

/// A word and how often it occurs in the corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    /// The word itself, lower-cased.
    pub word: String,
    /// Number of occurrences across the corpus.
    pub count: usize,
}

/// Frequency and uniqueness statistics over the corpus token stream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VocabularyProfile {
    /// Total token count across all songs.
    pub total_words: usize,
    /// Number of distinct tokens.
    pub unique_words: usize,
    /// Distinct / total token ratio, zero for an empty stream.
    pub vocabulary_richness: f64,
    /// The most frequent tokens with counts, ties by first encounter.
    pub most_common_words: Vec<WordCount>,
    /// Average character length of distinct tokens.
    pub avg_word_length: f64,
    /// Number of tokens occurring exactly once.
    pub rare_words_count: usize,
    /// Sample of tokens occurring exactly once, in encounter order.
    pub rare_words_sample: Vec<String>,
}

/// Four-component polarity score for one text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentScores {
    /// Overall polarity in [-1, 1].
    pub compound: f64,
    /// Positive proportion in [0, 1].
    pub positive: f64,
    /// Negative proportion in [0, 1].
    pub negative: f64,
    /// Neutral proportion in [0, 1].
    pub neutral: f64,
}

/// Song count and share of the corpus for one sentiment category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryShare {
    /// Number of songs in the category.
    pub count: usize,
    /// Percentage of all analyzed songs.
    pub percentage: f64,
}

/// Per-category breakdown of song sentiment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentDistribution {
    /// Songs with compound sentiment at or above the positive threshold.
    pub positive: CategoryShare,
    /// Songs with compound sentiment at or below the negative threshold.
    pub negative: CategoryShare,
    /// Everything in between.
    pub neutral: CategoryShare,
}

/// A theme keyword bucket with its hit count and share.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeScore {
    /// Theme label, e.g. "love" or "heartbreak".
    pub theme: String,
    /// Raw substring hit count across the corpus.
    pub score: usize,
    /// Percentage of total hits across all surviving themes.
    pub percentage: f64,
}

/// Song titles at the sentiment extremes of the corpus.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmotionalRange {
    /// Title of the song with the highest compound sentiment.
    pub most_positive: String,
    /// Title of the song with the lowest compound sentiment.
    pub most_negative: String,
}

/// Aggregated sentiment and theme statistics for the corpus.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentProfile {
    /// Pointwise mean of the per-song polarity scores.
    pub average_sentiment: SentimentScores,
    /// Song counts and percentages per sentiment category.
    pub sentiment_distribution: SentimentDistribution,
    /// Surviving themes ranked by hit count, top 10.
    pub dominant_themes: Vec<ThemeScore>,
    /// Titles of the most positive and most negative songs.
    pub emotional_range: EmotionalRange,
}

/// A structure label and how many songs carried it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureCount {
    /// Structure label, e.g. "Verse-Chorus".
    pub structure: String,
    /// Number of songs classified under the label.
    pub frequency: usize,
}

/// Heuristic song-structure statistics for the corpus.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructureProfile {
    /// Most frequent structure labels, top 5.
    pub common_structures: Vec<StructureCount>,
    /// Mean line count of even-indexed (verse) sections.
    pub avg_verse_length: f64,
    /// Mean line count of odd-indexed (chorus) sections.
    pub avg_chorus_length: f64,
    /// Distinct structure labels divided by song count.
    pub structure_diversity: f64,
}

/// One line's contribution to a rhyme group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RhymeLine {
    /// Zero-based index of the line in the analyzed block.
    pub line_index: usize,
    /// The trimmed line text.
    pub line: String,
    /// The line's last alphabetic non-stop-word token.
    pub end_word: String,
}

/// Lines grouped under one rhyme key, in line order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RhymeGroup {
    /// Coarse orthographic rhyme key.
    pub key: String,
    /// Member lines in encounter order.
    pub lines: Vec<RhymeLine>,
}

/// A rhyme scheme label with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeCount {
    /// Scheme label: "AABB", "ABAB" or "AAAA".
    pub scheme: String,
    /// Number of groups that produced the label.
    pub count: usize,
}

/// Rhyme clustering statistics over a sampled lyric block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RhymeProfile {
    /// Number of non-empty lines in the analyzed block.
    pub total_lines: usize,
    /// Rhyme groups in first-encounter order.
    pub groups: Vec<RhymeGroup>,
    /// Groups with two or more members divided by total groups.
    pub rhyme_density: f64,
    /// Most frequent scheme labels with counts, top 5.
    pub common_schemes: Vec<SchemeCount>,
}

/// Aggregate style profile for one artist's corpus.
///
/// Created once per analysis run, persisted as the unit of caching, and
/// never patched in place. Regeneration replaces it wholesale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleProfile {
    /// The analyzed artist.
    pub artist_name: String,
    /// Number of songs that entered the analysis.
    pub total_songs_analyzed: usize,
    /// Vocabulary statistics.
    pub vocabulary_profile: VocabularyProfile,
    /// Sentiment and theme statistics.
    pub sentiment_profile: SentimentProfile,
    /// Song structure statistics.
    pub structure_profile: StructureProfile,
    /// Rhyme clustering statistics over the sampled songs.
    pub rhyme_profile: RhymeProfile,
    /// Threshold-derived natural-language summary of the style.
    pub writing_style_summary: String,
}

impl StyleProfile {
    /// Empty profile for an artist with no analyzable songs.
    #[must_use]
    pub fn empty(artist_name: impl Into<String>) -> Self {
        Self {
            artist_name: artist_name.into(),
            ..Self::default()
        }
    }
}
