//! Profile builder: orchestrates the analyzers into one style profile.

use crate::analysis::lexicon::Lexicon;
use crate::analysis::sentiment::SentimentScorer;
use crate::analysis::{rhyme, sentiment, structure, vocabulary};
use crate::constants::{analysis, summary};
use crate::types::{
    SentimentProfile, Song, StructureProfile, StyleProfile, VocabularyProfile,
};

/// Builds a complete [`StyleProfile`] from a song collection.
///
/// Holds the injected word tables and sentiment scorer; building is a
/// pure function of the song sequence, so repeated runs over an unchanged
/// collection yield bit-identical profiles.
pub struct ProfileBuilder<'a> {
    lexicon: &'a Lexicon,
    scorer: &'a dyn SentimentScorer,
}

impl<'a> ProfileBuilder<'a> {
    /// Create a builder over the given word tables and scorer.
    #[must_use]
    pub const fn new(lexicon: &'a Lexicon, scorer: &'a dyn SentimentScorer) -> Self {
        Self { lexicon, scorer }
    }

    /// Analyze the collection and assemble the profile.
    ///
    /// An empty collection produces an empty profile rather than an
    /// error; the rhyme clusterer only sees the first few songs.
    #[must_use]
    pub fn build(&self, artist_name: &str, songs: &[Song]) -> StyleProfile {
        if songs.is_empty() {
            tracing::warn!("No songs to analyze for {artist_name}; returning empty profile");
            return StyleProfile::empty(artist_name);
        }

        tracing::info!("Analyzing style of {artist_name} across {} songs", songs.len());

        let vocabulary_profile = vocabulary::analyze(songs, self.lexicon);
        let sentiment_profile = sentiment::analyze(songs, self.scorer, self.lexicon);
        let structure_profile = structure::analyze(songs);

        let rhyme_sample: String = songs
            .iter()
            .take(analysis::RHYME_SAMPLE_SONGS)
            .map(|s| s.raw_lyrics.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        let rhyme_profile = rhyme::analyze(&rhyme_sample, self.lexicon);

        let writing_style_summary =
            summarize(&vocabulary_profile, &sentiment_profile, &structure_profile);

        StyleProfile {
            artist_name: artist_name.to_string(),
            total_songs_analyzed: songs.len(),
            vocabulary_profile,
            sentiment_profile,
            structure_profile,
            rhyme_profile,
            writing_style_summary,
        }
    }
}

/// Map three profile signals onto canned phrase fragments.
///
/// The summary depends only on the thresholds, never on raw text.
fn summarize(
    vocab: &VocabularyProfile,
    sentiment: &SentimentProfile,
    structure: &StructureProfile,
) -> String {
    let vocab_phrase = if vocab.vocabulary_richness > summary::RICH_VOCABULARY {
        "a rich and diverse vocabulary"
    } else if vocab.vocabulary_richness > summary::MODERATE_VOCABULARY {
        "a moderately varied vocabulary"
    } else {
        "a simple and direct vocabulary"
    };

    let compound = sentiment.average_sentiment.compound;
    let tone_phrase = if compound > summary::POSITIVE_TONE {
        "an upbeat and optimistic tone"
    } else if compound < summary::NEGATIVE_TONE {
        "a melancholic and emotive tone"
    } else {
        "an even emotional balance"
    };

    let conventional = structure
        .common_structures
        .first()
        .is_some_and(|s| s.structure.contains("Chorus"));
    let structure_phrase = if conventional {
        "conventional chorus-driven structures"
    } else {
        "free-form and experimental structures"
    };

    format!("The artist writes with {vocab_phrase}, {tone_phrase}, and {structure_phrase}.")
}
