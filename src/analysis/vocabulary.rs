//! Vocabulary frequency and uniqueness statistics.

use std::collections::HashMap;

use crate::analysis::lexicon::Lexicon;
use crate::analysis::text;
use crate::constants::analysis::{RARE_WORD_SAMPLE, TOP_WORDS};
use crate::types::{Song, VocabularyProfile, WordCount};

/// Aggregate the cleaned token streams of a song collection into
/// frequency and uniqueness statistics.
///
/// Frequency ties are broken by first-encountered order, so the result is
/// a pure function of the song sequence.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn analyze(songs: &[Song], lexicon: &Lexicon) -> VocabularyProfile {
    // Frequency table in first-encounter order; the map only indexes it.
    let mut words: Vec<WordCount> = Vec::new();
    let mut by_word: HashMap<String, usize> = HashMap::new();
    let mut total_words = 0usize;

    for song in songs {
        for token in text::tokenize(&song.cleaned_lyrics, lexicon) {
            total_words += 1;
            if let Some(&idx) = by_word.get(&token) {
                words[idx].count += 1;
            } else {
                by_word.insert(token.clone(), words.len());
                words.push(WordCount { word: token, count: 1 });
            }
        }
    }

    let unique_words = words.len();
    let vocabulary_richness = if total_words == 0 {
        0.0
    } else {
        unique_words as f64 / total_words as f64
    };

    let avg_word_length = if unique_words == 0 {
        0.0
    } else {
        let char_total: usize = words.iter().map(|w| w.word.chars().count()).sum();
        char_total as f64 / unique_words as f64
    };

    let rare: Vec<&WordCount> = words.iter().filter(|w| w.count == 1).collect();
    let rare_words_count = rare.len();
    let rare_words_sample: Vec<String> = rare
        .iter()
        .take(RARE_WORD_SAMPLE)
        .map(|w| w.word.clone())
        .collect();

    // Stable sort keeps first-encounter order among equal counts.
    let mut most_common_words = words;
    most_common_words.sort_by(|a, b| b.count.cmp(&a.count));
    most_common_words.truncate(TOP_WORDS);

    VocabularyProfile {
        total_words,
        unique_words,
        vocabulary_richness,
        most_common_words,
        avg_word_length,
        rare_words_count,
        rare_words_sample,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic, clippy::float_cmp)]

    use super::*;

    fn song(title: &str, lyrics: &str) -> Song {
        Song::new(title, "Test Artist", lyrics, lyrics)
    }

    #[test]
    fn counts_match_the_two_song_corpus() {
        let songs = vec![
            song("First", "love heart love\nlove stays"),
            song("Second", "pain cry pain"),
        ];
        let profile = analyze(&songs, &Lexicon::default());

        assert_eq!(profile.unique_words, 5);
        assert_eq!(profile.total_words, 8);
        assert_eq!(profile.vocabulary_richness, 5.0 / 8.0);
        assert_eq!(profile.most_common_words[0], WordCount { word: "love".to_string(), count: 3 });
        assert_eq!(profile.most_common_words[1], WordCount { word: "pain".to_string(), count: 2 });
    }

    #[test]
    fn richness_is_zero_for_empty_corpus() {
        let profile = analyze(&[], &Lexicon::default());
        assert_eq!(profile.total_words, 0);
        assert_eq!(profile.vocabulary_richness, 0.0);
        assert_eq!(profile.avg_word_length, 0.0);
        assert!(profile.most_common_words.is_empty());
    }

    #[test]
    fn richness_stays_in_unit_interval() {
        let songs = vec![song("A", "one word repeated repeated repeated word one")];
        let profile = analyze(&songs, &Lexicon::default());
        assert!(profile.vocabulary_richness > 0.0);
        assert!(profile.vocabulary_richness <= 1.0);
    }

    #[test]
    fn hapax_sample_keeps_encounter_order() {
        let songs = vec![song("A", "alpha beta alpha gamma delta")];
        let profile = analyze(&songs, &Lexicon::default());
        assert_eq!(profile.rare_words_count, 3);
        assert_eq!(profile.rare_words_sample, vec!["beta", "gamma", "delta"]);
    }

    #[test]
    fn frequency_ties_break_by_first_encounter() {
        let songs = vec![song("A", "zebra apple zebra apple mango")];
        let profile = analyze(&songs, &Lexicon::default());
        assert_eq!(profile.most_common_words[0].word, "zebra");
        assert_eq!(profile.most_common_words[1].word, "apple");
        assert_eq!(profile.most_common_words[2].word, "mango");
    }

    #[test]
    fn stop_words_never_enter_the_table() {
        let songs = vec![song("A", "the love of the heart")];
        let profile = analyze(&songs, &Lexicon::default());
        assert_eq!(profile.total_words, 2);
        assert!(profile.most_common_words.iter().all(|w| w.word != "the"));
    }

    #[test]
    fn average_length_counts_distinct_words_once() {
        let songs = vec![song("A", "go go go banana")];
        let profile = analyze(&songs, &Lexicon::default());
        // distinct: go (2 chars), banana (6 chars)
        assert_eq!(profile.avg_word_length, 4.0);
    }
}
