//! Per-song sentiment aggregation and keyword-bucket theme scoring.

use crate::analysis::lexicon::Lexicon;
use crate::constants::analysis::{NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD, TOP_THEMES};
use crate::types::{
    CategoryShare, EmotionalRange, SentimentDistribution, SentimentProfile, SentimentScores, Song,
    ThemeScore,
};

/// A pluggable text polarity scorer.
///
/// The core only consumes the numeric four-tuple contract, so the
/// analyzers stay testable with a deterministic stub.
pub trait SentimentScorer {
    /// Score a text. Compound lies in [-1, 1]; the proportions in [0, 1].
    fn score(&self, text: &str) -> SentimentScores;
}

/// Score every song, aggregate the corpus averages and distribution, and
/// rank the fixed theme buckets by substring hit count.
///
/// An empty song collection yields the zero-valued profile rather than an
/// error.
#[must_use]
pub fn analyze(songs: &[Song], scorer: &dyn SentimentScorer, lexicon: &Lexicon) -> SentimentProfile {
    if songs.is_empty() {
        return SentimentProfile::default();
    }

    let samples: Vec<SentimentScores> =
        songs.iter().map(|s| scorer.score(&s.cleaned_lyrics)).collect();

    let average_sentiment = average(&samples);
    let sentiment_distribution = categorize(&samples);

    let corpus: String = songs
        .iter()
        .map(|s| s.cleaned_lyrics.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");
    let dominant_themes = score_themes(&corpus, lexicon);

    // Strict comparisons keep the first-encountered song on ties.
    let mut most_positive = 0usize;
    let mut most_negative = 0usize;
    for (idx, sample) in samples.iter().enumerate() {
        if sample.compound > samples[most_positive].compound {
            most_positive = idx;
        }
        if sample.compound < samples[most_negative].compound {
            most_negative = idx;
        }
    }
    let emotional_range = EmotionalRange {
        most_positive: songs[most_positive].title.clone(),
        most_negative: songs[most_negative].title.clone(),
    };

    SentimentProfile {
        average_sentiment,
        sentiment_distribution,
        dominant_themes,
        emotional_range,
    }
}

/// Pointwise mean of a non-empty sample set.
#[allow(clippy::cast_precision_loss)]
fn average(samples: &[SentimentScores]) -> SentimentScores {
    let n = samples.len() as f64;
    SentimentScores {
        compound: samples.iter().map(|s| s.compound).sum::<f64>() / n,
        positive: samples.iter().map(|s| s.positive).sum::<f64>() / n,
        negative: samples.iter().map(|s| s.negative).sum::<f64>() / n,
        neutral: samples.iter().map(|s| s.neutral).sum::<f64>() / n,
    }
}

/// Bucket songs into positive/negative/neutral by compound thresholds.
#[allow(clippy::cast_precision_loss)]
fn categorize(samples: &[SentimentScores]) -> SentimentDistribution {
    let mut positive = 0usize;
    let mut negative = 0usize;
    let mut neutral = 0usize;

    for sample in samples {
        if sample.compound >= POSITIVE_THRESHOLD {
            positive += 1;
        } else if sample.compound <= NEGATIVE_THRESHOLD {
            negative += 1;
        } else {
            neutral += 1;
        }
    }

    let total = samples.len() as f64;
    let share = |count: usize| CategoryShare {
        count,
        percentage: count as f64 / total * 100.0,
    };

    SentimentDistribution {
        positive: share(positive),
        negative: share(negative),
        neutral: share(neutral),
    }
}

/// Score the fixed theme buckets over a lower-cased corpus text.
///
/// Keyword hits are raw substring occurrence counts, so matches inside
/// longer words count. Zero-score themes are dropped; the rest are ranked
/// descending with percentages against the surviving total.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn score_themes(corpus_lower: &str, lexicon: &Lexicon) -> Vec<ThemeScore> {
    let mut scores: Vec<ThemeScore> = Vec::new();

    for (theme, keywords) in lexicon.themes() {
        let score: usize = keywords.iter().map(|k| corpus_lower.matches(k).count()).sum();
        if score > 0 {
            scores.push(ThemeScore {
                theme: (*theme).to_string(),
                score,
                percentage: 0.0,
            });
        }
    }

    let total: usize = scores.iter().map(|t| t.score).sum();
    if total > 0 {
        for theme in &mut scores {
            theme.percentage = theme.score as f64 / total as f64 * 100.0;
        }
    }

    // Stable sort: equal scores keep theme-table order.
    scores.sort_by(|a, b| b.score.cmp(&a.score));
    scores.truncate(TOP_THEMES);
    scores
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic, clippy::float_cmp)]

    use super::*;

    /// Stub scorer mapping each song's first word to a fixed compound.
    struct StubScorer;

    impl SentimentScorer for StubScorer {
        fn score(&self, text: &str) -> SentimentScores {
            let compound = match text.split_whitespace().next() {
                Some("up") => 0.8,
                Some("down") => -0.6,
                _ => 0.0,
            };
            SentimentScores { compound, positive: 0.5, negative: 0.25, neutral: 0.25 }
        }
    }

    fn song(title: &str, lyrics: &str) -> Song {
        Song::new(title, "Test Artist", lyrics, lyrics)
    }

    #[test]
    fn empty_collection_yields_zero_profile() {
        let profile = analyze(&[], &StubScorer, &Lexicon::default());
        assert_eq!(profile, SentimentProfile::default());
    }

    #[test]
    fn average_is_pointwise_mean() {
        let songs = vec![song("A", "up beat"), song("B", "down beat")];
        let profile = analyze(&songs, &StubScorer, &Lexicon::default());
        assert!((profile.average_sentiment.compound - 0.1).abs() < 1e-9);
        assert_eq!(profile.average_sentiment.positive, 0.5);
    }

    #[test]
    fn categories_follow_compound_thresholds() {
        let songs = vec![
            song("A", "up one"),
            song("B", "down two"),
            song("C", "flat three"),
        ];
        let profile = analyze(&songs, &StubScorer, &Lexicon::default());
        let dist = profile.sentiment_distribution;
        assert_eq!(dist.positive.count, 1);
        assert_eq!(dist.negative.count, 1);
        assert_eq!(dist.neutral.count, 1);

        let percentage_sum = dist.positive.percentage + dist.negative.percentage + dist.neutral.percentage;
        assert!((percentage_sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn emotional_range_reports_extremes_with_first_encounter_ties() {
        let songs = vec![
            song("First Up", "up one"),
            song("Second Up", "up two"),
            song("Only Down", "down three"),
        ];
        let profile = analyze(&songs, &StubScorer, &Lexicon::default());
        assert_eq!(profile.emotional_range.most_positive, "First Up");
        assert_eq!(profile.emotional_range.most_negative, "Only Down");
    }

    #[test]
    fn theme_percentages_sum_to_hundred_when_any_matched() {
        let lexicon = Lexicon::default();
        let themes = score_themes("love in the city streets at night", &lexicon);
        assert!(!themes.is_empty());
        let sum: f64 = themes.iter().map(|t| t.percentage).sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn themes_are_empty_when_no_keywords_match() {
        let lexicon = Lexicon::default();
        let themes = score_themes("zzz qqq xxx", &lexicon);
        assert!(themes.is_empty());
    }

    #[test]
    fn substring_hits_inside_longer_words_count() {
        let lexicon = Lexicon::default();
        // "lovely" and "beloved" both contain "love"
        let themes = score_themes("lovely beloved love", &lexicon);
        let love = themes.iter().find(|t| t.theme == "love").unwrap();
        assert!(love.score >= 3);
    }

    #[test]
    fn worked_example_scores_love_theme() {
        let songs = vec![
            song("First", "love heart love\nlove stays"),
            song("Second", "pain cry pain"),
        ];
        let profile = analyze(&songs, &StubScorer, &Lexicon::default());
        let love = profile.dominant_themes.iter().find(|t| t.theme == "love").unwrap();
        assert!(love.score >= 3);
    }

    #[test]
    fn themes_rank_descending_by_score() {
        let lexicon = Lexicon::default();
        let themes = score_themes("love love love city", &lexicon);
        assert_eq!(themes[0].theme, "love");
        for pair in themes.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }
}
