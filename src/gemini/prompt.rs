//! Prompt construction from a style profile.
//!
//! The prompt payload is the core's whole contract with the generative
//! model: artist name, richness and sentiment buckets, preferred
//! structure, top themes with percentages, characteristic words, and the
//! threshold-derived summary sentence.

use std::fmt::Write as _;

use crate::analysis::lexicon::Lexicon;
use crate::analysis::sentiment;
use crate::types::StyleProfile;

/// Vocabulary richness above which the prompt calls the style rich.
const RICH_PROMPT_VOCABULARY: f64 = 0.4;

/// Positive words for coarse emotion extraction in rewrite mode.
const POSITIVE_EMOTION_WORDS: &[&str] = &["happy", "joy", "love", "bright", "smile"];

/// Negative words for coarse emotion extraction in rewrite mode.
const NEGATIVE_EMOTION_WORDS: &[&str] = &["sad", "pain", "cry", "dark", "tears"];

/// Thematic context carried over from an original song in rewrite mode.
#[derive(Debug, Clone)]
pub struct SourceContext {
    /// Original song title.
    pub title: String,
    /// Coarse theme extracted from the original lyrics.
    pub theme: String,
    /// Coarse emotion extracted from the original lyrics.
    pub emotion: String,
}

/// Options controlling one generation request.
#[derive(Debug, Clone, Default)]
pub struct GenerationRequest {
    /// Theme of the new song.
    pub theme: String,
    /// Desired emotion, when the caller wants to override the artist's
    /// natural tone.
    pub emotion: Option<String>,
    /// Desired structure, when overriding the artist's preference.
    pub structure: Option<String>,
    /// Original-song context for rewrite mode.
    pub source: Option<SourceContext>,
}

/// Build the style description payload from a profile.
#[must_use]
pub fn style_description(profile: &StyleProfile) -> String {
    let vocab = &profile.vocabulary_profile;
    let sentiment = &profile.sentiment_profile;

    let vocab_bucket = if vocab.vocabulary_richness > RICH_PROMPT_VOCABULARY {
        "rich and diverse"
    } else {
        "direct and accessible"
    };

    let compound = sentiment.average_sentiment.compound;
    let tone_bucket = if compound > 0.0 {
        "positive"
    } else if compound < 0.0 {
        "melancholic"
    } else {
        "neutral"
    };

    let preferred_structure = profile
        .structure_profile
        .common_structures
        .first()
        .map_or("Verse-Chorus", |s| s.structure.as_str());

    let mut text = String::new();
    let _ = writeln!(text, "MUSICAL STYLE OF {}:", profile.artist_name.to_uppercase());
    let _ = writeln!(text);
    let _ = writeln!(text, "KEY CHARACTERISTICS:");
    let _ = writeln!(text, "- Vocabulary: {vocab_bucket}");
    let _ = writeln!(text, "- Emotional tone: {compound:.2} ({tone_bucket})");
    let _ = writeln!(text, "- Preferred structure: {preferred_structure}");
    let _ = writeln!(text);

    let _ = writeln!(text, "RECURRING THEMES:");
    for theme in sentiment.dominant_themes.iter().take(5) {
        let _ = writeln!(text, "- {}: {:.1}% prevalence", capitalize(&theme.theme), theme.percentage);
    }
    let _ = writeln!(text);

    let words: Vec<&str> = vocab
        .most_common_words
        .iter()
        .take(10)
        .map(|w| w.word.as_str())
        .collect();
    let _ = writeln!(text, "CHARACTERISTIC WORDS:");
    let _ = writeln!(text, "{}", words.join(", "));
    let _ = writeln!(text);

    let _ = writeln!(text, "WRITING PATTERNS:");
    let _ = writeln!(text, "{}", profile.writing_style_summary);
    let _ = writeln!(text);

    let _ = writeln!(text, "CRITICAL ORIGINALITY RULES:");
    let _ = writeln!(text, "1. NEVER copy verses, phrases or rhymes from existing songs");
    let _ = writeln!(text, "2. Use the SPIRIT and style of the artist, not their actual lyrics");
    let _ = writeln!(text, "3. Invent original metaphors and imagery with the same sensibility");
    let _ = writeln!(text, "4. Keep the emotional arc but with completely new content");
    let _ = writeln!(text, "5. Avoid direct references to the artist's known songs");

    text
}

/// Build the final generation prompt from a style description and request.
#[must_use]
pub fn generation_prompt(style: &str, request: &GenerationRequest) -> String {
    let mut text = String::new();
    let _ = writeln!(text, "{style}");

    if let Some(source) = &request.source {
        let _ = writeln!(text);
        let _ = writeln!(text, "ORIGINAL SONG CONTEXT (THEMATIC INSPIRATION ONLY):");
        let _ = writeln!(text, "- Original title: {}", source.title);
        let _ = writeln!(text, "- Main theme: {}", source.theme);
        let _ = writeln!(text, "- Dominant emotion: {}", source.emotion);
        let _ = writeln!(text);
        let _ = writeln!(
            text,
            "IMPORTANT: Do NOT reuse the words, metaphors or structure of the original song."
        );
        let _ = writeln!(text, "Capture only the thematic and emotional ESSENCE.");
    }

    let _ = writeln!(text);
    let _ = writeln!(text, "GENERATION TASK:");
    let _ = writeln!(
        text,
        "Write a completely ORIGINAL song in the style described above with these specifications:"
    );
    let _ = writeln!(text);
    let _ = writeln!(text, "THEME: {}", request.theme);
    let _ = writeln!(
        text,
        "EMOTION: {}",
        request.emotion.as_deref().unwrap_or("follow the artist's natural tone")
    );
    let _ = writeln!(
        text,
        "STRUCTURE: {}",
        request.structure.as_deref().unwrap_or("follow the artist's preference")
    );
    let _ = writeln!(text);
    let _ = writeln!(text, "OUTPUT FORMAT:");
    let _ = writeln!(text, "Present the lyrics with clearly labeled sections:");
    let _ = writeln!(text, "[Verse 1]");
    let _ = writeln!(text, "[Chorus]");
    let _ = writeln!(text, "[Verse 2]");
    let _ = writeln!(text, "[Chorus]");
    let _ = writeln!(text, "[Bridge] (optional)");
    let _ = writeln!(text, "[Outro] (optional)");
    let _ = writeln!(text);
    let _ = writeln!(text, "Every line must be 100% original.");

    text
}

/// Extract a coarse theme label from lyrics for rewrite mode.
///
/// The highest-scoring theme bucket wins; a corpus with no keyword hits
/// defaults to "life".
#[must_use]
pub fn extract_theme(lyrics: &str, lexicon: &Lexicon) -> String {
    sentiment::score_themes(&lyrics.to_lowercase(), lexicon)
        .first()
        .map_or_else(|| "life".to_string(), |t| t.theme.clone())
}

/// Extract a coarse emotion label from lyrics for rewrite mode.
#[must_use]
pub fn extract_emotion(lyrics: &str) -> String {
    let lower = lyrics.to_lowercase();
    let pos: usize = POSITIVE_EMOTION_WORDS.iter().map(|w| lower.matches(w).count()).sum();
    let neg: usize = NEGATIVE_EMOTION_WORDS.iter().map(|w| lower.matches(w).count()).sum();

    if pos > neg {
        "positive".to_string()
    } else if neg > pos {
        "emotional".to_string()
    } else {
        "balanced".to_string()
    }
}

/// Uppercase the first character of a label.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::types::{ThemeScore, WordCount};

    fn profile_with_themes() -> StyleProfile {
        let mut profile = StyleProfile::empty("Test Artist");
        profile.vocabulary_profile.vocabulary_richness = 0.6;
        profile.vocabulary_profile.most_common_words = vec![
            WordCount { word: "night".to_string(), count: 9 },
            WordCount { word: "fire".to_string(), count: 7 },
        ];
        profile.sentiment_profile.average_sentiment.compound = 0.31;
        profile.sentiment_profile.dominant_themes = vec![ThemeScore {
            theme: "love".to_string(),
            score: 12,
            percentage: 60.0,
        }];
        profile.writing_style_summary = "The artist writes plainly.".to_string();
        profile
    }

    #[test]
    fn style_description_carries_profile_signals() {
        let text = style_description(&profile_with_themes());
        assert!(text.contains("TEST ARTIST"));
        assert!(text.contains("rich and diverse"));
        assert!(text.contains("0.31 (positive)"));
        assert!(text.contains("- Love: 60.0% prevalence"));
        assert!(text.contains("night, fire"));
        assert!(text.contains("The artist writes plainly."));
    }

    #[test]
    fn generation_prompt_includes_request_fields() {
        let style = style_description(&profile_with_themes());
        let request = GenerationRequest {
            theme: "city rain".to_string(),
            emotion: Some("wistful".to_string()),
            ..GenerationRequest::default()
        };
        let text = generation_prompt(&style, &request);
        assert!(text.contains("THEME: city rain"));
        assert!(text.contains("EMOTION: wistful"));
        assert!(text.contains("STRUCTURE: follow the artist's preference"));
        assert!(text.contains("[Verse 1]"));
    }

    #[test]
    fn rewrite_context_appears_only_when_present() {
        let style = style_description(&profile_with_themes());
        let mut request = GenerationRequest {
            theme: "letting go".to_string(),
            ..GenerationRequest::default()
        };
        let without = generation_prompt(&style, &request);
        assert!(!without.contains("ORIGINAL SONG CONTEXT"));

        request.source = Some(SourceContext {
            title: "Old Song".to_string(),
            theme: "heartbreak".to_string(),
            emotion: "emotional".to_string(),
        });
        let with = generation_prompt(&style, &request);
        assert!(with.contains("ORIGINAL SONG CONTEXT"));
        assert!(with.contains("Old Song"));
    }

    #[test]
    fn theme_extraction_picks_dominant_bucket() {
        let lexicon = Lexicon::default();
        assert_eq!(extract_theme("love love kiss heart", &lexicon), "love");
        assert_eq!(extract_theme("qqq zzz", &lexicon), "life");
    }

    #[test]
    fn emotion_extraction_compares_polarity_hits() {
        assert_eq!(extract_emotion("happy joy smile"), "positive");
        assert_eq!(extract_emotion("sad tears cry"), "emotional");
        assert_eq!(extract_emotion("a neutral line"), "balanced");
    }
}
