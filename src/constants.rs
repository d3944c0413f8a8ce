//! Application constants.
//!
//! Centralizes magic numbers and analysis thresholds for better maintainability.

/// Style analysis constants.
pub mod analysis {
    /// Compound score at or above which a song counts as positive.
    pub const POSITIVE_THRESHOLD: f64 = 0.05;

    /// Compound score at or below which a song counts as negative.
    pub const NEGATIVE_THRESHOLD: f64 = -0.05;

    /// Number of songs fed to the rhyme clusterer (a bounded sample).
    pub const RHYME_SAMPLE_SONGS: usize = 5;

    /// Number of most frequent words reported per profile.
    pub const TOP_WORDS: usize = 20;

    /// Number of hapax legomena included in the sample list.
    pub const RARE_WORD_SAMPLE: usize = 20;

    /// Number of dominant themes reported per profile.
    pub const TOP_THEMES: usize = 10;

    /// Number of rhyme scheme labels reported per profile.
    pub const TOP_SCHEMES: usize = 5;

    /// Number of structure labels reported per profile.
    pub const TOP_STRUCTURES: usize = 5;
}

/// Writing-style summary thresholds.
pub mod summary {
    /// Vocabulary richness above which the style is described as rich and diverse.
    pub const RICH_VOCABULARY: f64 = 0.5;

    /// Vocabulary richness above which the style is described as moderately varied.
    pub const MODERATE_VOCABULARY: f64 = 0.3;

    /// Average compound sentiment above which the tone is described as upbeat.
    pub const POSITIVE_TONE: f64 = 0.2;

    /// Average compound sentiment below which the tone is described as melancholic.
    pub const NEGATIVE_TONE: f64 = -0.2;
}

/// Lyrics fetching constants.
pub mod fetch {
    /// Default maximum number of songs fetched per artist.
    pub const MAX_SONGS_PER_ARTIST: usize = 50;

    /// Minimum cleaned-lyrics length for a song to enter the corpus.
    pub const MIN_LYRICS_LENGTH: usize = 100;

    /// Delay between consecutive song page requests.
    pub const REQUEST_DELAY_MS: u64 = 100;

    /// Page size for artist song listings.
    pub const SONGS_PER_PAGE: usize = 50;

    /// Title markers for non-studio versions that are skipped during fetch.
    pub const EXCLUDED_TITLE_TERMS: [&str; 4] = ["(Remix)", "(Live)", "(Acoustic)", "(Demo)"];
}

/// Text generation constants.
pub mod generation {
    /// Sampling temperature for the generative model.
    pub const TEMPERATURE: f64 = 0.8;

    /// Nucleus sampling parameter.
    pub const TOP_P: f64 = 0.9;

    /// Top-k sampling parameter.
    pub const TOP_K: u32 = 40;

    /// Maximum tokens produced per generation request.
    pub const MAX_OUTPUT_TOKENS: u32 = 2000;

    /// Lines per section when falling back to a positional split.
    pub const FALLBACK_SECTION_LINES: usize = 4;

    /// Minimum line count before the positional split applies at all.
    pub const FALLBACK_MIN_LINES: usize = 12;

    /// Generated text shorter than this scores zero originality.
    pub const MIN_GENERATED_CHARS: usize = 50;
}
