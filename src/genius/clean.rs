//! Lyric text cleanup.
//!
//! Strips section headers and technical parentheticals from scraped
//! lyrics. Blank-line section breaks survive cleanup (the structure
//! detector segments on them); only the fully collapsed form drops them.

use std::sync::LazyLock;

use regex::Regex;

/// Regex matching `[Verse 1]`-style bracketed section headers.
#[allow(clippy::expect_used)]
static RE_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[.*?\]").expect("valid regex: RE_HEADER")
});

/// Regex matching `(... mix ...)` technical parentheticals.
#[allow(clippy::expect_used)]
static RE_MIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\(.*?mix.*?\)").expect("valid regex: RE_MIX")
});

/// Regex matching `(... master ...)` technical parentheticals.
#[allow(clippy::expect_used)]
static RE_MASTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\(.*?master.*?\)").expect("valid regex: RE_MASTER")
});

/// Regex matching runs of spaces and tabs.
#[allow(clippy::expect_used)]
static RE_SPACES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[ \t]+").expect("valid regex: RE_SPACES")
});

/// Regex matching runs of three or more newlines.
#[allow(clippy::expect_used)]
static RE_BLANK_RUNS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\n{3,}").expect("valid regex: RE_BLANK_RUNS")
});

/// Regex matching any run of newlines.
#[allow(clippy::expect_used)]
static RE_NEWLINES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\n+").expect("valid regex: RE_NEWLINES")
});

/// Clean scraped lyrics while preserving section breaks.
///
/// Removes bracketed headers and mix/master parentheticals, collapses
/// space runs, trims each line, and caps blank runs at a single blank
/// line.
#[must_use]
pub fn clean_lyrics(lyrics: &str) -> String {
    if lyrics.is_empty() {
        return String::new();
    }

    let text = RE_HEADER.replace_all(lyrics, "");
    let text = RE_MIX.replace_all(&text, "");
    let text = RE_MASTER.replace_all(&text, "");
    let text = RE_SPACES.replace_all(&text, " ");

    let trimmed: String = text
        .lines()
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n");
    let capped = RE_BLANK_RUNS.replace_all(&trimmed, "\n\n");
    capped.trim().to_string()
}

/// Collapse all blank lines, producing the dense form used for token
/// streams and word counts.
#[must_use]
pub fn collapse_blank_lines(lyrics: &str) -> String {
    RE_NEWLINES.replace_all(lyrics, "\n").trim().to_string()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn strips_bracketed_headers() {
        let raw = "[Verse 1]\nfirst line\n[Chorus]\nsecond line";
        let cleaned = clean_lyrics(raw);
        assert!(!cleaned.contains('['));
        assert!(cleaned.contains("first line"));
        assert!(cleaned.contains("second line"));
    }

    #[test]
    fn strips_mix_and_master_parentheticals() {
        let raw = "hello there (2024 Remix Mix) (remastered master)";
        assert_eq!(clean_lyrics(raw), "hello there");
    }

    #[test]
    fn preserves_single_blank_section_breaks() {
        let raw = "verse one\nverse two\n\nchorus one\nchorus two";
        let cleaned = clean_lyrics(raw);
        assert_eq!(cleaned, "verse one\nverse two\n\nchorus one\nchorus two");
    }

    #[test]
    fn caps_long_blank_runs_at_one_blank_line() {
        let raw = "a\n\n\n\n\nb";
        assert_eq!(clean_lyrics(raw), "a\n\nb");
    }

    #[test]
    fn collapse_removes_all_blank_lines() {
        let raw = "a\n\nb\n\n\nc";
        assert_eq!(collapse_blank_lines(raw), "a\nb\nc");
    }

    #[test]
    fn collapses_space_runs_and_trims() {
        let raw = "  too    many   spaces  ";
        assert_eq!(clean_lyrics(raw), "too many spaces");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(clean_lyrics(""), "");
    }
}
