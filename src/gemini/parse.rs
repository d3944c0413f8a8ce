//! Parsing of generated lyric text into labeled sections.
//!
//! Output with no parseable bracketed headers falls back to a fixed
//! positional split rather than failing.

use serde::{Deserialize, Serialize};

use crate::constants::generation::{
    FALLBACK_MIN_LINES, FALLBACK_SECTION_LINES, MIN_GENERATED_CHARS,
};

/// One labeled section of a generated song.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Section label without brackets, e.g. "Verse 1".
    pub label: String,
    /// Section body text.
    pub body: String,
}

/// Parse generated text into an ordered label-to-body section list.
///
/// Lines shaped like `[Label]` open a new section; body lines accumulate
/// under the open one. Text before the first header is dropped. When no
/// section parses at all, the positional fallback applies.
#[must_use]
pub fn parse_sections(text: &str) -> Vec<Section> {
    let mut sections: Vec<Section> = Vec::new();
    let mut current: Option<(String, Vec<&str>)> = None;

    for line in text.lines() {
        let line = line.trim();

        if line.len() >= 2 && line.starts_with('[') && line.ends_with(']') {
            if let Some((label, body)) = current.take() {
                if !body.is_empty() {
                    sections.push(Section { label, body: body.join("\n") });
                }
            }
            current = Some((line[1..line.len() - 1].to_string(), Vec::new()));
        } else if !line.is_empty() {
            if let Some((_, body)) = current.as_mut() {
                body.push(line);
            }
        }
    }

    if let Some((label, body)) = current.take() {
        if !body.is_empty() {
            sections.push(Section { label, body: body.join("\n") });
        }
    }

    if sections.is_empty() {
        return fallback_sections(text);
    }
    sections
}

/// Positional split for output with no parseable headers.
///
/// Four-line chunks alternate between numbered verses and choruses; text
/// shorter than twelve non-empty lines becomes one "Full Song" section.
#[must_use]
pub fn fallback_sections(text: &str) -> Vec<Section> {
    let lines: Vec<&str> = text.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
    if lines.is_empty() {
        return Vec::new();
    }

    if lines.len() < FALLBACK_MIN_LINES {
        return vec![Section {
            label: "Full Song".to_string(),
            body: lines.join("\n"),
        }];
    }

    lines
        .chunks(FALLBACK_SECTION_LINES)
        .enumerate()
        .map(|(idx, chunk)| {
            let label = if idx % 2 == 0 {
                format!("Verse {}", idx / 2 + 1)
            } else {
                "Chorus".to_string()
            };
            Section { label, body: chunk.join("\n") }
        })
        .collect()
}

/// Coarse originality check: type/token diversity of the generated text,
/// scaled and clamped to [0, 1]. Very short output scores zero.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn originality_score(sections: &[Section]) -> f64 {
    let all_text: String = sections
        .iter()
        .map(|s| s.body.as_str())
        .collect::<Vec<_>>()
        .join("\n");

    if all_text.len() < MIN_GENERATED_CHARS {
        return 0.0;
    }

    let words: Vec<String> = all_text.split_whitespace().map(str::to_lowercase).collect();
    if words.is_empty() {
        return 0.0;
    }
    let unique: std::collections::HashSet<&str> =
        words.iter().map(String::as_str).collect();

    let diversity = unique.len() as f64 / words.len() as f64;
    (diversity * 1.5).min(1.0)
}
