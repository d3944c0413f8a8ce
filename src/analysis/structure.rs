//! Heuristic song-structure classification.
//!
//! Verbatim line repetition is the chorus signal; a literal "bridge"
//! mention is the bridge signal. Section lengths come from blank-line
//! segmentation with even sections read as verses and odd as choruses.
//! The alternation heuristic is coarse and only feeds the two average
//! length fields.

use std::collections::HashMap;
use std::fmt;

use crate::constants::analysis::TOP_STRUCTURES;
use crate::types::{Song, StructureCount, StructureProfile};

/// Heuristic classification of one song's structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructureLabel {
    /// At least one trimmed line repeats verbatim.
    VerseChorus,
    /// No repetition, but some line mentions a bridge.
    VerseBridge,
    /// Neither signal present.
    VerseOnly,
}

impl fmt::Display for StructureLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::VerseChorus => "Verse-Chorus",
            Self::VerseBridge => "Verse-Bridge",
            Self::VerseOnly => "Verse-Only",
        };
        write!(f, "{label}")
    }
}

/// Classify a single song from its raw lyrics.
#[must_use]
pub fn detect_structure(lyrics: &str) -> StructureLabel {
    let mut line_counts: HashMap<&str, usize> = HashMap::new();
    for line in lyrics.lines().map(str::trim).filter(|l| !l.is_empty()) {
        *line_counts.entry(line).or_insert(0) += 1;
    }

    if line_counts.values().any(|&count| count > 1) {
        StructureLabel::VerseChorus
    } else if lyrics.lines().any(|l| l.to_lowercase().contains("bridge")) {
        StructureLabel::VerseBridge
    } else {
        StructureLabel::VerseOnly
    }
}

/// Section line counts split into (verse, chorus) samples.
///
/// Sections are delimited by blank lines; even-indexed sections are read
/// as verses and odd-indexed as choruses.
#[must_use]
pub fn section_lengths(lyrics: &str) -> (Vec<usize>, Vec<usize>) {
    let mut sections: Vec<usize> = Vec::new();
    let mut current = 0usize;

    for line in lyrics.lines() {
        if line.trim().is_empty() {
            if current > 0 {
                sections.push(current);
                current = 0;
            }
        } else {
            current += 1;
        }
    }
    if current > 0 {
        sections.push(current);
    }

    let verses = sections.iter().copied().step_by(2).collect();
    let choruses = sections.iter().copied().skip(1).step_by(2).collect();
    (verses, choruses)
}

/// Aggregate structure statistics across a song collection.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn analyze(songs: &[Song]) -> StructureProfile {
    // Label frequency table in first-encounter order.
    let mut labels: Vec<StructureCount> = Vec::new();
    let mut verse_lengths: Vec<usize> = Vec::new();
    let mut chorus_lengths: Vec<usize> = Vec::new();

    for song in songs {
        let label = detect_structure(&song.raw_lyrics).to_string();
        if let Some(entry) = labels.iter_mut().find(|l| l.structure == label) {
            entry.frequency += 1;
        } else {
            labels.push(StructureCount { structure: label, frequency: 1 });
        }

        let (verses, choruses) = section_lengths(&song.raw_lyrics);
        verse_lengths.extend(verses);
        chorus_lengths.extend(choruses);
    }

    let distinct_labels = labels.len();
    labels.sort_by(|a, b| b.frequency.cmp(&a.frequency));
    labels.truncate(TOP_STRUCTURES);

    let mean = |lengths: &[usize]| {
        if lengths.is_empty() {
            0.0
        } else {
            lengths.iter().sum::<usize>() as f64 / lengths.len() as f64
        }
    };

    let structure_diversity = if songs.is_empty() {
        0.0
    } else {
        distinct_labels as f64 / songs.len() as f64
    };

    StructureProfile {
        common_structures: labels,
        avg_verse_length: mean(&verse_lengths),
        avg_chorus_length: mean(&chorus_lengths),
        structure_diversity,
    }
}
