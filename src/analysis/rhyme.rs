//! Rhyme-key clustering and scheme detection.
//!
//! Groups line-ending words by a coarse orthographic suffix key and labels
//! simple rhyme schemes from the index spacing within each group. This is
//! deliberately not phonetic analysis; the key is a grapheme heuristic.

use std::collections::HashMap;

use crate::analysis::lexicon::Lexicon;
use crate::analysis::text;
use crate::constants::analysis::TOP_SCHEMES;
use crate::types::{RhymeGroup, RhymeLine, RhymeProfile, SchemeCount};

const VOWELS: &str = "aeiou";

/// Coarse rhyme key for a lower-cased word.
///
/// Words of three or more characters keep their last two characters when
/// the final character is a vowel, otherwise their last three. Shorter
/// words are their own key.
#[must_use]
pub fn rhyme_key(word: &str) -> String {
    let chars: Vec<char> = word.chars().collect();
    if chars.len() >= 3 {
        let take = if VOWELS.contains(chars[chars.len() - 1]) { 2 } else { 3 };
        chars[chars.len() - take..].iter().collect()
    } else {
        word.to_string()
    }
}

/// Cluster the lines of a lyric block by rhyme key and detect schemes.
///
/// Each non-empty line contributes at most its last alphabetic
/// non-stop-word token; lines without one carry no rhyme information.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn analyze(lyrics: &str, lexicon: &Lexicon) -> RhymeProfile {
    let lines = text::lines(lyrics);

    // Groups keep first-encounter order; the map only indexes into them.
    let mut groups: Vec<RhymeGroup> = Vec::new();
    let mut by_key: HashMap<String, usize> = HashMap::new();

    for (line_index, line) in lines.iter().enumerate() {
        let tokens = text::tokenize(line, lexicon);
        let Some(end_word) = tokens.last() else {
            continue;
        };

        let key = rhyme_key(end_word);
        let idx = *by_key.entry(key.clone()).or_insert_with(|| {
            groups.push(RhymeGroup { key, lines: Vec::new() });
            groups.len() - 1
        });
        groups[idx].lines.push(RhymeLine {
            line_index,
            line: (*line).to_string(),
            end_word: end_word.clone(),
        });
    }

    let rhyming_groups = groups.iter().filter(|g| g.lines.len() > 1).count();
    let rhyme_density = rhyming_groups as f64 / groups.len().max(1) as f64;
    let common_schemes = detect_schemes(&groups);

    RhymeProfile {
        total_lines: lines.len(),
        groups,
        rhyme_density,
        common_schemes,
    }
}

/// Label rhyme schemes from group sizes and index spacing.
///
/// Pairs one line apart are "AABB", two apart "ABAB"; groups of four or
/// more are "AAAA". Other spacings stay unlabeled on purpose.
fn detect_schemes(groups: &[RhymeGroup]) -> Vec<SchemeCount> {
    let mut counts: Vec<SchemeCount> = Vec::new();

    for group in groups {
        let label = match group.lines.len() {
            2 => match group.lines[1].line_index - group.lines[0].line_index {
                1 => Some("AABB"),
                2 => Some("ABAB"),
                _ => None,
            },
            n if n >= 4 => Some("AAAA"),
            _ => None,
        };

        if let Some(label) = label {
            if let Some(entry) = counts.iter_mut().find(|c| c.scheme == label) {
                entry.count += 1;
            } else {
                counts.push(SchemeCount { scheme: label.to_string(), count: 1 });
            }
        }
    }

    // Stable sort keeps first-encounter order among ties.
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(TOP_SCHEMES);
    counts
}
