//! Gemini generative text collaborator.
//!
//! The core's only contract with the model is the structured prompt
//! payload it builds from a style profile and the parsed-sections shape
//! it expects back.

mod api;
pub mod parse;
pub mod prompt;

pub use api::GeminiClient;
pub use parse::Section;

use std::fmt;

use serde::{Deserialize, Serialize};

/// A generated song with its provenance and parsed sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedSong {
    /// Artist whose style conditioned the generation.
    pub artist_style: String,
    /// Requested theme.
    pub theme: String,
    /// Requested emotion, if any.
    pub emotion: Option<String>,
    /// Requested structure, if any.
    pub structure: Option<String>,
    /// Parsed sections in output order.
    pub sections: Vec<Section>,
    /// Unmodified model output.
    pub raw_response: String,
    /// Coarse type/token diversity score in [0, 1].
    pub originality_score: f64,
}

impl fmt::Display for GeneratedSong {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Generated in the style of {}", self.artist_style)?;
        writeln!(f, "Theme: {}", self.theme)?;
        if let Some(emotion) = &self.emotion {
            writeln!(f, "Emotion: {emotion}")?;
        }
        writeln!(f, "Originality: {:.2}", self.originality_score)?;
        for section in &self.sections {
            writeln!(f, "\n[{}]\n{}", section.label, section.body)?;
        }
        Ok(())
    }
}
