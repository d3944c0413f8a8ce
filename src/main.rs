//! Command-line entry point.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use versecraft::app::App;
use versecraft::config::Config;
use versecraft::error::Result;
use versecraft::gemini::prompt::GenerationRequest;
use versecraft::types::StyleProfile;

#[derive(Parser)]
#[command(name = "versecraft", version, about = "Profile an artist's lyric style and generate songs in it")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build (or reuse) an artist's style profile
    Analyze {
        /// Artist name as known to Genius
        artist: String,
        /// Cap on the number of songs to analyze
        #[arg(long)]
        max_songs: Option<usize>,
        /// Ignore cached songs and profiles
        #[arg(long)]
        refresh: bool,
    },
    /// Generate an original song in an artist's style
    Generate {
        /// Artist whose style conditions the generation
        artist: String,
        /// Theme of the new song
        theme: String,
        /// Desired emotion, overriding the artist's natural tone
        #[arg(long)]
        emotion: Option<String>,
        /// Desired structure, overriding the artist's preference
        #[arg(long)]
        structure: Option<String>,
        /// Rebuild the style profile before generating
        #[arg(long)]
        refresh: bool,
    },
    /// Rewrite an existing song in another artist's style
    Rewrite {
        /// Artist whose style the rewrite should take
        artist: String,
        /// Artist of the original song
        original_artist: String,
        /// Title of the original song
        original_title: String,
        /// New thematic angle, replacing the original's extracted theme
        #[arg(long)]
        angle: Option<String>,
    },
    /// List artists with a persisted style profile
    Artists,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::load()?;
    let app = App::new(config);

    match Cli::parse().command {
        Command::Analyze { artist, max_songs, refresh } => {
            let profile = app.analyze_artist(&artist, max_songs, refresh).await?;
            print_profile(&profile);
        }
        Command::Generate { artist, theme, emotion, structure, refresh } => {
            let request = GenerationRequest {
                theme,
                emotion,
                structure,
                source: None,
            };
            let song = app.generate_song(&artist, request, refresh).await?;
            println!("{song}");
        }
        Command::Rewrite { artist, original_artist, original_title, angle } => {
            let song = app
                .rewrite_song(&artist, &original_artist, &original_title, angle)
                .await?;
            println!("{song}");
        }
        Command::Artists => {
            let profiles = app.analyzed_artists()?;
            if profiles.is_empty() {
                println!("No artists analyzed yet.");
            } else {
                for profile in &profiles {
                    println!(
                        "{} ({} songs)",
                        profile.artist_name, profile.total_songs_analyzed
                    );
                }
            }
        }
    }

    Ok(())
}

/// Print a readable summary of a style profile.
fn print_profile(profile: &StyleProfile) {
    println!("Style profile: {}", profile.artist_name);
    println!("Songs analyzed: {}", profile.total_songs_analyzed);
    println!();

    let vocab = &profile.vocabulary_profile;
    println!(
        "Vocabulary: {} unique / {} total words (richness {:.2})",
        vocab.unique_words, vocab.total_words, vocab.vocabulary_richness
    );
    let top: Vec<&str> = vocab
        .most_common_words
        .iter()
        .take(10)
        .map(|w| w.word.as_str())
        .collect();
    if !top.is_empty() {
        println!("Top words: {}", top.join(", "));
    }
    println!();

    let sentiment = &profile.sentiment_profile;
    println!(
        "Average sentiment: {:.3} compound",
        sentiment.average_sentiment.compound
    );
    for theme in sentiment.dominant_themes.iter().take(5) {
        println!("  theme {}: {:.1}%", theme.theme, theme.percentage);
    }
    println!();

    if let Some(top_structure) = profile.structure_profile.common_structures.first() {
        println!(
            "Most common structure: {} ({} songs)",
            top_structure.structure, top_structure.frequency
        );
    }
    for scheme in &profile.rhyme_profile.common_schemes {
        println!("  rhyme scheme {}: {}", scheme.scheme, scheme.count);
    }
    println!();

    println!("{}", profile.writing_style_summary);
}
