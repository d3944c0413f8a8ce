//! Application orchestrator.
//!
//! Ties the lyrics provider, the analysis pipeline, the generator and
//! the caches together. Cache hits always short-circuit re-fetching and
//! re-analysis; `refresh` bypasses them and replaces the stored values
//! wholesale.

use std::path::Path;

use crate::analysis::{Lexicon, LexiconScorer, ProfileBuilder, SentimentScorer};
use crate::cache::{self, CacheStore, FileCache};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::gemini::prompt::{self, GenerationRequest, SourceContext};
use crate::gemini::{parse, GeminiClient, GeneratedSong};
use crate::genius::{GeniusClient, LyricsProvider};
use crate::types::{Song, StyleProfile};

/// The assembled application.
pub struct App {
    config: Config,
    lexicon: Lexicon,
    provider: Box<dyn LyricsProvider + Send + Sync>,
    scorer: Box<dyn SentimentScorer + Send + Sync>,
    generator: GeminiClient,
    songs_cache: Box<dyn CacheStore + Send + Sync>,
    profile_cache: Box<dyn CacheStore + Send + Sync>,
}

impl App {
    /// Wire the application with its real collaborators.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let provider = Box::new(GeniusClient::new(&config));
        let generator = GeminiClient::new(&config);
        let songs_cache = Box::new(FileCache::new(config.lyrics_cache_dir()));
        let profile_cache = Box::new(FileCache::new(config.profiles_dir()));
        Self {
            config,
            lexicon: Lexicon::default(),
            provider,
            scorer: Box::new(LexiconScorer::new()),
            generator,
            songs_cache,
            profile_cache,
        }
    }

    /// Wire the application with injected collaborators, for tests.
    #[must_use]
    pub fn with_parts(
        config: Config,
        provider: Box<dyn LyricsProvider + Send + Sync>,
        scorer: Box<dyn SentimentScorer + Send + Sync>,
        songs_cache: Box<dyn CacheStore + Send + Sync>,
        profile_cache: Box<dyn CacheStore + Send + Sync>,
    ) -> Self {
        let generator = GeminiClient::new(&config);
        Self {
            config,
            lexicon: Lexicon::default(),
            provider,
            scorer,
            generator,
            songs_cache,
            profile_cache,
        }
    }

    /// The loaded configuration.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Analyze an artist's corpus into a style profile.
    ///
    /// A cached profile short-circuits the whole pipeline unless
    /// `refresh` is set. The resulting profile is persisted wholesale.
    pub async fn analyze_artist(
        &self,
        artist: &str,
        max_songs: Option<usize>,
        refresh: bool,
    ) -> Result<StyleProfile> {
        let key = cache::normalize_key(artist);

        if !refresh {
            if let Some(profile) = cache::get_json::<StyleProfile>(&*self.profile_cache, &key)? {
                tracing::info!("Using cached style profile for {artist}");
                return Ok(profile);
            }
        }

        let max_songs = max_songs.unwrap_or(self.config.max_songs);
        let songs = self.artist_songs(artist, max_songs, refresh).await?;

        let builder = ProfileBuilder::new(&self.lexicon, &*self.scorer);
        let profile = builder.build(artist, &songs);

        cache::put_json(&*self.profile_cache, &key, &profile)?;
        Ok(profile)
    }

    /// Fetch an artist's songs, serving from the song cache when possible.
    async fn artist_songs(
        &self,
        artist: &str,
        max_songs: usize,
        refresh: bool,
    ) -> Result<Vec<Song>> {
        let key = cache::normalize_key(artist);

        if !refresh {
            if let Some(songs) = cache::get_json::<Vec<Song>>(&*self.songs_cache, &key)? {
                tracing::info!("Using {} cached songs for {artist}", songs.len());
                return Ok(songs);
            }
        }

        let songs = self.provider.fetch_artist_songs(artist, max_songs).await?;
        cache::put_json(&*self.songs_cache, &key, &songs)?;
        Ok(songs)
    }

    /// Generate an original song in an artist's style.
    pub async fn generate_song(
        &self,
        artist: &str,
        request: GenerationRequest,
        refresh: bool,
    ) -> Result<GeneratedSong> {
        let profile = self.analyze_artist(artist, None, refresh).await?;
        if profile.total_songs_analyzed == 0 {
            return Err(Error::artist_not_found(artist));
        }

        tracing::info!("Generating a song in the style of {artist}, theme '{}'", request.theme);

        let style = prompt::style_description(&profile);
        let full_prompt = prompt::generation_prompt(&style, &request);
        let raw = self.generator.generate(&full_prompt).await?;

        let sections = parse::parse_sections(&raw);
        let originality_score = parse::originality_score(&sections);

        let song = GeneratedSong {
            artist_style: profile.artist_name,
            theme: request.theme,
            emotion: request.emotion,
            structure: request.structure,
            sections,
            raw_response: raw,
            originality_score,
        };

        self.save_generated(&song)?;
        Ok(song)
    }

    /// Rewrite an existing song in another artist's style.
    ///
    /// Only the coarse theme and emotion of the original carry over; the
    /// prompt forbids reusing its actual content.
    pub async fn rewrite_song(
        &self,
        target_artist: &str,
        original_artist: &str,
        original_title: &str,
        new_angle: Option<String>,
    ) -> Result<GeneratedSong> {
        let original = self.provider.fetch_song(original_artist, original_title).await?;
        tracing::info!("Rewriting '{}' in the style of {target_artist}", original.title);

        let theme = new_angle
            .unwrap_or_else(|| prompt::extract_theme(&original.cleaned_lyrics, &self.lexicon));
        let emotion = prompt::extract_emotion(&original.cleaned_lyrics);

        let request = GenerationRequest {
            theme: theme.clone(),
            emotion: Some(emotion.clone()),
            structure: None,
            source: Some(SourceContext {
                title: original.title,
                theme,
                emotion,
            }),
        };

        self.generate_song(target_artist, request, false).await
    }

    /// List the style profiles persisted so far, sorted by artist name.
    pub fn analyzed_artists(&self) -> Result<Vec<StyleProfile>> {
        let dir = self.config.profiles_dir();
        let entries = match fs_err::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(Error::io(e, dir)),
        };

        let mut profiles: Vec<StyleProfile> = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().is_none_or(|e| e != "json") {
                continue;
            }
            match read_profile(&path) {
                Ok(profile) => profiles.push(profile),
                Err(e) => tracing::warn!("Skipping unreadable profile {}: {e}", path.display()),
            }
        }

        profiles.sort_by(|a, b| a.artist_name.cmp(&b.artist_name));
        Ok(profiles)
    }

    /// Persist a generated song under the output directory.
    fn save_generated(&self, song: &GeneratedSong) -> Result<()> {
        let dir = self.config.generated_dir();
        fs_err::create_dir_all(&dir).map_err(|e| Error::io(e, dir.clone()))?;

        let filename = format!(
            "{}_{}.json",
            cache::normalize_key(&song.artist_style),
            cache::normalize_key(&song.theme),
        );
        let path = dir.join(filename);

        let blob = serde_json::to_string_pretty(song)
            .map_err(|e| Error::parse("generated song", e.to_string()))?;
        fs_err::write(&path, blob).map_err(|e| Error::io(e, path.clone()))?;

        tracing::info!("Saved generated song to {}", path.display());
        Ok(())
    }
}

/// Read one persisted profile from disk.
fn read_profile(path: &Path) -> Result<StyleProfile> {
    let blob = fs_err::read_to_string(path).map_err(|e| Error::io(e, path.to_path_buf()))?;
    serde_json::from_str(&blob).map_err(|e| Error::parse(path.display().to_string(), e.to_string()))
}
