//! End-to-end style profiling through the orchestrator, with a stub
//! lyrics provider and in-memory caches.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use versecraft::analysis::LexiconScorer;
use versecraft::app::App;
use versecraft::cache::{CacheStore, FileCache, MemoryCache};
use versecraft::config::Config;
use versecraft::error::{Error, Result};
use versecraft::gemini::prompt::GenerationRequest;
use versecraft::genius::LyricsProvider;
use versecraft::types::Song;

/// Provider serving a fixed corpus and counting fetches.
struct StubProvider {
    calls: Arc<AtomicUsize>,
    songs: Vec<Song>,
}

#[async_trait]
impl LyricsProvider for StubProvider {
    async fn fetch_artist_songs(&self, _artist: &str, max_songs: usize) -> Result<Vec<Song>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.songs.iter().take(max_songs).cloned().collect())
    }

    async fn fetch_song(&self, artist: &str, title: &str) -> Result<Song> {
        self.songs
            .iter()
            .find(|s| s.title.eq_ignore_ascii_case(title))
            .cloned()
            .ok_or_else(|| Error::song_not_found(artist, title))
    }
}

fn corpus() -> Vec<Song> {
    vec![
        Song::new(
            "Night Light",
            "Test Artist",
            "love in the night\ndancing in the light\n\nlove stays bright\nholding on tight",
            "love in the night\ndancing in the light\nlove stays bright\nholding on tight",
        ),
        Song::new(
            "Pain and Rain",
            "Test Artist",
            "pain in the rain\nlove hides the pain",
            "pain in the rain\nlove hides the pain",
        ),
    ]
}

fn test_app(songs: Vec<Song>, calls: Arc<AtomicUsize>, data_dir: &std::path::Path) -> App {
    let config = Config::default().with_data_dir(data_dir);

    App::with_parts(
        config,
        Box::new(StubProvider { calls, songs }),
        Box::new(LexiconScorer::new()),
        Box::new(MemoryCache::new()),
        Box::new(MemoryCache::new()),
    )
}

#[tokio::test]
async fn builds_profile_from_fetched_songs() {
    let dir = tempfile::tempdir().unwrap();
    let calls = Arc::new(AtomicUsize::new(0));
    let app = test_app(corpus(), Arc::clone(&calls), dir.path());

    let profile = app.analyze_artist("Test Artist", None, false).await.unwrap();

    assert_eq!(profile.artist_name, "Test Artist");
    assert_eq!(profile.total_songs_analyzed, 2);
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    let vocab = &profile.vocabulary_profile;
    assert!(vocab.total_words > 0);
    assert!(vocab.vocabulary_richness > 0.0 && vocab.vocabulary_richness <= 1.0);
    assert_eq!(vocab.most_common_words.first().map(|w| w.word.as_str()), Some("love"));

    let love = profile
        .sentiment_profile
        .dominant_themes
        .iter()
        .find(|t| t.theme == "love");
    assert!(love.is_some());

    // night/light/bright/tight all share one rhyme key
    assert!(profile.rhyme_profile.rhyme_density > 0.0);
    assert!(!profile.writing_style_summary.is_empty());
}

#[tokio::test]
async fn max_songs_caps_the_analyzed_corpus() {
    let dir = tempfile::tempdir().unwrap();
    let calls = Arc::new(AtomicUsize::new(0));
    let app = test_app(corpus(), calls, dir.path());

    let profile = app.analyze_artist("Test Artist", Some(1), false).await.unwrap();
    assert_eq!(profile.total_songs_analyzed, 1);
}

#[tokio::test]
async fn cached_profile_short_circuits_refetch() {
    let dir = tempfile::tempdir().unwrap();
    let calls = Arc::new(AtomicUsize::new(0));
    let app = test_app(corpus(), Arc::clone(&calls), dir.path());

    let first = app.analyze_artist("Test Artist", None, false).await.unwrap();
    let second = app.analyze_artist("Test Artist", None, false).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    // A refresh bypasses both caches and refetches.
    let third = app.analyze_artist("Test Artist", None, true).await.unwrap();
    assert_eq!(third, first);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn repeated_analysis_is_bit_identical() {
    let dir = tempfile::tempdir().unwrap();
    let calls = Arc::new(AtomicUsize::new(0));
    let app = test_app(corpus(), calls, dir.path());

    let first = app.analyze_artist("Test Artist", None, true).await.unwrap();
    let second = app.analyze_artist("Test Artist", None, true).await.unwrap();

    let first_json = serde_json::to_string(&first).unwrap();
    let second_json = serde_json::to_string(&second).unwrap();
    assert_eq!(first_json, second_json);
}

#[tokio::test]
async fn empty_corpus_yields_empty_profile_and_blocks_generation() {
    let dir = tempfile::tempdir().unwrap();
    let calls = Arc::new(AtomicUsize::new(0));
    let app = test_app(Vec::new(), calls, dir.path());

    let profile = app.analyze_artist("Nobody", None, false).await.unwrap();
    assert_eq!(profile.total_songs_analyzed, 0);

    let request = GenerationRequest {
        theme: "anything".to_string(),
        ..GenerationRequest::default()
    };
    let err = app.generate_song("Nobody", request, false).await.unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }));
}

#[tokio::test]
async fn analyzed_artists_lists_persisted_profiles_sorted() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::default().with_data_dir(dir.path());

    let calls = Arc::new(AtomicUsize::new(0));
    let app = App::with_parts(
        config.clone(),
        Box::new(StubProvider { calls, songs: corpus() }),
        Box::new(LexiconScorer::new()),
        Box::new(MemoryCache::new()),
        Box::new(FileCache::new(config.profiles_dir())),
    );

    assert!(app.analyzed_artists().unwrap().is_empty());

    app.analyze_artist("Zeta", None, false).await.unwrap();
    app.analyze_artist("Alpha", None, false).await.unwrap();

    let names: Vec<String> = app
        .analyzed_artists()
        .unwrap()
        .into_iter()
        .map(|p| p.artist_name)
        .collect();
    assert_eq!(names, vec!["Alpha".to_string(), "Zeta".to_string()]);
}

#[tokio::test]
async fn song_cache_serves_second_analysis_after_profile_refresh() {
    let dir = tempfile::tempdir().unwrap();
    let calls = Arc::new(AtomicUsize::new(0));

    let config = Config::default().with_data_dir(dir.path());
    let songs_cache = Box::new(MemoryCache::new());

    let app = App::with_parts(
        config,
        Box::new(StubProvider { calls: Arc::clone(&calls), songs: corpus() }),
        Box::new(LexiconScorer::new()),
        songs_cache,
        Box::new(MemoryCache::new()),
    );

    app.analyze_artist("Test Artist", None, false).await.unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    // Refresh bypasses the song cache too; the stale corpus is replaced.
    app.analyze_artist("Test Artist", None, true).await.unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn memory_cache_is_usable_as_a_trait_object() {
    let cache = MemoryCache::new();
    let store: &dyn CacheStore = &cache;
    store.put("k", "v").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
}
