use async_trait::async_trait;
use rand::seq::SliceRandom;
use tracing::{debug, warn};

use crate::itunes::ItunesClient;
use crate::recommend::catalog::MoodCatalog;
use crate::recommend::models::Track;
use crate::tone::Mood;

const STATIC_RECOMMEND_CAP: usize = 3;

/// A source of track recommendations for a mood. The chat layer picks one
/// implementation at startup; tests substitute their own.
///
/// Both methods are infallible by contract: failures inside a backend become
/// an empty list, and callers treat short results as valid.
#[async_trait]
pub trait Recommender: Send + Sync {
    /// Tracks for one chat message. The original text is accepted for
    /// interface symmetry but does not influence selection.
    async fn recommend(&self, mood: Mood, text: &str) -> Vec<Track>;

    /// Bulk playlist for the sidebar, larger than the per-message cut.
    async fn mood_playlist(&self, mood: Mood) -> Vec<Track>;
}

/// Serves shuffled cuts of the curated in-memory catalog.
pub struct StaticBackend {
    catalog: MoodCatalog,
}

impl StaticBackend {
    pub fn new(catalog: MoodCatalog) -> Self {
        Self { catalog }
    }

    fn shuffled_tracks(&self, mood: Mood) -> Vec<Track> {
        let mut tracks = self.catalog.tracks_for(mood).to_vec();
        tracks.shuffle(&mut rand::thread_rng());
        tracks
    }
}

#[async_trait]
impl Recommender for StaticBackend {
    async fn recommend(&self, mood: Mood, _text: &str) -> Vec<Track> {
        let mut tracks = self.shuffled_tracks(mood);
        tracks.truncate(STATIC_RECOMMEND_CAP);
        tracks
    }

    async fn mood_playlist(&self, mood: Mood) -> Vec<Track> {
        self.shuffled_tracks(mood)
    }
}

/// Delegates to the iTunes Search API via a randomly chosen mood synonym.
/// Transport and API failures are absorbed here and come back as an empty
/// list; nothing propagates to the chat layer.
pub struct SearchBackend {
    client: ItunesClient,
    catalog: MoodCatalog,
}

impl SearchBackend {
    pub fn new(client: ItunesClient, catalog: MoodCatalog) -> Self {
        Self { client, catalog }
    }

    fn pick_term(&self, mood: Mood) -> String {
        let terms = self.catalog.search_terms_for(mood);
        terms
            .choose(&mut rand::thread_rng())
            .cloned()
            .unwrap_or_else(|| mood.as_str().to_string())
    }

    async fn search_mood(&self, mood: Mood) -> Vec<Track> {
        let term = self.pick_term(mood);
        debug!("Searching for {} mood with term '{}'", mood, term);

        match self.client.search_mood_term(&term).await {
            Ok(tracks) => tracks,
            Err(e) => {
                warn!("Mood search for '{}' failed: {}", term, e);
                Vec::new()
            }
        }
    }
}

#[async_trait]
impl Recommender for SearchBackend {
    async fn recommend(&self, mood: Mood, _text: &str) -> Vec<Track> {
        self.search_mood(mood).await
    }

    async fn mood_playlist(&self, mood: Mood) -> Vec<Track> {
        self.search_mood(mood).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(tracks: &[Track]) -> Vec<String> {
        tracks.iter().map(|t| t.title.clone()).collect()
    }

    #[tokio::test]
    async fn test_static_recommend_caps_at_three() {
        let backend = StaticBackend::new(MoodCatalog::builtin());
        for mood in Mood::ALL {
            let tracks = backend.recommend(mood, "whatever").await;
            assert!(tracks.len() <= 3);
            assert!(!tracks.is_empty());
        }
    }

    #[tokio::test]
    async fn test_static_recommend_draws_from_mood_list() {
        let catalog = MoodCatalog::builtin();
        let backend = StaticBackend::new(catalog.clone());

        let tracks = backend.recommend(Mood::Excited, "I'm so excited!").await;
        let known = titles(catalog.tracks_for(Mood::Excited));
        for track in &tracks {
            assert!(known.contains(&track.title), "unexpected {}", track.title);
        }
    }

    #[tokio::test]
    async fn test_static_recommend_has_no_duplicate_titles() {
        let backend = StaticBackend::new(MoodCatalog::builtin());
        for _ in 0..20 {
            let tracks = backend.recommend(Mood::Happy, "").await;
            let mut seen = titles(&tracks);
            seen.sort();
            seen.dedup();
            assert_eq!(seen.len(), tracks.len());
        }
    }

    #[tokio::test]
    async fn test_static_playlist_is_whole_mood_list() {
        let catalog = MoodCatalog::builtin();
        let backend = StaticBackend::new(catalog.clone());

        let playlist = backend.mood_playlist(Mood::Sad).await;
        assert_eq!(playlist.len(), 5);

        let mut got = titles(&playlist);
        let mut want = titles(catalog.tracks_for(Mood::Sad));
        got.sort();
        want.sort();
        assert_eq!(got, want);
    }

    #[tokio::test]
    async fn test_mood_playlists_stay_within_their_catalogs() {
        let catalog = MoodCatalog::builtin();
        let backend = StaticBackend::new(catalog.clone());

        let happy = backend.mood_playlist(Mood::Happy).await;
        let sad = backend.mood_playlist(Mood::Sad).await;

        let happy_known = titles(catalog.tracks_for(Mood::Happy));
        let sad_known = titles(catalog.tracks_for(Mood::Sad));
        assert!(happy.iter().all(|t| happy_known.contains(&t.title)));
        assert!(sad.iter().all(|t| sad_known.contains(&t.title)));
    }

    #[tokio::test]
    async fn test_search_backend_never_errors_on_transport_failure() {
        // Nothing listens here, so every request fails at connect time.
        let client = ItunesClient::with_base_url("http://127.0.0.1:9");
        let backend = SearchBackend::new(client, MoodCatalog::builtin());

        let tracks = backend.recommend(Mood::Happy, "feeling great").await;
        assert!(tracks.is_empty());

        let playlist = backend.mood_playlist(Mood::Angry).await;
        assert!(playlist.is_empty());
    }
}
