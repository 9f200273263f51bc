use reqwest::Client;
use tracing::{debug, warn};

use crate::config::DEFAULT_ITUNES_BASE_URL;
use crate::error::{AppError, Result};
use crate::itunes::models::{qualify_tracks, ItunesApiTrack, ItunesSearchResponse, SearchMode};
use crate::recommend::Track;

const SEARCH_LIMIT: u32 = 20;

/// Thin client over the iTunes Search API. No auth; one GET per call.
pub struct ItunesClient {
    http_client: Client,
    base_url: String,
}

impl ItunesClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_ITUNES_BASE_URL)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            http_client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Search by a mood synonym. Results must carry a preview and be longer
    /// than a minute; up to 10 are returned.
    pub async fn search_mood_term(&self, term: &str) -> Result<Vec<Track>> {
        let results = self.search(term).await?;
        Ok(qualify_tracks(results, SearchMode::Mood))
    }

    /// Free-text search. Results must carry a preview; up to 15 are returned.
    pub async fn search_query(&self, query: &str) -> Result<Vec<Track>> {
        let results = self.search(query).await?;
        Ok(qualify_tracks(results, SearchMode::FreeText))
    }

    async fn search(&self, term: &str) -> Result<Vec<ItunesApiTrack>> {
        let url = format!("{}/search", self.base_url);

        debug!("Searching iTunes for term: {}", term);

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("term", term),
                ("media", "music"),
                ("entity", "song"),
                ("limit", &SEARCH_LIMIT.to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            warn!("iTunes search failed ({}): {}", status, error_text);
            return Err(AppError::ItunesApi(format!(
                "search returned {}",
                status
            )));
        }

        let search_response: ItunesSearchResponse = response.json().await?;

        debug!(
            "iTunes returned {} results for '{}'",
            search_response.result_count, term
        );

        Ok(search_response.results)
    }
}

impl Default for ItunesClient {
    fn default() -> Self {
        Self::new()
    }
}
