use serde::Deserialize;

use crate::recommend::Track;

/// Mood searches require a preview and a minimum length; free-text searches
/// only require a preview. Caps differ as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    Mood,
    FreeText,
}

impl SearchMode {
    pub fn result_cap(&self) -> usize {
        match self {
            SearchMode::Mood => 10,
            SearchMode::FreeText => 15,
        }
    }

}

const MIN_MOOD_TRACK_MILLIS: u64 = 60_000;

#[derive(Debug, Deserialize)]
pub struct ItunesSearchResponse {
    #[serde(rename = "resultCount", default)]
    pub result_count: u64,
    #[serde(default)]
    pub results: Vec<ItunesApiTrack>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ItunesApiTrack {
    #[serde(rename = "trackId")]
    pub track_id: Option<u64>,
    #[serde(rename = "trackName")]
    pub track_name: Option<String>,
    #[serde(rename = "artistName")]
    pub artist_name: Option<String>,
    #[serde(rename = "collectionName")]
    pub collection_name: Option<String>,
    #[serde(rename = "trackTimeMillis")]
    pub track_time_millis: Option<u64>,
    #[serde(rename = "previewUrl")]
    pub preview_url: Option<String>,
    #[serde(rename = "artworkUrl100")]
    pub artwork_url: Option<String>,
    #[serde(rename = "primaryGenreName")]
    pub genre: Option<String>,
}

impl ItunesApiTrack {
    fn qualifies(&self, mode: SearchMode) -> bool {
        if self.preview_url.is_none() {
            return false;
        }
        match mode {
            SearchMode::Mood => self.track_time_millis.unwrap_or(0) > MIN_MOOD_TRACK_MILLIS,
            SearchMode::FreeText => true,
        }
    }

    fn into_track(self) -> Option<Track> {
        Some(Track {
            title: self.track_name?,
            artist: self.artist_name?,
            album: self.collection_name,
            duration: self.track_time_millis.map(format_duration),
            artwork_url: self.artwork_url,
            preview_url: self.preview_url,
        })
    }
}

/// Apply the mode's preview/duration filter and cap, mapping survivors into
/// the common track shape. Records without a title or artist are dropped.
pub fn qualify_tracks(results: Vec<ItunesApiTrack>, mode: SearchMode) -> Vec<Track> {
    results
        .into_iter()
        .filter(|t| t.qualifies(mode))
        .take(mode.result_cap())
        .filter_map(ItunesApiTrack::into_track)
        .collect()
}

/// Millisecond duration into the "m:ss" form the player shows.
pub fn format_duration(milliseconds: u64) -> String {
    let minutes = milliseconds / 60_000;
    let seconds = (milliseconds % 60_000) / 1000;
    format!("{}:{:02}", minutes, seconds)
}

#[cfg(test)]
impl ItunesApiTrack {
    pub fn mock(title: &str, millis: u64, preview: bool) -> Self {
        Self {
            track_id: Some(1),
            track_name: Some(title.to_string()),
            artist_name: Some("Mock Artist".to_string()),
            collection_name: Some("Mock Album".to_string()),
            track_time_millis: Some(millis),
            preview_url: preview.then(|| "https://example.com/p.m4a".to_string()),
            artwork_url: None,
            genre: Some("Pop".to_string()),
        }
    }
}
