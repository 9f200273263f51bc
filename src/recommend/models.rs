use serde::{Deserialize, Serialize};

/// A recommendable song. Tracks come from either the curated catalog or the
/// iTunes search API, so no unique id is guaranteed across sources.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub title: String,
    pub artist: String,
    pub album: Option<String>,
    pub duration: Option<String>,
    pub artwork_url: Option<String>,
    pub preview_url: Option<String>,
}

// "Already seen" equality is by title only; the same song surfaced by the
// catalog and by search carries different metadata.
impl PartialEq for Track {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
    }
}

impl Eq for Track {}

impl Track {
    pub fn curated(title: &str, artist: &str, album: &str, duration: &str) -> Self {
        Self {
            title: title.to_string(),
            artist: artist.to_string(),
            album: Some(album.to_string()),
            duration: Some(duration.to_string()),
            artwork_url: None,
            preview_url: None,
        }
    }
}

impl std::fmt::Display for Track {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\" by {}", self.title, self.artist)?;
        if let Some(duration) = &self.duration {
            write!(f, " ({})", duration)?;
        }
        Ok(())
    }
}

#[cfg(test)]
impl Track {
    pub fn mock(title: &str, artist: &str) -> Self {
        Self {
            title: title.to_string(),
            artist: artist.to_string(),
            album: Some("Mock Album".to_string()),
            duration: Some("3:00".to_string()),
            artwork_url: None,
            preview_url: Some("https://example.com/preview.m4a".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_is_by_title_only() {
        let a = Track::mock("Thunder", "Imagine Dragons");
        let mut b = Track::mock("Thunder", "Someone Else");
        b.album = None;
        assert_eq!(a, b);

        let c = Track::mock("High Hopes", "Imagine Dragons");
        assert_ne!(a, c);
    }
}
