use chrono::{DateTime, Local};
use tracing::{debug, info};

use crate::recommend::{phrase_for, MoodCatalog, Recommender, Track};
use crate::tone::{classify, Mood};

const RECENT_CAP: usize = 20;

const GREETING: &str = "Hi! I'm your music companion. Tell me how you're feeling \
or what's on your mind, and I'll recommend some songs that match your vibe!";

const FALLBACK_REPLY: &str =
    "I'm having trouble finding songs right now. Could you try rephrasing that?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub sender: Sender,
    pub text: String,
    pub timestamp: DateTime<Local>,
    pub mood: Option<Mood>,
}

impl Message {
    fn bot(text: impl Into<String>, mood: Option<Mood>) -> Self {
        Self {
            sender: Sender::Bot,
            text: text.into(),
            timestamp: Local::now(),
            mood,
        }
    }

    fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
            timestamp: Local::now(),
            mood: None,
        }
    }
}

/// One chat conversation: transcript, the current playlist, and the
/// recently recommended tracks (capped, deduped by title).
pub struct ChatSession {
    recommender: Box<dyn Recommender>,
    catalog: MoodCatalog,
    messages: Vec<Message>,
    playlist: Vec<Track>,
    recent: Vec<Track>,
}

impl ChatSession {
    pub fn new(recommender: Box<dyn Recommender>, catalog: MoodCatalog) -> Self {
        Self {
            recommender,
            catalog,
            messages: vec![Message::bot(GREETING, None)],
            playlist: Vec::new(),
            recent: Vec::new(),
        }
    }

    /// Run one chat turn: classify, reply, recommend. Returns the bot
    /// messages produced for this turn.
    pub async fn handle_message(&mut self, text: &str) -> Vec<Message> {
        self.messages.push(Message::user(text));

        let mood = classify(text);
        debug!("Detected mood: {}", mood);

        let mut replies = vec![Message::bot(phrase_for(&self.catalog, mood), Some(mood))];

        let mut tracks = self.recommender.recommend(mood, text).await;
        if tracks.is_empty() && mood != Mood::Neutral {
            // Empty result is valid; fall back to the neutral mood once.
            debug!("No tracks for {}, retrying neutral", mood);
            tracks = self.recommender.recommend(Mood::Neutral, text).await;
        }

        if tracks.is_empty() {
            replies.push(Message::bot(FALLBACK_REPLY, Some(mood)));
        } else {
            let first = &tracks[0];
            info!("Recommending {} for {} mood", first, mood);
            replies.push(Message::bot(
                format!(
                    "Based on your {} mood, I recommend: {}. Perfect for how you're feeling!",
                    mood, first
                ),
                Some(mood),
            ));
            self.remember(&tracks);
            self.playlist = tracks;
        }

        self.messages.extend(replies.iter().cloned());
        replies
    }

    /// Bulk playlist for a mood, bypassing classification.
    pub async fn mood_playlist(&self, mood: Mood) -> Vec<Track> {
        self.recommender.mood_playlist(mood).await
    }

    fn remember(&mut self, tracks: &[Track]) {
        for track in tracks {
            self.recent.retain(|seen| seen != track);
            self.recent.insert(0, track.clone());
        }
        self.recent.truncate(RECENT_CAP);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn playlist(&self) -> &[Track] {
        &self.playlist
    }

    pub fn now_playing(&self) -> Option<&Track> {
        self.playlist.first()
    }

    pub fn recent_tracks(&self) -> &[Track] {
        &self.recent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    /// Backend fixture: fixed tracks per mood, nothing for the rest.
    struct FixtureBackend {
        mood: Mood,
        tracks: Vec<Track>,
    }

    #[async_trait]
    impl Recommender for FixtureBackend {
        async fn recommend(&self, mood: Mood, _text: &str) -> Vec<Track> {
            if mood == self.mood {
                self.tracks.clone()
            } else {
                Vec::new()
            }
        }

        async fn mood_playlist(&self, mood: Mood) -> Vec<Track> {
            self.recommend(mood, "").await
        }
    }

    fn session_with(mood: Mood, tracks: Vec<Track>) -> ChatSession {
        ChatSession::new(
            Box::new(FixtureBackend { mood, tracks }),
            MoodCatalog::builtin(),
        )
    }

    #[tokio::test]
    async fn test_turn_produces_phrase_and_recommendation() {
        let mut session = session_with(
            Mood::Excited,
            vec![Track::mock("Thunder", "Imagine Dragons")],
        );

        let replies = session.handle_message("I'm so excited about my trip!").await;

        assert_eq!(replies.len(), 2);
        assert_eq!(replies[0].mood, Some(Mood::Excited));
        assert!(replies[1].text.contains("excited"));
        assert!(replies[1].text.contains("Thunder"));
        assert_eq!(session.now_playing().unwrap().title, "Thunder");
    }

    #[tokio::test]
    async fn test_empty_result_falls_back_to_neutral() {
        let mut session = session_with(
            Mood::Neutral,
            vec![Track::mock("Counting Stars", "OneRepublic")],
        );

        let replies = session.handle_message("I'm feeling sad today").await;

        // Sad returned nothing, neutral filled in.
        assert!(replies[1].text.contains("Counting Stars"));
        assert_eq!(session.playlist().len(), 1);
    }

    #[tokio::test]
    async fn test_no_tracks_anywhere_yields_fallback_reply() {
        let mut session = session_with(Mood::Happy, Vec::new());

        let replies = session.handle_message("nothing matches here").await;

        assert_eq!(replies.len(), 2);
        assert!(replies[1].text.contains("trouble"));
        assert!(session.playlist().is_empty());
    }

    #[tokio::test]
    async fn test_recent_list_caps_and_dedupes_by_title() {
        let tracks: Vec<_> = (0..30)
            .map(|i| Track::mock(&format!("Song {}", i), "Artist"))
            .collect();
        let mut session = session_with(Mood::Happy, tracks);

        session.handle_message("feeling happy").await;
        assert_eq!(session.recent_tracks().len(), RECENT_CAP);

        // A repeat recommendation moves the track, it does not duplicate it.
        session.handle_message("still happy").await;
        assert_eq!(session.recent_tracks().len(), RECENT_CAP);
    }

    #[tokio::test]
    async fn test_transcript_records_both_sides() {
        let mut session = session_with(Mood::Happy, vec![Track::mock("Happy", "Pharrell")]);

        session.handle_message("feeling happy").await;

        let messages = session.messages();
        // Greeting, user message, phrase, recommendation.
        assert_eq!(messages.len(), 4);
        assert_eq!(messages[1].sender, Sender::User);
        assert_eq!(messages[3].sender, Sender::Bot);
    }
}
