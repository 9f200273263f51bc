use crate::recommend::models::Track;
use crate::tone::Mood;

/// Everything the recommender knows about one mood: the curated track list,
/// the search-term synonyms for the iTunes backend, and the chat phrase bank.
#[derive(Debug, Clone)]
pub struct MoodEntry {
    pub tracks: Vec<Track>,
    pub search_terms: Vec<String>,
    pub phrases: Vec<String>,
}

/// Immutable per-mood lookup data, built once at startup and passed into the
/// backends so tests can substitute fixtures.
#[derive(Debug, Clone)]
pub struct MoodCatalog {
    happy: MoodEntry,
    sad: MoodEntry,
    angry: MoodEntry,
    excited: MoodEntry,
    neutral: MoodEntry,
}

impl MoodCatalog {
    pub fn entry(&self, mood: Mood) -> &MoodEntry {
        match mood {
            Mood::Happy => &self.happy,
            Mood::Sad => &self.sad,
            Mood::Angry => &self.angry,
            Mood::Excited => &self.excited,
            Mood::Neutral => &self.neutral,
        }
    }

    pub fn tracks_for(&self, mood: Mood) -> &[Track] {
        &self.entry(mood).tracks
    }

    pub fn search_terms_for(&self, mood: Mood) -> &[String] {
        &self.entry(mood).search_terms
    }

    pub fn phrases_for(&self, mood: Mood) -> &[String] {
        &self.entry(mood).phrases
    }

    pub fn builtin() -> Self {
        Self {
            happy: MoodEntry {
                tracks: vec![
                    Track::curated("Happy", "Pharrell Williams", "Girl", "3:53"),
                    Track::curated("Good as Hell", "Lizzo", "Cuz I Love You", "2:39"),
                    Track::curated(
                        "Can't Stop the Feeling!",
                        "Justin Timberlake",
                        "Trolls Soundtrack",
                        "3:56",
                    ),
                    Track::curated(
                        "Walking on Sunshine",
                        "Katrina and the Waves",
                        "Walking on Sunshine",
                        "3:59",
                    ),
                    Track::curated("I Gotta Feeling", "The Black Eyed Peas", "The E.N.D.", "4:05"),
                ],
                search_terms: strings(&["happy", "upbeat", "joy", "celebration", "dance", "pop"]),
                phrases: strings(&[
                    "That's wonderful! I can feel the positive energy in your message!",
                    "I love your enthusiasm! It's contagious!",
                    "Your happiness is radiating through the screen!",
                ]),
            },
            sad: MoodEntry {
                tracks: vec![
                    Track::curated("Someone Like You", "Adele", "21", "4:45"),
                    Track::curated(
                        "Hurt",
                        "Johnny Cash",
                        "American IV: The Man Comes Around",
                        "3:38",
                    ),
                    Track::curated("Mad World", "Gary Jules", "Donnie Darko Soundtrack", "3:07"),
                    Track::curated(
                        "The Sound of Silence",
                        "Simon & Garfunkel",
                        "Sounds of Silence",
                        "3:05",
                    ),
                    Track::curated(
                        "Everybody Hurts",
                        "R.E.M.",
                        "Automatic for the People",
                        "5:17",
                    ),
                ],
                search_terms: strings(&[
                    "sad",
                    "melancholy",
                    "heartbreak",
                    "slow",
                    "emotional",
                    "ballad",
                ]),
                phrases: strings(&[
                    "I hear you, and I'm here for you. Sometimes music can help us process these feelings.",
                    "It sounds like you're going through a tough time. Let me find something that might comfort you.",
                    "I understand. Music has a way of helping us feel less alone.",
                ]),
            },
            angry: MoodEntry {
                tracks: vec![
                    Track::curated("Break Stuff", "Limp Bizkit", "Significant Other", "2:47"),
                    Track::curated(
                        "Killing in the Name",
                        "Rage Against the Machine",
                        "Rage Against the Machine",
                        "5:14",
                    ),
                    Track::curated("Stronger", "Kelly Clarkson", "Stronger", "3:42"),
                    Track::curated("Fighter", "Christina Aguilera", "Stripped", "4:05"),
                    Track::curated("Since U Been Gone", "Kelly Clarkson", "Breakaway", "3:08"),
                ],
                search_terms: strings(&[
                    "rock",
                    "metal",
                    "punk",
                    "aggressive",
                    "hardcore",
                    "rage",
                ]),
                phrases: strings(&[
                    "I can sense the intensity in your message. Sometimes we need music that matches our energy.",
                    "Strong emotions deserve powerful music. Let me find something that fits.",
                    "I get it - sometimes we need to feel our feelings fully. Music can help with that.",
                ]),
            },
            excited: MoodEntry {
                tracks: vec![
                    Track::curated(
                        "Uptown Funk",
                        "Mark Ronson ft. Bruno Mars",
                        "Uptown Special",
                        "4:30",
                    ),
                    Track::curated(
                        "Can't Hold Us",
                        "Macklemore & Ryan Lewis",
                        "The Heist",
                        "4:18",
                    ),
                    Track::curated("Pump It", "The Black Eyed Peas", "Monkey Business", "3:33"),
                    Track::curated("Thunder", "Imagine Dragons", "Evolve", "3:07"),
                    Track::curated(
                        "High Hopes",
                        "Panic! At The Disco",
                        "Pray for the Wicked",
                        "3:01",
                    ),
                ],
                search_terms: strings(&[
                    "energetic",
                    "pump up",
                    "electronic",
                    "party",
                    "hype",
                    "workout",
                ]),
                phrases: strings(&[
                    "Your excitement is infectious! I love the energy!",
                    "Wow, I can feel your enthusiasm! This calls for some upbeat tunes!",
                    "That energy is amazing! Let's find music that matches it!",
                ]),
            },
            neutral: MoodEntry {
                tracks: vec![
                    Track::curated("Counting Stars", "OneRepublic", "Native", "4:17"),
                    Track::curated("Perfect", "Ed Sheeran", "Divide", "4:23"),
                    Track::curated("Shape of You", "Ed Sheeran", "Divide", "3:53"),
                    Track::curated("Blinding Lights", "The Weeknd", "After Hours", "3:20"),
                    Track::curated("Watermelon Sugar", "Harry Styles", "Fine Line", "2:54"),
                ],
                search_terms: strings(&[
                    "ambient",
                    "chill",
                    "indie",
                    "alternative",
                    "focus",
                    "study",
                ]),
                phrases: strings(&[
                    "Thanks for sharing! Let me find something that might brighten your day.",
                    "I'm listening! Music can often help us discover how we're really feeling.",
                    "Interesting! Let me pick something that might resonate with you.",
                ]),
            },
        }
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_mood_has_full_entries() {
        let catalog = MoodCatalog::builtin();
        for mood in Mood::ALL {
            let entry = catalog.entry(mood);
            assert_eq!(entry.tracks.len(), 5, "{} tracks", mood);
            assert_eq!(entry.search_terms.len(), 6, "{} search terms", mood);
            assert_eq!(entry.phrases.len(), 3, "{} phrases", mood);
        }
    }

    #[test]
    fn test_curated_titles_are_unique_per_mood() {
        let catalog = MoodCatalog::builtin();
        for mood in Mood::ALL {
            let tracks = catalog.tracks_for(mood);
            for (i, a) in tracks.iter().enumerate() {
                for b in &tracks[i + 1..] {
                    assert_ne!(a, b, "duplicate title in {} list", mood);
                }
            }
        }
    }

    #[test]
    fn test_excited_list_contents() {
        let catalog = MoodCatalog::builtin();
        let titles: Vec<_> = catalog
            .tracks_for(Mood::Excited)
            .iter()
            .map(|t| t.title.as_str())
            .collect();
        assert_eq!(
            titles,
            ["Uptown Funk", "Can't Hold Us", "Pump It", "Thunder", "High Hopes"]
        );
    }
}
