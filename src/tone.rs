use serde::{Deserialize, Serialize};

/// The closed set of moods a message can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Sad,
    Angry,
    Excited,
    Neutral,
}

impl Mood {
    pub const ALL: [Mood; 5] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Angry,
        Mood::Excited,
        Mood::Neutral,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Angry => "angry",
            Mood::Excited => "excited",
            Mood::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "happy" => Ok(Mood::Happy),
            "sad" => Ok(Mood::Sad),
            "angry" => Ok(Mood::Angry),
            "excited" => Ok(Mood::Excited),
            "neutral" => Ok(Mood::Neutral),
            other => Err(format!(
                "unknown mood '{}', expected one of: happy, sad, angry, excited, neutral",
                other
            )),
        }
    }
}

/// Keyword sets checked in priority order. The first set with any substring
/// hit wins, so a message mixing moods resolves to the earliest entry here.
const KEYWORD_SETS: [(Mood, &[&str]); 4] = [
    (
        Mood::Happy,
        &[
            "happy",
            "great",
            "awesome",
            "amazing",
            "wonderful",
            "love",
            "fantastic",
            "perfect",
        ],
    ),
    (
        Mood::Sad,
        &[
            "sad",
            "down",
            "depressed",
            "tired",
            "exhausted",
            "lonely",
            "hurt",
            "broken",
            "cry",
        ],
    ),
    (
        Mood::Angry,
        &[
            "angry",
            "mad",
            "frustrated",
            "annoyed",
            "hate",
            "furious",
            "pissed",
            "irritated",
        ],
    ),
    (
        Mood::Excited,
        &[
            "excited", "pumped", "energetic", "thrilled", "hyped", "pumped up",
        ],
    ),
];

/// Classify free text into a mood by case-folded substring matching.
///
/// Matching is containment, not whole-word: "unhappy" hits the happy set.
/// Always returns a mood; anything without a keyword hit is neutral.
pub fn classify(text: &str) -> Mood {
    let lower = text.to_lowercase();

    for (mood, keywords) in KEYWORD_SETS {
        if keywords.iter().any(|keyword| lower.contains(keyword)) {
            return mood;
        }
    }

    Mood::Neutral
}
