use rand::seq::SliceRandom;

use crate::recommend::catalog::MoodCatalog;
use crate::tone::Mood;

/// Pick a chat reply for the detected mood, uniformly from its phrase bank.
pub fn phrase_for(catalog: &MoodCatalog, mood: Mood) -> String {
    catalog
        .phrases_for(mood)
        .choose(&mut rand::thread_rng())
        .cloned()
        .unwrap_or_default()
}
