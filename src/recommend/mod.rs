pub mod backend;
pub mod catalog;
pub mod models;
pub mod responder;

pub use backend::{Recommender, SearchBackend, StaticBackend};
pub use catalog::{MoodCatalog, MoodEntry};
pub use models::Track;
pub use responder::phrase_for;
