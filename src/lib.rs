pub mod config;
pub mod error;
pub mod itunes;
pub mod recommend;
pub mod session;
pub mod tone;

pub use config::{BackendKind, Config};
pub use error::{AppError, Result};
pub use itunes::ItunesClient;
pub use recommend::{phrase_for, MoodCatalog, Recommender, SearchBackend, StaticBackend, Track};
pub use session::{ChatSession, Message, Sender};
pub use tone::{classify, Mood};
