pub mod client;
pub mod models;

pub use client::ItunesClient;
pub use models::{ItunesApiTrack, SearchMode};
