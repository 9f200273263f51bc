use crate::error::{AppError, Result};

pub const DEFAULT_ITUNES_BASE_URL: &str = "https://itunes.apple.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    Static,
    Search,
}

impl std::str::FromStr for BackendKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "static" => Ok(BackendKind::Static),
            "search" => Ok(BackendKind::Search),
            other => Err(AppError::Config(format!(
                "Unknown backend '{}', expected 'static' or 'search'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub itunes_base_url: String,
    pub backend: BackendKind,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let itunes_base_url = std::env::var("ITUNES_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_ITUNES_BASE_URL.to_string());

        let backend = match std::env::var("MOODTUNES_BACKEND") {
            Ok(value) => value.parse()?,
            Err(_) => BackendKind::Static,
        };

        Ok(Self {
            itunes_base_url,
            backend,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            itunes_base_url: DEFAULT_ITUNES_BASE_URL.to_string(),
            backend: BackendKind::Static,
        }
    }
}
