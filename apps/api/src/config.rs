use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// The AI credential is deliberately optional: the document store and
/// renderers stay fully usable without it, and only the AI endpoints fail.
#[derive(Debug, Clone)]
pub struct Config {
    pub storage_path: String,
    pub ai_api_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            storage_path: std::env::var("STORAGE_PATH")
                .unwrap_or_else(|_| "data/resumes.json".to_string()),
            ai_api_key: std::env::var("AI_API_KEY").ok().filter(|k| !k.is_empty()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
