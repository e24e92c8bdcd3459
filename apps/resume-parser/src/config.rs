use anyhow::{Context, Result};

/// Model used when `LLM_MODEL` is not set.
pub const DEFAULT_LLM_MODEL: &str = "claude-sonnet-4-5";

/// Largest accepted upload: 10 MiB.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Parser configuration loaded from environment variables.
/// Every variable is optional; without an API key only the heuristic
/// extractor runs.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: Option<String>,
    pub llm_model: String,
    pub max_upload_bytes: usize,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Config {
            anthropic_api_key: non_empty("ANTHROPIC_API_KEY"),
            llm_model: non_empty("LLM_MODEL").unwrap_or_else(|| DEFAULT_LLM_MODEL.to_string()),
            max_upload_bytes: match non_empty("MAX_UPLOAD_BYTES") {
                Some(raw) => raw
                    .trim()
                    .parse::<usize>()
                    .context("MAX_UPLOAD_BYTES must be a positive integer")?,
                None => DEFAULT_MAX_UPLOAD_BYTES,
            },
            rust_log: non_empty("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }

    pub fn llm_enabled(&self) -> bool {
        self.anthropic_api_key.is_some()
    }
}
