//! Reasoner configuration from TOML (`[reasoner]` section)
//!
//! Any OpenAI-compatible chat completions endpoint works.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReasonerConfig {
    /// When false every generation uses the deterministic fallback
    pub enabled: bool,
    pub base_url: String,
    pub model: String,
    /// Environment variable name for the API key (default: "OPENAI_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended; use env var instead).
    pub api_key: Option<String>,
    pub timeout_seconds: u64,
}

impl Default for FileReasonerConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            base_url: "https://api.openai.com".to_string(),
            model: "gpt-4o-mini".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            api_key: None,
            timeout_seconds: 30,
        }
    }
}

impl FileReasonerConfig {
    /// Resolve the API key: explicit key first, then the environment variable
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|k| !k.is_empty())
            .or_else(|| std::env::var(&self.api_key_env).ok())
            .filter(|k| !k.is_empty())
    }
}
