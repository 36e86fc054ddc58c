//! Reasoner adapters
//!
//! Implementations of the [`Reasoner`](parliament_application::Reasoner)
//! port: an OpenAI-compatible HTTP client and a timeout wrapper.

mod http;
mod timeout;

pub use http::HttpReasoner;
pub use timeout::TimeoutReasoner;

use crate::config::FileReasonerConfig;
use parliament_application::{NullReasoner, Reasoner};
use std::sync::Arc;
use tracing::{info, warn};

/// Select the reasoner for a configuration.
///
/// Disabled configurations get [`NullReasoner`], so every generation uses
/// the deterministic fallback. A missing API key is allowed (local
/// endpoints often need none).
pub fn build_reasoner(config: &FileReasonerConfig) -> Arc<dyn Reasoner> {
    if !config.enabled {
        return Arc::new(NullReasoner);
    }

    match HttpReasoner::new(&config.base_url, &config.model, config.resolve_api_key()) {
        Ok(http) => {
            info!("Reasoner: {} at {}", config.model, config.base_url);
            Arc::new(TimeoutReasoner::with_timeout_seconds(
                http,
                config.timeout_seconds,
            ))
        }
        Err(e) => {
            warn!("Reasoner disabled: {}", e);
            Arc::new(NullReasoner)
        }
    }
}
