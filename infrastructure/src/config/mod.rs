//! Configuration file loading for agent-parliament
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./parliament.toml` or `./.parliament.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/agent-parliament/config.toml`
//! 4. `PARLIAMENT_*` environment variables
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileAgentProfile, FileConfig, FileLogConfig, FileParliamentConfig,
    FileReasonerConfig,
};
pub use loader::ConfigLoader;
