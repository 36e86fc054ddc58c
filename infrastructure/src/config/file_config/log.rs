//! Log configuration from TOML (`[log]` section)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLogConfig {
    /// JSONL deliberation event log; disabled when unset
    pub deliberation_log: Option<String>,
}
