//! Proposal input: `--proposal` files and `--data key=value` pairs

use super::commands::Cli;
use parliament_domain::{ActionType, DebateContext};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProposalError {
    #[error("No proposal topic given (pass a TOPIC or --proposal)")]
    MissingTopic,

    #[error("Invalid --data entry '{0}' (expected key=value)")]
    InvalidData(String),

    #[error("Could not read {path}: {message}")]
    Read { path: String, message: String },

    #[error("Could not parse {path}: {message}")]
    Parse { path: String, message: String },
}

/// Proposal file layout (JSON or TOML)
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ProposalFile {
    pub topic: Option<String>,
    pub description: Option<String>,
    pub action: Option<String>,
    pub data: BTreeMap<String, Value>,
}

impl ProposalFile {
    /// Load by extension: `.toml` as TOML, anything else as JSON
    pub fn load(path: &Path) -> Result<Self, ProposalError> {
        let display = path.display().to_string();
        let raw = std::fs::read_to_string(path).map_err(|e| ProposalError::Read {
            path: display.clone(),
            message: e.to_string(),
        })?;

        let is_toml = path.extension().is_some_and(|ext| ext == "toml");
        let parsed = if is_toml {
            toml::from_str(&raw).map_err(|e| e.to_string())
        } else {
            serde_json::from_str(&raw).map_err(|e| e.to_string())
        };
        parsed.map_err(|message| ProposalError::Parse {
            path: display,
            message,
        })
    }
}

/// Split `key=value`; the value is read as JSON when it parses, else as a string
pub fn parse_data_pair(pair: &str) -> Result<(String, Value), ProposalError> {
    let (key, value) = pair
        .split_once('=')
        .filter(|(key, _)| !key.trim().is_empty())
        .ok_or_else(|| ProposalError::InvalidData(pair.to_string()))?;

    let value = value.trim();
    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((key.trim().to_string(), value))
}

/// Build the debate context from CLI arguments.
///
/// Command-line values override the proposal file field by field; `--data`
/// pairs are merged over the file's `data` table.
pub fn build_context(cli: &Cli) -> Result<DebateContext, ProposalError> {
    let file = match &cli.proposal {
        Some(path) => ProposalFile::load(path)?,
        None => ProposalFile::default(),
    };

    let topic = cli
        .topic
        .clone()
        .or(file.topic)
        .filter(|t| !t.trim().is_empty())
        .ok_or(ProposalError::MissingTopic)?;
    let description = cli.description.clone().or(file.description).unwrap_or_default();
    let action_type = cli
        .action
        .as_deref()
        .or(file.action.as_deref())
        .map(|a| a.parse::<ActionType>().unwrap_or_default())
        .unwrap_or_default();

    let mut context = DebateContext::new(topic, description, action_type);
    context.proposal_data = file.data;
    for pair in &cli.data {
        let (key, value) = parse_data_pair(pair)?;
        context.proposal_data.insert(key, value);
    }
    Ok(context)
}
