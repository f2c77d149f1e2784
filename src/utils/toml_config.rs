//! TOML-based configuration for the agent playground
//!
//! `playground.toml` declares the agents the playground hosts. Each agent points
//! at a Bedrock model id and/or an inference-profile ARN, and may carry a persona
//! (`role` and `instructions`) that is sent along with every message.
//!
//! ```toml
//! [aws]
//! region = "us-east-2"
//!
//! [agents.claude]
//! inference_profile_arn = "arn:aws:bedrock:us-east-2:123456789012:inference-profile/us.anthropic.claude-3-7-sonnet-20250219-v1:0"
//!
//! [agents.github]
//! model_id = "anthropic.claude-3-5-sonnet-20240620-v1:0"
//! role = "Find code examples on GitHub"
//! instructions = "Review the repository and answer questions about it."
//! ```

use crate::types::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Root configuration structure loaded from playground.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlaygroundConfig {
    /// `[aws]` table
    #[serde(default)]
    pub aws: AwsConfig,

    /// Agent configurations keyed by name
    #[serde(default)]
    pub agents: BTreeMap<String, AgentConfig>,
}

// ============= AWS Configuration =============

/// AWS defaults shared by every agent
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AwsConfig {
    /// Used when `AWS_REGION` is not set
    pub region: Option<String>,
}

// ============= Agent Configuration =============

/// One `[agents.<name>]` table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Bedrock model identifier; also decides the request schema
    pub model_id: Option<String>,

    /// Inference-profile ARN; targets chat-style requests when set
    pub inference_profile_arn: Option<String>,

    /// Display name, defaults to the table key
    pub display_name: Option<String>,

    /// Longer description, shown instead of the role when set
    pub description: Option<String>,

    /// Short role shown in listings
    pub role: Option<String>,

    /// Sent as system context with every message
    pub instructions: Option<String>,
}

impl AgentConfig {
    /// Whether this agent wraps the model call in a persona
    pub fn has_persona(&self) -> bool {
        self.instructions.is_some() || self.role.is_some() || self.description.is_some()
    }
}

impl PlaygroundConfig {
    /// Load and validate a configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Configuration(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: PlaygroundConfig = toml::from_str(content)
            .map_err(|e| AppError::Configuration(format!("Invalid playground TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject an empty agent set or blank names; warn about agents without a model id
    pub fn validate(&self) -> Result<()> {
        if self.agents.is_empty() {
            return Err(AppError::Configuration(
                "No agents configured; add at least one [agents.<name>] table".to_string(),
            ));
        }

        for (name, agent) in &self.agents {
            if name.trim().is_empty() {
                return Err(AppError::Configuration(
                    "Agent names must not be empty".to_string(),
                ));
            }
            if agent.model_id.is_none() && agent.inference_profile_arn.is_none() {
                warn!(
                    agent = %name,
                    "Agent has neither model_id nor inference_profile_arn; requests will use the passthrough schema"
                );
            } else if agent.model_id.is_none() {
                warn!(
                    agent = %name,
                    "Agent has no model_id; the schema is chosen from model_id, so requests will use the passthrough schema"
                );
            }
        }

        Ok(())
    }

    /// Configuration of one agent
    pub fn get_agent(&self, name: &str) -> Option<&AgentConfig> {
        self.agents.get(name)
    }

    /// Agent names in sorted order
    pub fn agent_names(&self) -> Vec<&str> {
        self.agents.keys().map(String::as_str).collect()
    }
}
