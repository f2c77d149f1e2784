//! Agent Registry for the multi-agent playground
//!
//! The registry is the host side of the [`Agent`] contract. It owns named
//! `Arc<dyn Agent>` values and only ever calls `process` on them, so Bedrock
//! agents, personas and test doubles are interchangeable.

use crate::agents::{Agent, BedrockAgent, ConfigurableAgent};
use crate::llm::{BedrockRuntime, ModelInvoker};
use crate::types::{AppError, Result};
use crate::utils::config::AwsSettings;
use crate::utils::toml_config::PlaygroundConfig;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Named agents available to the playground
#[derive(Default)]
pub struct AgentRegistry {
    agents: BTreeMap<String, Arc<dyn Agent>>,
}

impl AgentRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Build every configured agent on a Bedrock client read from the environment
    pub fn from_config_with_env(config: &PlaygroundConfig) -> Self {
        let settings = AwsSettings::from_env_with_region(config.aws.region.as_deref());
        Self::from_config(config, Arc::new(BedrockRuntime::new(&settings)))
    }

    /// Build every configured agent on a shared endpoint client
    ///
    /// Agents with a role, description or instructions are wrapped in a
    /// [`ConfigurableAgent`]; the rest call the model directly.
    pub fn from_config(config: &PlaygroundConfig, client: Arc<dyn ModelInvoker>) -> Self {
        let mut registry = Self::new();

        for (name, agent_config) in &config.agents {
            let display_name = agent_config
                .display_name
                .clone()
                .unwrap_or_else(|| name.clone());

            let bedrock = BedrockAgent::with_client(
                client.clone(),
                agent_config.model_id.clone(),
                agent_config.inference_profile_arn.clone(),
            )
            .with_name(display_name);

            let agent: Arc<dyn Agent> = if agent_config.has_persona() {
                Arc::new(ConfigurableAgent::new(name, agent_config, Arc::new(bedrock)))
            } else {
                Arc::new(bedrock)
            };

            registry.register(name, agent);
        }

        tracing::info!(agents = registry.len(), "Agent registry built");
        registry
    }

    /// Register an agent, replacing any agent with the same name
    pub fn register(&mut self, name: &str, agent: Arc<dyn Agent>) {
        if self.agents.insert(name.to_string(), agent).is_some() {
            tracing::warn!(agent = %name, "Replaced previously registered agent");
        }
    }

    /// Look up an agent by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Agent>> {
        self.agents.get(name).cloned()
    }

    /// Whether `name` is registered
    pub fn has_agent(&self, name: &str) -> bool {
        self.agents.contains_key(name)
    }

    /// Registered names in sorted order
    pub fn names(&self) -> Vec<&str> {
        self.agents.keys().map(String::as_str).collect()
    }

    /// Number of registered agents
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// Whether no agent is registered
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Send a message to the named agent
    pub async fn ask(
        &self,
        name: &str,
        message: &str,
        system_context: Option<&str>,
    ) -> Result<String> {
        let agent = self
            .get(name)
            .ok_or_else(|| AppError::NotFound(format!("Agent '{}' is not registered", name)))?;
        Ok(agent.process(message, system_context).await)
    }
}
