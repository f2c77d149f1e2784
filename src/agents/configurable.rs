//! Configurable Agent implementation
//!
//! A persona wrapper: a name, a role, and standing instructions layered over
//! any other [`Agent`]. Several personas can share one underlying model agent,
//! which is how the playground hosts many named agents on a single model.

use crate::agents::Agent;
use crate::types::AgentKind;
use crate::utils::toml_config::AgentConfig;
use async_trait::async_trait;
use std::sync::Arc;

/// An agent whose instructions come from configuration
pub struct ConfigurableAgent {
    name: String,
    description: Option<String>,
    role: Option<String>,
    instructions: Option<String>,
    inner: Arc<dyn Agent>,
}

impl ConfigurableAgent {
    /// Create a persona from its `playground.toml` table
    ///
    /// # Arguments
    ///
    /// * `name` - The agent name (the table key)
    /// * `config` - The agent configuration
    /// * `inner` - The agent that answers the merged request
    pub fn new(name: &str, config: &AgentConfig, inner: Arc<dyn Agent>) -> Self {
        Self {
            name: config
                .display_name
                .clone()
                .unwrap_or_else(|| name.to_string()),
            description: config.description.clone(),
            role: config.role.clone(),
            instructions: config.instructions.clone(),
            inner,
        }
    }

    /// Create a persona with explicit parameters
    pub fn with_params(
        name: impl Into<String>,
        role: Option<String>,
        instructions: Option<String>,
        inner: Arc<dyn Agent>,
    ) -> Self {
        Self {
            name: name.into(),
            description: None,
            role,
            instructions,
            inner,
        }
    }

    /// Standing instructions first, then the caller's context
    fn merge_context(&self, system_context: Option<&str>) -> Option<String> {
        match (self.instructions.as_deref(), system_context) {
            (Some(instructions), Some(context)) => {
                Some(format!("{}\n\n{}", instructions, context))
            }
            (Some(instructions), None) => Some(instructions.to_string()),
            (None, Some(context)) => Some(context.to_string()),
            (None, None) => None,
        }
    }
}

#[async_trait]
impl Agent for ConfigurableAgent {
    async fn process(&self, message: &str, system_context: Option<&str>) -> String {
        let context = self.merge_context(system_context);
        self.inner.process(message, context.as_deref()).await
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> AgentKind {
        AgentKind::Configurable
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref().or(self.role.as_deref())
    }
}
