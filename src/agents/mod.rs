/// Bedrock model dispatcher.
pub mod bedrock;
/// Persona wrapper.
pub mod configurable;
/// Named agents for the playground host.
pub mod registry;

use crate::types::AgentKind;
use async_trait::async_trait;

// Re-export commonly used types
pub use bedrock::BedrockAgent;
pub use configurable::ConfigurableAgent;
pub use registry::AgentRegistry;

/// Base trait for all agents
///
/// `process` never fails: implementations report errors inside the returned
/// text so a host can treat every agent the same way.
#[async_trait]
pub trait Agent: Send + Sync {
    /// Answer `message`, optionally steered by `system_context`
    async fn process(&self, message: &str, system_context: Option<&str>) -> String;

    /// Alias of [`process`](Agent::process)
    async fn run(&self, user_input: &str, system_context: Option<&str>) -> String {
        self.process(user_input, system_context).await
    }

    /// Alias of [`run`](Agent::run)
    async fn query(&self, prompt: &str, system_context: Option<&str>) -> String {
        self.run(prompt, system_context).await
    }

    /// Display name
    fn name(&self) -> &str;

    /// Get the agent kind
    fn kind(&self) -> AgentKind;

    /// One-line description for listings
    fn description(&self) -> Option<&str> {
        None
    }
}
