//! Bedrock-backed agent
//!
//! [`BedrockAgent`] is the model dispatcher. It classifies its model id into a
//! [`ModelSchema`] once at construction. Each call then builds that schema's request,
//! sends it through a [`ModelInvoker`] and extracts the generated text.
//!
//! # Example
//!
//! ```rust,ignore
//! use bedrock_playground::agents::{Agent, BedrockAgent};
//!
//! let agent = BedrockAgent::new(Some("anthropic.claude-3-haiku-20240307-v1:0".into()), None);
//! let reply = agent.process("What is Bedrock?", Some("Answer in one sentence")).await;
//! ```

use crate::agents::Agent;
use crate::llm::{BedrockRuntime, InvocationFailure, ModelInvoker, ModelSchema};
use crate::types::AgentKind;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Name used when none is configured
pub const DEFAULT_AGENT_NAME: &str = "BedRockAgent";

/// Agent that dispatches messages to a Bedrock-hosted model
pub struct BedrockAgent {
    name: String,
    model_id: Option<String>,
    inference_profile_arn: Option<String>,
    schema: ModelSchema,
    client: Arc<dyn ModelInvoker>,
}

/// Target and body of one model call
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRequest {
    /// Schema the body was built with
    pub schema: ModelSchema,
    /// Model id or routing ARN the request goes to
    pub target: String,
    /// Serialized JSON body
    pub body: Vec<u8>,
}

impl BedrockAgent {
    /// Create an agent backed by a Bedrock Runtime client configured from the environment
    ///
    /// # Arguments
    ///
    /// * `model_id` - Model identifier (e.g., "anthropic.claude-3-haiku-20240307-v1:0")
    /// * `inference_profile_arn` - Optional profile ARN that chat-style requests are routed to
    pub fn new(model_id: Option<String>, inference_profile_arn: Option<String>) -> Self {
        Self::with_client(
            Arc::new(BedrockRuntime::from_env()),
            model_id,
            inference_profile_arn,
        )
    }

    /// Create an agent that sends requests through `client`
    pub fn with_client(
        client: Arc<dyn ModelInvoker>,
        model_id: Option<String>,
        inference_profile_arn: Option<String>,
    ) -> Self {
        let schema = ModelSchema::classify(model_id.as_deref().unwrap_or_default());

        info!(
            model = model_id
                .as_deref()
                .or(inference_profile_arn.as_deref())
                .unwrap_or("<none>"),
            schema = %schema,
            endpoint = client.endpoint_name(),
            "BedrockAgent initialized"
        );

        Self {
            name: DEFAULT_AGENT_NAME.to_string(),
            model_id,
            inference_profile_arn,
            schema,
            client,
        }
    }

    /// Set the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Configured model identifier
    pub fn model_id(&self) -> Option<&str> {
        self.model_id.as_deref()
    }

    /// Configured routing ARN
    pub fn inference_profile_arn(&self) -> Option<&str> {
        self.inference_profile_arn.as_deref()
    }

    /// Schema chosen at construction
    pub fn schema(&self) -> ModelSchema {
        self.schema
    }

    /// Identifier requests are sent to
    pub fn target(&self) -> &str {
        self.schema.target(
            self.model_id.as_deref(),
            self.inference_profile_arn.as_deref(),
        )
    }

    /// Build the request for one message without sending it
    pub fn prepare(
        &self,
        message: &str,
        system_context: Option<&str>,
    ) -> Result<PreparedRequest, InvocationFailure> {
        let body = self.schema.build_body(message, system_context)?;
        Ok(PreparedRequest {
            schema: self.schema,
            target: self.target().to_string(),
            body,
        })
    }

    /// Send one message and return the generated text or a typed failure
    pub async fn invoke(
        &self,
        message: &str,
        system_context: Option<&str>,
    ) -> Result<String, InvocationFailure> {
        let request = self.prepare(message, system_context)?;
        debug!(
            agent = %self.name,
            schema = %request.schema,
            target = %request.target,
            "Dispatching model request"
        );

        let response = self.client.invoke(&request.target, request.body).await?;
        Ok(self.schema.extract_text(&response)?)
    }
}

#[async_trait]
impl Agent for BedrockAgent {
    async fn process(&self, message: &str, system_context: Option<&str>) -> String {
        match self.invoke(message, system_context).await {
            Ok(text) => text,
            Err(failure) => {
                error!(
                    agent = %self.name,
                    kind = %failure.kind,
                    "Error in process: {}\n{}",
                    failure.message,
                    failure.trace
                );
                failure.to_reply()
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> AgentKind {
        AgentKind::Bedrock
    }
}
