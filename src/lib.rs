//! # Bedrock Agent Playground
//!
//! Agents backed by models hosted on AWS Bedrock Runtime, behind one
//! `process(message, system_context) -> String` call.
//!
//! Bedrock model families disagree on request and response shapes. The
//! [`BedrockAgent`] picks the right one from the model identifier:
//!
//! - chat-style messages for `claude-3*` models
//! - the legacy `Human:`/`Assistant:` prompt for other `anthropic` models
//! - Titan text generation for `amazon` models
//! - a raw `{"prompt": ...}` passthrough for anything else
//!
//! It then returns the generated text. Failures never escape `process`; they come
//! back as a descriptive string. [`BedrockAgent::invoke`] exposes the typed
//! result instead.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bedrock_playground::agents::{Agent, BedrockAgent};
//!
//! #[tokio::main]
//! async fn main() {
//!     let agent = BedrockAgent::new(
//!         Some("anthropic.claude-3-haiku-20240307-v1:0".to_string()),
//!         None,
//!     );
//!     let reply = agent.process("Hello!", Some("Answer briefly")).await;
//!     println!("{}", reply);
//! }
//! ```
//!
//! ### Multi-agent playground
//!
//! ```rust,ignore
//! use bedrock_playground::{AgentRegistry, PlaygroundConfig};
//!
//! let config = PlaygroundConfig::load("playground.toml")?;
//! let registry = AgentRegistry::from_config_with_env(&config);
//! let reply = registry.ask("github", "What does this repo do?", None).await?;
//! ```
//!
//! ## Modules
//!
//! - [`agents`] - The `Agent` trait, the Bedrock dispatcher, personas and the registry
//! - [`llm`] - Endpoint client, model schemas and invocation errors
//! - [`types`] - Common types and error handling
//! - [`utils`] - Environment and TOML configuration

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

/// Agents and the multi-agent registry.
pub mod agents;
/// Command-line interface.
pub mod cli;
/// Model endpoint client and request/response schemas.
pub mod llm;
/// Core types (roles, agent kinds, errors).
pub mod types;
/// Configuration utilities (environment, TOML).
pub mod utils;

// Re-export commonly used types
pub use agents::{Agent, AgentRegistry, BedrockAgent, ConfigurableAgent};
pub use llm::{BedrockRuntime, InvocationFailure, ModelInvoker, ModelSchema};
pub use types::{AppError, Result};
pub use utils::config::AwsSettings;
pub use utils::toml_config::PlaygroundConfig;
