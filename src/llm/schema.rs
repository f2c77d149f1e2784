//! Request and response shapes for the supported model families
//!
//! A model identifier is classified once into a [`ModelSchema`]. The schema then
//! decides how a user message and optional system context become a request body,
//! and where the generated text sits in the response body.
//!
//! | Schema | Selected when | Text extracted from |
//! |--------|---------------|---------------------|
//! | `Messages` | id contains `claude-3`, `claude-3-5` or `claude-3-7` | `content[0].text` |
//! | `TextCompletion` | lowercased id contains `anthropic` | `completion` |
//! | `TitanText` | lowercased id contains `amazon` | `results[0].outputText` |
//! | `Passthrough` | anything else, including an empty id | whole body |

use super::error::InvocationError;
use crate::types::MessageRole;
use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};

/// Version markers of the chat-style model generation
pub const MESSAGES_MARKERS: &[&str] = &["claude-3", "claude-3-5", "claude-3-7"];

/// Vendor marker of the legacy single-prompt family
pub const TEXT_COMPLETION_MARKER: &str = "anthropic";

/// Vendor marker of the alternate text-generation family
pub const TITAN_MARKER: &str = "amazon";

/// Protocol version tag sent with chat-style requests
pub const ANTHROPIC_VERSION: &str = "bedrock-2023-05-31";

/// `max_tokens` of chat-style requests
pub const MESSAGES_MAX_TOKENS: u32 = 4000;
/// `max_tokens_to_sample` of legacy prompt requests
pub const TEXT_COMPLETION_MAX_TOKENS: u32 = 2000;
/// `maxTokenCount` of Titan requests
pub const TITAN_MAX_TOKEN_COUNT: u32 = 2000;
/// Sampling temperature shared by every schema that sends one
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Request/response schema used for a model identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelSchema {
    /// Chat-style messages API
    Messages,
    /// Legacy `Human:`/`Assistant:` prompt API
    TextCompletion,
    /// Alternate vendor text-generation API
    TitanText,
    /// Unknown family: raw prompt in, raw body out
    Passthrough,
}

impl ModelSchema {
    /// Classify a model identifier. First match wins.
    pub fn classify(model_id: &str) -> Self {
        if MESSAGES_MARKERS.iter().any(|m| model_id.contains(m)) {
            return ModelSchema::Messages;
        }

        let lowered = model_id.to_lowercase();
        if lowered.contains(TEXT_COMPLETION_MARKER) {
            ModelSchema::TextCompletion
        } else if lowered.contains(TITAN_MARKER) {
            ModelSchema::TitanText
        } else {
            ModelSchema::Passthrough
        }
    }

    /// Short name used in logs and CLI output
    pub fn name(&self) -> &'static str {
        match self {
            ModelSchema::Messages => "messages",
            ModelSchema::TextCompletion => "text-completion",
            ModelSchema::TitanText => "titan-text",
            ModelSchema::Passthrough => "passthrough",
        }
    }

    /// Whether requests of this schema honor an inference-profile routing id
    pub fn uses_routing_id(&self) -> bool {
        matches!(self, ModelSchema::Messages)
    }

    /// Identifier a request is sent to.
    ///
    /// Only chat-style requests honor the inference profile; the other schemas
    /// always use the model id, or an empty string when there is none.
    pub fn target<'a>(
        &self,
        model_id: Option<&'a str>,
        inference_profile_arn: Option<&'a str>,
    ) -> &'a str {
        let model_id = model_id.unwrap_or_default();
        if self.uses_routing_id() {
            inference_profile_arn.unwrap_or(model_id)
        } else {
            model_id
        }
    }

    /// Serialize the request body for one conversation turn
    pub fn build_body(
        &self,
        message: &str,
        system_context: Option<&str>,
    ) -> Result<Vec<u8>, InvocationError> {
        let body = match self {
            ModelSchema::Messages => serde_json::to_vec(&MessagesRequest {
                anthropic_version: ANTHROPIC_VERSION,
                max_tokens: MESSAGES_MAX_TOKENS,
                temperature: DEFAULT_TEMPERATURE,
                messages: build_turns(message, system_context),
            }),
            ModelSchema::TextCompletion => serde_json::to_vec(&TextCompletionRequest {
                prompt: build_prompt(message, system_context),
                max_tokens_to_sample: TEXT_COMPLETION_MAX_TOKENS,
                temperature: DEFAULT_TEMPERATURE,
            }),
            ModelSchema::TitanText => serde_json::to_vec(&TitanRequest {
                input_text: message,
                text_generation_config: TitanGenerationConfig {
                    max_token_count: TITAN_MAX_TOKEN_COUNT,
                    temperature: DEFAULT_TEMPERATURE,
                },
            }),
            ModelSchema::Passthrough => serde_json::to_vec(&PassthroughRequest { prompt: message }),
        };

        body.map_err(InvocationError::Serialize)
    }

    /// Pull the generated text out of a response body
    pub fn extract_text(&self, body: &[u8]) -> Result<String, InvocationError> {
        let schema = self.name();
        let decode = |source| InvocationError::Decode { schema, source };

        match self {
            ModelSchema::Messages => {
                let response: MessagesResponse = serde_json::from_slice(body).map_err(decode)?;
                response
                    .content
                    .into_iter()
                    .next()
                    .and_then(|block| block.text)
                    .ok_or(InvocationError::EmptyResponse {
                        schema,
                        field: "content[0].text",
                    })
            }
            ModelSchema::TextCompletion => {
                let response: TextCompletionResponse =
                    serde_json::from_slice(body).map_err(decode)?;
                Ok(response.completion)
            }
            ModelSchema::TitanText => {
                let response: TitanResponse = serde_json::from_slice(body).map_err(decode)?;
                response
                    .results
                    .into_iter()
                    .next()
                    .map(|result| result.output_text)
                    .ok_or(InvocationError::EmptyResponse {
                        schema,
                        field: "results[0].outputText",
                    })
            }
            ModelSchema::Passthrough => {
                // Validate only; the reply is the body exactly as received
                serde_json::from_slice::<IgnoredAny>(body).map_err(decode)?;
                String::from_utf8(body.to_vec())
                    .map_err(|e| decode(<serde_json::Error as serde::de::Error>::custom(e)))
            }
        }
    }
}

impl std::fmt::Display for ModelSchema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One message in a chat-style conversation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Turn<'a> {
    /// Always [`MessageRole::User`]
    pub role: MessageRole,
    /// Turn text
    pub content: &'a str,
}

/// Turns for a chat-style request.
///
/// The system context travels as a leading `user` turn rather than through a
/// dedicated system field.
pub fn build_turns<'a>(message: &'a str, system_context: Option<&'a str>) -> Vec<Turn<'a>> {
    let mut turns = Vec::with_capacity(2);
    if let Some(context) = system_context {
        turns.push(Turn {
            role: MessageRole::User,
            content: context,
        });
    }
    turns.push(Turn {
        role: MessageRole::User,
        content: message,
    });
    turns
}

/// Prompt string for the legacy single-prompt API
pub fn build_prompt(message: &str, system_context: Option<&str>) -> String {
    match system_context {
        Some(context) => format!(
            "Human: <system>{}</system>\n\n{}\n\nAssistant:",
            context, message
        ),
        None => format!("Human: {}\n\nAssistant:", message),
    }
}

// ============= Request Bodies =============

#[derive(Serialize)]
struct MessagesRequest<'a> {
    anthropic_version: &'static str,
    max_tokens: u32,
    temperature: f64,
    messages: Vec<Turn<'a>>,
}

#[derive(Serialize)]
struct TextCompletionRequest {
    prompt: String,
    max_tokens_to_sample: u32,
    temperature: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TitanRequest<'a> {
    input_text: &'a str,
    text_generation_config: TitanGenerationConfig,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TitanGenerationConfig {
    max_token_count: u32,
    temperature: f64,
}

#[derive(Serialize)]
struct PassthroughRequest<'a> {
    prompt: &'a str,
}

// ============= Response Bodies =============

#[derive(Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize)]
struct TextCompletionResponse {
    completion: String,
}

#[derive(Deserialize)]
struct TitanResponse {
    #[serde(default)]
    results: Vec<TitanResult>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TitanResult {
    output_text: String,
}
