//! Dispatch tests for BedrockAgent
//!
//! These tests drive `process` against a stub endpoint and check the request
//! each model family receives and the text extracted from its response.

mod common;

use bedrock_playground::agents::{Agent, BedrockAgent};
use bedrock_playground::llm::ModelSchema;
use common::mocks::MockInvoker;
use serde_json::json;
use std::sync::Arc;

const CLAUDE_3: &str = "anthropic.claude-3-sonnet-20240229-v1:0";
const CLAUDE_V2: &str = "anthropic.claude-v2:1";
const TITAN: &str = "amazon.titan-text-express-v1";
const LLAMA: &str = "meta.llama3-70b-instruct-v1:0";
const PROFILE_ARN: &str =
    "arn:aws:bedrock:us-east-2:204664655215:inference-profile/us.anthropic.claude-3-7-sonnet-20250219-v1:0";

fn agent(invoker: &Arc<MockInvoker>, model_id: Option<&str>, arn: Option<&str>) -> BedrockAgent {
    BedrockAgent::with_client(
        invoker.clone(),
        model_id.map(str::to_string),
        arn.map(str::to_string),
    )
}

// =============================================================================
// Messages schema
// =============================================================================

#[tokio::test]
async fn test_messages_request_and_reply() {
    let invoker = Arc::new(MockInvoker::new(
        r#"{"id":"msg_01","type":"message","role":"assistant","content":[{"type":"text","text":"Paris"}],"stop_reason":"end_turn"}"#,
    ));
    let agent = agent(&invoker, Some(CLAUDE_3), None);

    let reply = agent.process("Capital of France?", None).await;
    assert_eq!(reply, "Paris");

    let call = invoker.last_call();
    assert_eq!(call.target, CLAUDE_3);
    assert_eq!(
        call.body,
        json!({
            "anthropic_version": "bedrock-2023-05-31",
            "max_tokens": 4000,
            "temperature": 0.7,
            "messages": [{"role": "user", "content": "Capital of France?"}]
        })
    );
}

#[tokio::test]
async fn test_messages_system_context_is_leading_user_turn() {
    let invoker = Arc::new(MockInvoker::new(r#"{"content":[{"type":"text","text":"ok"}]}"#));
    let agent = agent(&invoker, Some(CLAUDE_3), None);

    agent.process("Question", Some("You are terse.")).await;

    let messages = invoker.last_call().body["messages"].clone();
    assert_eq!(
        messages,
        json!([
            {"role": "user", "content": "You are terse."},
            {"role": "user", "content": "Question"}
        ])
    );
    assert!(invoker.last_call().body.get("system").is_none());
}

#[tokio::test]
async fn test_messages_routed_to_inference_profile() {
    let invoker = Arc::new(MockInvoker::new(r#"{"content":[{"type":"text","text":"ok"}]}"#));
    let agent = agent(&invoker, Some(CLAUDE_3), Some(PROFILE_ARN));

    agent.process("hi", None).await;
    assert_eq!(invoker.last_call().target, PROFILE_ARN);
}

#[tokio::test]
async fn test_arn_as_model_id_uses_messages_schema() {
    // The playground passes the profile ARN itself as the model id
    let invoker = Arc::new(MockInvoker::new(r#"{"content":[{"type":"text","text":"ok"}]}"#));
    let agent = agent(&invoker, Some(PROFILE_ARN), None);

    assert_eq!(agent.schema(), ModelSchema::Messages);
    assert_eq!(agent.process("hi", None).await, "ok");
    assert_eq!(invoker.last_call().target, PROFILE_ARN);
}

// =============================================================================
// Legacy prompt schema
// =============================================================================

#[tokio::test]
async fn test_text_completion_prompt_without_context() {
    let invoker = Arc::new(MockInvoker::new(r#"{"completion":" Hello!","stop_reason":"stop_sequence"}"#));
    let agent = agent(&invoker, Some(CLAUDE_V2), Some(PROFILE_ARN));

    assert_eq!(agent.process("Hi", None).await, " Hello!");

    let call = invoker.last_call();
    // Routing id is ignored outside the messages schema
    assert_eq!(call.target, CLAUDE_V2);
    assert_eq!(
        call.body,
        json!({
            "prompt": "Human: Hi\n\nAssistant:",
            "max_tokens_to_sample": 2000,
            "temperature": 0.7
        })
    );
}

#[tokio::test]
async fn test_text_completion_prompt_with_context() {
    let invoker = Arc::new(MockInvoker::new(r#"{"completion":"ok"}"#));
    let agent = agent(&invoker, Some(CLAUDE_V2), None);

    agent.process("Hi", Some("Be polite")).await;
    assert_eq!(
        invoker.last_call().body["prompt"],
        "Human: <system>Be polite</system>\n\nHi\n\nAssistant:"
    );
}

// =============================================================================
// Titan schema
// =============================================================================

#[tokio::test]
async fn test_titan_request_and_reply() {
    let invoker = Arc::new(MockInvoker::new(
        r#"{"inputTextTokenCount":5,"results":[{"tokenCount":3,"outputText":"Bonjour","completionReason":"FINISH"}]}"#,
    ));
    let agent = agent(&invoker, Some(TITAN), Some(PROFILE_ARN));

    assert_eq!(agent.process("Say hello in French", None).await, "Bonjour");

    let call = invoker.last_call();
    assert_eq!(call.target, TITAN);
    assert_eq!(
        call.body,
        json!({
            "inputText": "Say hello in French",
            "textGenerationConfig": {"maxTokenCount": 2000, "temperature": 0.7}
        })
    );
}

// =============================================================================
// Passthrough schema
// =============================================================================

#[tokio::test]
async fn test_passthrough_returns_raw_body() {
    let invoker = Arc::new(MockInvoker::new(
        r#"{"generation":"hi there","prompt_token_count":4,"stop_reason":"stop"}"#,
    ));
    let agent = agent(&invoker, Some(LLAMA), None);

    let reply = agent.process("hi", Some("ignored")).await;

    let call = invoker.last_call();
    assert_eq!(call.target, LLAMA);
    assert_eq!(call.body, json!({"prompt": "hi"}));

    assert_eq!(
        reply,
        r#"{"generation":"hi there","prompt_token_count":4,"stop_reason":"stop"}"#
    );
}

#[tokio::test]
async fn test_passthrough_keeps_key_order_and_large_numbers() {
    let raw = r#"{"zeta":1,"alpha":2,"big":123456789012345678901234567890}"#;
    let invoker = Arc::new(MockInvoker::new(raw));
    let agent = agent(&invoker, Some("meta.llama3-8b-instruct-v1:0"), None);

    assert_eq!(agent.process("hi", None).await, raw);
}

#[tokio::test]
async fn test_passthrough_non_json_body_becomes_reply_text() {
    let invoker = Arc::new(MockInvoker::new("not json"));
    let agent = agent(&invoker, Some(LLAMA), None);

    let reply = agent.process("hi", None).await;
    assert!(reply.starts_with("Error invoking model: "));
    assert!(reply.contains("passthrough"));
}

#[tokio::test]
async fn test_no_identifiers_targets_empty_model_id() {
    let invoker = Arc::new(MockInvoker::new(r#"{"anything":true}"#));
    let agent = agent(&invoker, None, None);

    agent.process("", None).await;

    let call = invoker.last_call();
    assert_eq!(call.target, "");
    assert_eq!(call.body, json!({"prompt": ""}));
}

// =============================================================================
// Failures and determinism
// =============================================================================

#[tokio::test]
async fn test_transport_failure_becomes_reply_text() {
    let invoker = Arc::new(MockInvoker::failing("dispatch failure: no credentials"));
    let agent = agent(&invoker, Some(CLAUDE_3), None);

    let reply = agent.process("hi", None).await;
    assert!(reply.starts_with("Error invoking model: "));
    assert!(reply.contains("dispatch failure: no credentials"));
}

#[tokio::test]
async fn test_unexpected_response_shape_becomes_reply_text() {
    let invoker = Arc::new(MockInvoker::new(r#"{"completion":"wrong family"}"#));
    let agent = agent(&invoker, Some(TITAN), None);

    let reply = agent.process("hi", None).await;
    assert!(reply.starts_with("Error invoking model: "));
    assert!(reply.contains("titan-text"));
}

#[tokio::test]
async fn test_empty_content_becomes_reply_text() {
    let invoker = Arc::new(MockInvoker::new(r#"{"content":[]}"#));
    let agent = agent(&invoker, Some(CLAUDE_3), None);

    let reply = agent.process("hi", None).await;
    assert!(reply.contains("content[0].text"));
}

#[tokio::test]
async fn test_repeated_calls_are_identical() {
    let invoker = Arc::new(MockInvoker::new(r#"{"completion":"same"}"#));
    let agent = agent(&invoker, Some(CLAUDE_V2), None);

    let first = agent.process("hi", Some("ctx")).await;
    let second = agent.process("hi", Some("ctx")).await;

    assert_eq!(first, second);
    let calls = invoker.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].body, calls[1].body);
    assert_eq!(calls[0].target, calls[1].target);
}

#[tokio::test]
async fn test_run_and_query_match_process() {
    let invoker = Arc::new(MockInvoker::new(r#"{"completion":"alias"}"#));
    let agent = agent(&invoker, Some(CLAUDE_V2), None);

    assert_eq!(agent.run("a", None).await, "alias");
    assert_eq!(agent.query("a", Some("b")).await, "alias");
    assert_eq!(invoker.calls().len(), 2);
}
