//! Mock implementations for testing.
//!
//! This module provides a stub model endpoint and a static agent that can be used
//! across different test files without duplication.

#![allow(dead_code)]

use async_trait::async_trait;
use bedrock_playground::agents::Agent;
use bedrock_playground::llm::{InvocationError, ModelInvoker};
use bedrock_playground::types::AgentKind;
use serde_json::Value;
use std::sync::Mutex;

/// One request seen by [`MockInvoker`]
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub target: String,
    pub body: Value,
}

/// Stub model endpoint with a fixed response.
///
/// Records every call so tests can assert on the target and the decoded body.
///
/// # Examples
///
/// ```ignore
/// let invoker = Arc::new(MockInvoker::new(r#"{"completion":"hi"}"#));
/// let invoker = Arc::new(MockInvoker::failing("ExpiredTokenException"));
/// ```
pub struct MockInvoker {
    response: String,
    failure: Option<String>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockInvoker {
    /// Create a stub that returns `response` as the body of every call.
    pub fn new(response: &str) -> Self {
        Self {
            response: response.to_string(),
            failure: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Create a stub whose calls always fail with a transport error.
    pub fn failing(message: &str) -> Self {
        Self {
            response: String::new(),
            failure: Some(message.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_call(&self) -> RecordedCall {
        self.calls()
            .pop()
            .expect("MockInvoker was never called")
    }
}

#[async_trait]
impl ModelInvoker for MockInvoker {
    async fn invoke(&self, target: &str, body: Vec<u8>) -> Result<Vec<u8>, InvocationError> {
        let body: Value = serde_json::from_slice(&body).expect("request body is JSON");
        self.calls.lock().unwrap().push(RecordedCall {
            target: target.to_string(),
            body,
        });

        match &self.failure {
            Some(message) => Err(InvocationError::transport(message.clone())),
            None => Ok(self.response.as_bytes().to_vec()),
        }
    }

    fn endpoint_name(&self) -> &str {
        "mock"
    }
}

/// Agent that always answers with the same text.
pub struct StaticAgent {
    pub name: String,
    pub reply: String,
}

impl StaticAgent {
    pub fn new(name: &str, reply: &str) -> Self {
        Self {
            name: name.to_string(),
            reply: reply.to_string(),
        }
    }
}

#[async_trait]
impl Agent for StaticAgent {
    async fn process(&self, _message: &str, _system_context: Option<&str>) -> String {
        self.reply.clone()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> AgentKind {
        AgentKind::Bedrock
    }
}
