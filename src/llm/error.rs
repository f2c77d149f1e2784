//! Dispatch failure types
//!
//! [`InvocationError`] is what the request builders, the endpoint adapter and the
//! response parsers return. At the agent boundary it is collapsed into an
//! [`InvocationFailure`], which carries a coarse [`FailureKind`], the error message
//! and a printable diagnostic trace.

use std::backtrace::{Backtrace, BacktraceStatus};
use std::error::Error as StdError;
use std::fmt;

/// Prefix of the string returned by `process` when a call fails
pub const FAILURE_PREFIX: &str = "Error invoking model";

/// Errors raised while building, sending or parsing a model request
#[derive(Debug, thiserror::Error)]
pub enum InvocationError {
    /// The request body could not be serialized
    #[error("failed to serialize request body: {0}")]
    Serialize(#[source] serde_json::Error),

    /// No usable AWS identity, so the request was never signed
    #[error("AWS credentials could not be resolved: {message}")]
    Credentials {
        /// SDK error text with its context
        message: String,
        /// Underlying SDK error
        #[source]
        source: Option<Box<dyn StdError + Send + Sync>>,
    },

    /// The request did not complete: connection, timeout or client-side failure
    #[error("model request failed before a response arrived: {message}")]
    Transport {
        /// SDK error text with its context
        message: String,
        /// Underlying SDK error
        #[source]
        source: Option<Box<dyn StdError + Send + Sync>>,
    },

    /// Bedrock rejected the request
    #[error("model endpoint returned an error: {message}")]
    Service {
        /// SDK error text with its context
        message: String,
        /// Underlying SDK error
        #[source]
        source: Option<Box<dyn StdError + Send + Sync>>,
    },

    /// The response body is not what the schema expects
    #[error("failed to decode {schema} response: {source}")]
    Decode {
        /// Schema name
        schema: &'static str,
        /// Parse error
        #[source]
        source: serde_json::Error,
    },

    /// The response parsed but the text field was missing
    #[error("{schema} response had no text at {field}")]
    EmptyResponse {
        /// Schema name
        schema: &'static str,
        /// Path of the missing field
        field: &'static str,
    },
}

impl InvocationError {
    /// Credential failure without an underlying error
    pub fn credentials(message: impl Into<String>) -> Self {
        InvocationError::Credentials {
            message: message.into(),
            source: None,
        }
    }

    /// Transport failure without an underlying error
    pub fn transport(message: impl Into<String>) -> Self {
        InvocationError::Transport {
            message: message.into(),
            source: None,
        }
    }

    /// Service failure without an underlying error
    pub fn service(message: impl Into<String>) -> Self {
        InvocationError::Service {
            message: message.into(),
            source: None,
        }
    }

    /// Coarse category of this error
    pub fn kind(&self) -> FailureKind {
        match self {
            InvocationError::Serialize(_) => FailureKind::Request,
            InvocationError::Credentials { .. } => FailureKind::Credentials,
            InvocationError::Transport { .. } => FailureKind::Transport,
            InvocationError::Service { .. } => FailureKind::Service,
            InvocationError::Decode { .. } => FailureKind::Decode,
            InvocationError::EmptyResponse { .. } => FailureKind::EmptyResponse,
        }
    }
}

/// Coarse classification of a failed invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The request body could not be built
    Request,
    /// No AWS identity was available to sign the request
    Credentials,
    /// The request never got a response
    Transport,
    /// Bedrock answered with an error
    Service,
    /// The response body did not match the schema
    Decode,
    /// The response matched but held no text
    EmptyResponse,
}

impl FailureKind {
    /// Stable lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Request => "request",
            FailureKind::Credentials => "credentials",
            FailureKind::Transport => "transport",
            FailureKind::Service => "service",
            FailureKind::Decode => "decode",
            FailureKind::EmptyResponse => "empty_response",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed invocation, ready to be logged or flattened into a reply string
#[derive(Debug, Clone)]
pub struct InvocationFailure {
    /// Coarse category, used in logs
    pub kind: FailureKind,
    /// Display text of the error
    pub message: String,
    /// Cause chain plus backtrace, when one was captured
    pub trace: String,
}

impl InvocationFailure {
    /// Render the failure the way `Agent::process` reports it to callers
    pub fn to_reply(&self) -> String {
        format!("{}: {}\n\n{}", FAILURE_PREFIX, self.message, self.trace)
    }
}

impl fmt::Display for InvocationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} failure: {}", self.kind, self.message)
    }
}

impl From<InvocationError> for InvocationFailure {
    fn from(err: InvocationError) -> Self {
        let kind = err.kind();
        let message = err.to_string();
        let trace = render_trace(&err, Backtrace::capture());
        Self {
            kind,
            message,
            trace,
        }
    }
}

/// Cause chain of `err`, followed by the backtrace when one was captured
fn render_trace(err: &(dyn StdError + 'static), backtrace: Backtrace) -> String {
    let mut trace = format!("error: {}", err);

    let mut source = err.source();
    let mut depth = 0;
    if source.is_some() {
        trace.push_str("\n\nCaused by:");
    }
    while let Some(cause) = source {
        trace.push_str(&format!("\n    {}: {}", depth, cause));
        depth += 1;
        source = cause.source();
    }

    if backtrace.status() == BacktraceStatus::Captured {
        trace.push_str(&format!("\n\nStack backtrace:\n{}", backtrace));
    }

    trace
}
