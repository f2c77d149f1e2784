//! Model endpoint client and request/response schemas
//!
//! This module separates *what* is sent to a hosted model from *how* it is sent:
//! - [`ModelInvoker`] - the endpoint seam: target id + JSON bytes in, JSON bytes out
//! - [`BedrockRuntime`] - the AWS Bedrock Runtime implementation of that seam
//! - [`ModelSchema`] - the closed set of request/response shapes, chosen from a model id
//! - [`InvocationError`] / [`InvocationFailure`] - typed failures and their flattened form
//!
//! # Example
//!
//! ```rust,ignore
//! use bedrock_playground::llm::{BedrockRuntime, ModelInvoker, ModelSchema};
//!
//! let schema = ModelSchema::classify("amazon.titan-text-express-v1");
//! let body = schema.build_body("What is 2+2?", None)?;
//! let reply = BedrockRuntime::from_env()
//!     .invoke("amazon.titan-text-express-v1", body)
//!     .await?;
//! println!("{}", schema.extract_text(&reply)?);
//! ```

/// AWS Bedrock Runtime endpoint.
pub mod bedrock;
/// Endpoint trait.
pub mod client;
/// Invocation errors and failure flattening.
pub mod error;
/// Model-family request/response schemas.
pub mod schema;

pub use bedrock::{BedrockRuntime, CredentialsSource};
pub use client::ModelInvoker;
pub use error::{FailureKind, InvocationError, InvocationFailure};
pub use schema::ModelSchema;
