//! Model endpoint abstraction
//!
//! Agents never talk to the inference service directly. They hand a serialized
//! request body and a target identifier to a [`ModelInvoker`] and get the raw
//! response body back. The production implementation is
//! [`BedrockRuntime`](super::bedrock::BedrockRuntime); tests substitute a stub.

use super::error::InvocationError;
use async_trait::async_trait;

/// Opaque handle to a remote model endpoint
#[async_trait]
pub trait ModelInvoker: Send + Sync {
    /// Send `body` to the model or inference profile named by `target`
    async fn invoke(&self, target: &str, body: Vec<u8>) -> Result<Vec<u8>, InvocationError>;

    /// Short name used in logs
    fn endpoint_name(&self) -> &str;
}
