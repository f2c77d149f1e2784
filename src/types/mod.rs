use serde::{Deserialize, Serialize};

// ============= Conversation Types =============

/// Role of a turn in a chat-style request.
///
/// Requests only ever carry user turns: the system context is sent as a
/// leading user turn rather than through a dedicated role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// Text written by the caller
    User,
}

// ============= Agent Types =============

/// Kind of agent held by the playground host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentKind {
    /// Calls a Bedrock-hosted model directly
    Bedrock,
    /// Persona wrapper that adds instructions before delegating
    Configurable,
}

impl AgentKind {
    /// Lowercase name, as used in listings
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentKind::Bedrock => "bedrock",
            AgentKind::Configurable => "configurable",
        }
    }
}

// ============= Error Types =============

/// Errors of the playground host, config loading and CLI.
///
/// Model calls never produce one: their failures come back as reply text.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Missing, unreadable or invalid configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// An agent name that is not configured or registered
    #[error("Not found: {0}")]
    NotFound(String),

    /// Filesystem failure while scaffolding a playground
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias over [`AppError`]
pub type Result<T> = std::result::Result<T, AppError>;
