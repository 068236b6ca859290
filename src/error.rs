//! Error types for the Integration Alerts Agent
//!
//! Feed failures are transient by design: the poller logs them and retries
//! on the next scheduled tick.

use thiserror::Error;

/// Main error type for poller operations
#[derive(Error, Debug)]
pub enum AgentError {
    /// Feed transport or status error
    #[error("Feed error: {0}")]
    Feed(String),

    /// Feed body could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid input data or arguments
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl AgentError {
    /// Create a feed error
    pub fn feed(msg: impl Into<String>) -> Self {
        AgentError::Feed(msg.into())
    }

    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        AgentError::Parse(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        AgentError::InvalidInput(msg.into())
    }
}

impl From<reqwest::Error> for AgentError {
    fn from(err: reqwest::Error) -> Self {
        AgentError::Feed(err.to_string())
    }
}

impl From<serde_json::Error> for AgentError {
    fn from(err: serde_json::Error) -> Self {
        AgentError::Parse(format!("JSON error: {}", err))
    }
}

/// Result type alias for poller operations
pub type Result<T> = std::result::Result<T, AgentError>;
