//! Agent seam between the application and hosted model backends.
//!
//! The trait keeps the rest of the application independent of the concrete
//! model client, which also makes the error paths testable with stub agents.

use async_trait::async_trait;
use thiserror::Error;

/// Failure modes of a model invocation.
#[derive(Error, Debug)]
pub enum AgentError {
    /// The model refused to answer, naming a safety block reason.
    #[error("response blocked by safety settings: {reason}")]
    Blocked { reason: String },

    /// The model answered but produced no usable text.
    #[error("model returned an empty response")]
    EmptyResponse,

    /// Transport or HTTP-level failure talking to the model service.
    #[error("model request failed: {message}")]
    Process {
        status_code: Option<u16>,
        message: String,
    },

    /// Anything else, e.g. an unparseable response body.
    #[error("{0}")]
    Other(String),
}

/// A backend that turns a prompt string into generated text.
#[async_trait]
pub trait Agent: Send + Sync {
    /// Short human-readable description of what this agent is good at.
    fn expertise(&self) -> &str;

    /// Executes one generation request. Stateless; one call per user action.
    async fn execute(&self, prompt: &str) -> Result<String, AgentError>;
}
