//! Generation service.
//!
//! Sits between the HTTP surface and the model agent: assembles the prompt,
//! invokes the agent, and flattens every outcome into a plain string for
//! display. Callers never see a raw error.

use std::sync::Arc;

use crate::agent::{Agent, AgentError};
use crate::prompt::{PromptAssembler, PromptError};

/// Shown when generation is requested but no API key was configured.
pub const NOT_CONFIGURED_MESSAGE: &str =
    "Error: Gemini client is not initialized. Please check API key and configuration logs.";

/// Shown when the selected persona carries no backstory.
pub const EMPTY_BACKSTORY_MESSAGE: &str = "Error: Please provide a user backstory.";

/// Shown when the user submits an empty request.
pub const EMPTY_PROMPT_MESSAGE: &str = "Error: Please provide a user prompt.";

/// Shown when the model returns nothing without naming a block reason.
pub const EMPTY_RESPONSE_MESSAGE: &str =
    "Sorry, I couldn't generate a response for that. Please try again or rephrase your request.";

/// Shown on any transport or service failure; details go to the logs only.
pub const TRANSPORT_ERROR_MESSAGE: &str =
    "An error occurred while contacting the AI model. Please check the logs for details.";

/// Stateless request/response service over an optional [`Agent`].
///
/// The agent is `None` when startup could not find an API key; the service
/// then degrades to a fixed explanatory message instead of failing.
pub struct GenerationService {
    agent: Option<Arc<dyn Agent>>,
    assembler: PromptAssembler,
}

impl GenerationService {
    pub fn new(agent: Option<Arc<dyn Agent>>) -> Self {
        match &agent {
            Some(agent) => {
                tracing::info!("[GenerationService] Using agent: {}", agent.expertise());
            }
            None => {
                tracing::warn!(
                    "[GenerationService] No model client configured; generation is disabled"
                );
            }
        }
        Self {
            agent,
            assembler: PromptAssembler::new(),
        }
    }

    /// Whether a model client is available.
    pub fn is_enabled(&self) -> bool {
        self.agent.is_some()
    }

    /// Produces the reply for one interaction.
    ///
    /// Always returns a displayable string; validation failures and model
    /// errors are converted here and never propagated.
    pub async fn respond(&self, backstory: &str, user_text: &str) -> String {
        let Some(agent) = &self.agent else {
            tracing::error!(
                "[GenerationService] Generation requested but no model client is configured"
            );
            return NOT_CONFIGURED_MESSAGE.to_string();
        };

        let prompt = match self.assembler.assemble(backstory, user_text) {
            Ok(prompt) => prompt,
            Err(PromptError::EmptyBackstory) => {
                tracing::warn!("[GenerationService] Request without backstory");
                return EMPTY_BACKSTORY_MESSAGE.to_string();
            }
            Err(PromptError::EmptyPrompt) => {
                tracing::warn!("[GenerationService] Request without prompt text");
                return EMPTY_PROMPT_MESSAGE.to_string();
            }
            Err(err) => {
                tracing::error!("[GenerationService] Failed to assemble prompt: {}", err);
                return TRANSPORT_ERROR_MESSAGE.to_string();
            }
        };

        tracing::info!("[GenerationService] Sending prompt to model");
        match agent.execute(&prompt).await {
            Ok(text) => {
                tracing::info!("[GenerationService] Received response from model");
                text.trim().to_string()
            }
            Err(AgentError::Blocked { reason }) => {
                tracing::warn!("[GenerationService] Response blocked. Reason: {}", reason);
                format!(
                    "My response was blocked due to safety settings ({reason}). \
                     Please try phrasing your request differently."
                )
            }
            Err(AgentError::EmptyResponse) => {
                tracing::warn!("[GenerationService] Model returned an empty response");
                EMPTY_RESPONSE_MESSAGE.to_string()
            }
            Err(err) => {
                tracing::error!("[GenerationService] Model call failed: {}", err);
                TRANSPORT_ERROR_MESSAGE.to_string()
            }
        }
    }
}
