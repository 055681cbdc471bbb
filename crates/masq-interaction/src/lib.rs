//! Model-gateway layer for MASQ.
//!
//! Everything between the HTTP surface and the hosted generative model lives
//! here: the [`Agent`] seam, the Gemini REST client, prompt assembly, API
//! key configuration, and the [`GenerationService`] that flattens every
//! outcome into a user-displayable string.

pub mod agent;
pub mod config;
pub mod gemini_api_agent;
pub mod generation;
pub mod prompt;

pub use agent::{Agent, AgentError};
pub use config::SecretConfig;
pub use gemini_api_agent::GeminiApiAgent;
pub use generation::GenerationService;
pub use prompt::{PromptAssembler, PromptError};
