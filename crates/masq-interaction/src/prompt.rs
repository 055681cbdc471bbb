//! Prompt assembly.
//!
//! Fills a fixed natural-language template with the chosen backstory and the
//! user's request. Empty inputs are rejected here, before any model call.

use minijinja::{Environment, context};
use thiserror::Error;

/// Template instructing the model to answer the request while coloring the
/// tone with the weaknesses implied by the backstory.
const RESPONSE_TEMPLATE: &str = "\
You are a mean chatbot responding to a user.
You have been given some background information about this user.

USER BACKSTORY:
{{ backstory }}

Based on this backstory, respond to the user's following request.
Your response should directly answer the request, while ostentatiously (or
sometimes cheekily, depending on the context) weave in weaknesses, elements
or the overall tone suggested by their backstory.

USER REQUEST:
{{ user_prompt }}

YOUR RESPONSE:
";

/// Validation and rendering failures during prompt assembly.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PromptError {
    /// The selected persona has no usable backstory.
    #[error("backstory must not be empty")]
    EmptyBackstory,

    /// The user submitted an empty request.
    #[error("prompt must not be empty")]
    EmptyPrompt,

    /// Template rendering failed.
    #[error("failed to render prompt template: {0}")]
    Render(String),
}

/// Renders the response template for one interaction.
pub struct PromptAssembler {
    env: Environment<'static>,
}

impl PromptAssembler {
    pub fn new() -> Self {
        Self {
            env: Environment::new(),
        }
    }

    /// Substitutes `backstory` and `user_text` into the fixed template.
    ///
    /// Fails with a validation error when either input is empty or
    /// whitespace-only; this is user-facing validation, not a system error.
    pub fn assemble(&self, backstory: &str, user_text: &str) -> Result<String, PromptError> {
        if backstory.trim().is_empty() {
            return Err(PromptError::EmptyBackstory);
        }
        if user_text.trim().is_empty() {
            return Err(PromptError::EmptyPrompt);
        }

        self.env
            .render_str(
                RESPONSE_TEMPLATE,
                context! { backstory => backstory, user_prompt => user_text },
            )
            .map_err(|err| PromptError::Render(err.to_string()))
    }
}

impl Default for PromptAssembler {
    fn default() -> Self {
        Self::new()
    }
}
