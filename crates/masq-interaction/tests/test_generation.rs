use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use masq_interaction::generation::{
    EMPTY_BACKSTORY_MESSAGE, EMPTY_PROMPT_MESSAGE, EMPTY_RESPONSE_MESSAGE, NOT_CONFIGURED_MESSAGE,
    TRANSPORT_ERROR_MESSAGE,
};
use masq_interaction::{Agent, AgentError, GenerationService};

/// Stub agent that records prompts and replays a scripted outcome.
struct ScriptedAgent {
    calls: Arc<Mutex<Vec<String>>>,
    outcome: Box<dyn Fn() -> Result<String, AgentError> + Send + Sync>,
}

impl ScriptedAgent {
    fn new(outcome: impl Fn() -> Result<String, AgentError> + Send + Sync + 'static) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            outcome: Box::new(outcome),
        }
    }

    async fn call_count(&self) -> usize {
        self.calls.lock().await.len()
    }

    async fn last_prompt(&self) -> Option<String> {
        self.calls.lock().await.last().cloned()
    }
}

#[async_trait]
impl Agent for ScriptedAgent {
    fn expertise(&self) -> &str {
        "Scripted test agent"
    }

    async fn execute(&self, prompt: &str) -> Result<String, AgentError> {
        self.calls.lock().await.push(prompt.to_string());
        (self.outcome)()
    }
}

fn service_with(agent: Arc<ScriptedAgent>) -> GenerationService {
    GenerationService::new(Some(agent))
}

#[tokio::test]
async fn successful_generation_is_trimmed() {
    let agent = Arc::new(ScriptedAgent::new(|| Ok("  A fine reply.\n".to_string())));
    let service = service_with(agent.clone());

    let reply = service
        .respond("A retired sea captain.", "Tell me about knots.")
        .await;

    assert_eq!(reply, "A fine reply.");
    let prompt = agent.last_prompt().await.expect("agent should be called");
    assert!(prompt.contains("A retired sea captain."));
    assert!(prompt.contains("Tell me about knots."));
}

#[tokio::test]
async fn safety_block_reason_is_displayed() {
    let agent = Arc::new(ScriptedAgent::new(|| {
        Err(AgentError::Blocked {
            reason: "R".to_string(),
        })
    }));
    let service = service_with(agent);

    let reply = service.respond("Backstory.", "Prompt.").await;

    assert!(reply.contains("R"), "block reason should be surfaced");
    assert!(reply.contains("blocked due to safety settings"));
}

#[tokio::test]
async fn transport_error_becomes_generic_message() {
    let agent = Arc::new(ScriptedAgent::new(|| {
        Err(AgentError::Process {
            status_code: Some(503),
            message: "connection reset".to_string(),
        })
    }));
    let service = service_with(agent);

    let reply = service.respond("Backstory.", "Prompt.").await;

    assert_eq!(reply, TRANSPORT_ERROR_MESSAGE);
}

#[tokio::test]
async fn empty_model_response_suggests_retry() {
    let agent = Arc::new(ScriptedAgent::new(|| Err(AgentError::EmptyResponse)));
    let service = service_with(agent);

    let reply = service.respond("Backstory.", "Prompt.").await;

    assert_eq!(reply, EMPTY_RESPONSE_MESSAGE);
}

#[tokio::test]
async fn empty_inputs_never_reach_the_model() {
    let agent = Arc::new(ScriptedAgent::new(|| Ok("unreachable".to_string())));
    let service = service_with(agent.clone());

    assert_eq!(service.respond("", "x").await, EMPTY_BACKSTORY_MESSAGE);
    assert_eq!(service.respond("x", "").await, EMPTY_PROMPT_MESSAGE);
    assert_eq!(agent.call_count().await, 0, "model must not be contacted");
}

#[tokio::test]
async fn missing_agent_disables_generation() {
    let service = GenerationService::new(None);

    assert!(!service.is_enabled());
    assert_eq!(
        service.respond("Backstory.", "Prompt.").await,
        NOT_CONFIGURED_MESSAGE
    );
}
