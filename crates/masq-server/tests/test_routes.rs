use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use tempfile::TempDir;

use masq_core::persona::{Persona, PersonaStore};
use masq_interaction::{Agent, AgentError, GenerationService};
use masq_server::AppState;
use masq_server::routes::{
    self, GenerateRequest, PERSONA_VALIDATION_MESSAGE, health, list_personas, persona_image,
};

/// Stub agent with a fixed outcome.
struct FixedAgent(Result<String, fn() -> AgentError>);

#[async_trait]
impl Agent for FixedAgent {
    fn expertise(&self) -> &str {
        "Fixed test agent"
    }

    async fn execute(&self, _prompt: &str) -> Result<String, AgentError> {
        match &self.0 {
            Ok(text) => Ok(text.clone()),
            Err(make) => Err(make()),
        }
    }
}

fn state_with(
    personas: Vec<Persona>,
    images_dir: PathBuf,
    agent: Option<Arc<dyn Agent>>,
) -> Arc<AppState> {
    Arc::new(AppState::new(
        PersonaStore::from_personas(personas),
        GenerationService::new(agent),
        images_dir,
    ))
}

fn persona(name: &str, image: Option<&str>) -> Persona {
    Persona {
        name: name.to_string(),
        backstory: format!("{name}'s hidden backstory."),
        image: image.map(str::to_string),
    }
}

#[tokio::test]
async fn health_returns_ok_with_empty_state() {
    // No personas, no agent; the health check must not care.
    let _state = state_with(Vec::new(), PathBuf::from("/nonexistent"), None);
    assert_eq!(health().await, "OK");
}

#[tokio::test]
async fn personas_listing_includes_image_url_only_when_file_exists() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("anna.png"), b"png").unwrap();

    let state = state_with(
        vec![
            persona("Anna", Some("anna.png")),
            persona("Bartek", None),
            persona("Cyril", Some("missing.png")),
        ],
        temp_dir.path().to_path_buf(),
        None,
    );

    let axum::Json(summaries) = list_personas(State(state)).await;

    assert_eq!(summaries.len(), 3);
    assert_eq!(
        summaries[0].image_url.as_deref(),
        Some("/api/personas/Anna/image")
    );
    assert!(summaries[1].image_url.is_none(), "no image field");
    assert!(summaries[2].image_url.is_none(), "file does not exist");
}

#[tokio::test]
async fn generate_replies_for_known_persona() {
    let agent: Arc<dyn Agent> = Arc::new(FixedAgent(Ok("A reply.".to_string())));
    let state = state_with(
        vec![persona("Anna", None)],
        PathBuf::from("/nonexistent"),
        Some(agent),
    );

    let axum::Json(reply) = routes::generate(
        State(state),
        axum::Json(GenerateRequest {
            persona: "Anna".to_string(),
            prompt: "Say something.".to_string(),
        }),
    )
    .await;

    assert_eq!(reply.response, "A reply.");
}

#[tokio::test]
async fn generate_rejects_unknown_persona_without_5xx() {
    let agent: Arc<dyn Agent> = Arc::new(FixedAgent(Ok("unreachable".to_string())));
    let state = state_with(Vec::new(), PathBuf::from("/nonexistent"), Some(agent));

    let axum::Json(reply) = routes::generate(
        State(state),
        axum::Json(GenerateRequest {
            persona: "Ghost".to_string(),
            prompt: "Hello.".to_string(),
        }),
    )
    .await;

    assert_eq!(reply.response, PERSONA_VALIDATION_MESSAGE);
}

#[tokio::test]
async fn generate_surfaces_safety_block_reason() {
    let agent: Arc<dyn Agent> = Arc::new(FixedAgent(Err(|| AgentError::Blocked {
        reason: "R".to_string(),
    })));
    let state = state_with(
        vec![persona("Anna", None)],
        PathBuf::from("/nonexistent"),
        Some(agent),
    );

    let axum::Json(reply) = routes::generate(
        State(state),
        axum::Json(GenerateRequest {
            persona: "Anna".to_string(),
            prompt: "Hello.".to_string(),
        }),
    )
    .await;

    assert!(reply.response.contains("R"));
}

#[tokio::test]
async fn persona_image_serves_existing_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("anna.png"), b"fake png bytes").unwrap();

    let state = state_with(
        vec![persona("Anna", Some("anna.png"))],
        temp_dir.path().to_path_buf(),
        None,
    );

    let response = persona_image(State(state), Path("Anna".to_string())).await;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .expect("content type should be set")
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("image/png"));
}

#[tokio::test]
async fn persona_image_is_404_for_unknown_persona_or_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let state = state_with(
        vec![persona("Anna", Some("missing.png")), persona("Bartek", None)],
        temp_dir.path().to_path_buf(),
        None,
    );

    let response = persona_image(State(state.clone()), Path("Ghost".to_string())).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = persona_image(State(state.clone()), Path("Anna".to_string())).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = persona_image(State(state), Path("Bartek".to_string())).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
