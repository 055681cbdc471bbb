//! HTTP routes for the persona chat demo.
//!
//! Every generation outcome is returned as `200 OK` with a display string;
//! only the image endpoint uses HTTP status codes for its errors.

use std::sync::Arc;

use axum::Router;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use serde::{Deserialize, Serialize};

use crate::state::AppState;
use crate::ui;

/// Shown when the submitted persona name is unknown or missing.
pub const PERSONA_VALIDATION_MESSAGE: &str =
    "Error: Please select a valid persona from the dropdown.";

/// Builds the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/api/personas", get(list_personas))
        .route("/api/generate", post(generate))
        .route("/api/personas/{name}/image", get(persona_image))
        .with_state(state)
}

/// Serves the interactive page.
pub async fn index() -> Html<&'static str> {
    Html(ui::INDEX_HTML)
}

/// Health check; independent of persona store and model gateway state.
pub async fn health() -> &'static str {
    "OK"
}

/// One persona as listed to the page. The portrait URL is present only when
/// the image file actually resolves, so the page knows when to hide the
/// portrait element.
#[derive(Debug, Serialize)]
pub struct PersonaSummary {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

pub async fn list_personas(State(state): State<Arc<AppState>>) -> axum::Json<Vec<PersonaSummary>> {
    let summaries = state
        .store
        .iter()
        .map(|persona| PersonaSummary {
            name: persona.name.clone(),
            image_url: persona.resolve_image(&state.images_dir).map(|_| {
                format!(
                    "/api/personas/{}/image",
                    urlencoding::encode(&persona.name)
                )
            }),
        })
        .collect();
    axum::Json(summaries)
}

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub persona: String,
    #[serde(default)]
    pub prompt: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub response: String,
}

pub async fn generate(
    State(state): State<Arc<AppState>>,
    axum::Json(request): axum::Json<GenerateRequest>,
) -> axum::Json<GenerateResponse> {
    let Some(persona) = state.store.lookup(&request.persona) else {
        tracing::warn!(
            "[Routes] Generation requested for unknown persona '{}'",
            request.persona
        );
        return axum::Json(GenerateResponse {
            response: PERSONA_VALIDATION_MESSAGE.to_string(),
        });
    };

    tracing::info!("[Routes] Generating response for persona '{}'", persona.name);
    let response = state
        .service
        .respond(&persona.backstory, &request.prompt)
        .await;

    axum::Json(GenerateResponse { response })
}

/// Serves the persona's portrait, or 404 when the persona or file is absent.
pub async fn persona_image(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Response {
    let persona = match state.store.get(&name) {
        Ok(persona) => persona,
        Err(err) => {
            tracing::warn!("[Routes] {}", err);
            return StatusCode::NOT_FOUND.into_response();
        }
    };

    let Some(path) = persona.resolve_image(&state.images_dir) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    match tokio::fs::read(&path).await {
        Ok(bytes) => {
            let mime = mime_guess::from_path(&path).first_or_octet_stream();
            ([(header::CONTENT_TYPE, mime.to_string())], bytes).into_response()
        }
        Err(err) => {
            tracing::error!("[Routes] Failed to read image {}: {}", path.display(), err);
            StatusCode::NOT_FOUND.into_response()
        }
    }
}
