use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use masq_core::persona::PersonaStore;
use masq_interaction::{Agent, GeminiApiAgent, GenerationService, SecretConfig};
use masq_server::routes;
use masq_server::{AppState, ServerSettings};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = ServerSettings::from_env();

    let store = PersonaStore::load(&settings.personas_file);
    if store.is_empty() {
        tracing::warn!("[Server] Persona store is empty; the dropdown will have no entries");
    }

    // A missing API key disables generation but does not abort startup.
    let agent = SecretConfig::discover(settings.keys_file.as_deref())
        .map(|config| Arc::new(GeminiApiAgent::from_config(&config)) as Arc<dyn Agent>);
    let service = GenerationService::new(agent);

    let state = Arc::new(AppState::new(store, service, settings.images_dir.clone()));
    let app = routes::router(state);

    let addr = format!("0.0.0.0:{}", settings.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("[Server] Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
